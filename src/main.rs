use numbind::config::{parse_args, USAGE};

fn main() {
    numbind::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args[..]) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("numbind: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(e.exit_code());
        }
    };
    log::debug!("running {command:?}");

    let status = {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        numbind::cli::execute(&command, &mut out)
    };
    std::process::exit(status);
}
