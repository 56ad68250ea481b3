//! Command-line configuration for the `numbind` binary.
//!
//! Arguments are parsed by hand into a [`Command`]. Logging is configured
//! separately through `RUST_LOG` (see [`crate::init_logging`]).

use crate::error::{Error, Result};
use std::num::{NonZeroU32, ParseIntError};
use std::str::FromStr;

pub const DEFAULT_RAND_SEED: u64 = 0;
pub const DEFAULT_DATA_SEED: u64 = 42;
pub const DEFAULT_HAMMING_SIZE: usize = 10_000;
pub const DEFAULT_BENCH_SIZE: usize = 100_000;
pub const DEFAULT_BENCH_ITERATIONS: NonZeroU32 = match NonZeroU32::new(10) {
    Some(n) => n,
    None => panic!("iteration default must be non-zero"),
};

pub const USAGE: &str = "\
Usage: numbind [--version | -v] [--help | -h] <COMMAND>

Commands:
  rand <N> [SEED] [--seed SEED]   Print N draws in (0, 1), one per line (default seed: 0)
  hamming [OPTIONS]               Compute the Hamming distance of generated test data
      --size <N>                  Number of word pairs (default: 10000)
      --seed <S>                  Test data seed (default: 42)
      --impl <native|reference>   Implementation to run (default: native)
  bench [OPTIONS]                 Time the native reducer against the reference one
      --size <N>                  Number of word pairs (default: 100000)
      --seed <S>                  Test data seed (default: 42)
      --iterations <K>            Calls timed per implementation (default: 10)
  demo [SECTION]                  Walk through the library (all sections by default)
      --rand | --hamming | --simple-function | --integration

Options:
  -v, --version                   Print version and exit
  -h, --help                      Show this help";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Implementation {
    Native,
    Reference,
}

impl FromStr for Implementation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "native" => Ok(Implementation::Native),
            "reference" => Ok(Implementation::Reference),
            other => Err(Error::Usage(format!(
                "unknown implementation '{other}' (expected native or reference)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoSection {
    Rand,
    Hamming,
    SimpleFunction,
    Integration,
}

impl DemoSection {
    pub const ALL: [DemoSection; 4] = [
        DemoSection::Rand,
        DemoSection::Hamming,
        DemoSection::SimpleFunction,
        DemoSection::Integration,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Version,
    Help,
    Rand {
        count: usize,
        seed: u64,
    },
    Hamming {
        size: usize,
        seed: u64,
        implementation: Implementation,
    },
    Bench {
        size: usize,
        seed: u64,
        iterations: NonZeroU32,
    },
    Demo {
        sections: Vec<DemoSection>,
    },
}

fn parse_number<T>(value: &str) -> Result<T>
where
    T: FromStr<Err = ParseIntError>,
{
    value.parse().map_err(|source| Error::InvalidNumber {
        value: value.to_string(),
        source,
    })
}

/// Takes the value following the flag at `args[*i]`, advancing `i` past it.
fn flag_value<'a, S: AsRef<str>>(args: &'a [S], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(|s| s.as_ref())
        .ok_or_else(|| Error::Usage(format!("missing value for {flag}")))
}

fn unknown(arg: &str) -> Error {
    Error::Usage(format!("unknown argument '{arg}'"))
}

/// Parses the arguments that follow the program name.
///
/// `--version` wins over everything else on the line, then `--help`.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command> {
    if args.iter().any(|a| matches!(a.as_ref(), "--version" | "-v")) {
        return Ok(Command::Version);
    }
    if args.iter().any(|a| matches!(a.as_ref(), "--help" | "-h")) {
        return Ok(Command::Help);
    }

    let Some(command) = args.first() else {
        return Err(Error::Usage("missing command".to_string()));
    };
    let rest = &args[1..];
    match command.as_ref() {
        "rand" => parse_rand(rest),
        "hamming" => parse_hamming(rest),
        "bench" => parse_bench(rest),
        "demo" => parse_demo(rest),
        other => Err(Error::Usage(format!("unknown command '{other}'"))),
    }
}

fn parse_rand<S: AsRef<str>>(args: &[S]) -> Result<Command> {
    let mut count = None;
    let mut flag_seed = None;
    let mut positional_seed = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_ref() {
            "--seed" if flag_seed.is_some() => {
                return Err(Error::Usage("rand: --seed given more than once".to_string()))
            }
            "--seed" => flag_seed = Some(parse_number(flag_value(args, &mut i, "--seed")?)?),
            arg if arg.starts_with('-') => return Err(unknown(arg)),
            arg if count.is_none() => count = Some(parse_number(arg)?),
            arg if positional_seed.is_none() => positional_seed = Some(parse_number(arg)?),
            arg => return Err(unknown(arg)),
        }
        i += 1;
    }

    let count = count.ok_or_else(|| Error::Usage("rand: missing draw count <N>".to_string()))?;
    let seed = match (flag_seed, positional_seed) {
        (Some(_), Some(_)) => {
            return Err(Error::Usage(
                "rand: give SEED either positionally or with --seed, not both".to_string(),
            ))
        }
        (flag, positional) => flag.or(positional).unwrap_or(DEFAULT_RAND_SEED),
    };
    Ok(Command::Rand { count, seed })
}

fn parse_hamming<S: AsRef<str>>(args: &[S]) -> Result<Command> {
    let mut size = DEFAULT_HAMMING_SIZE;
    let mut seed = DEFAULT_DATA_SEED;
    let mut implementation = Implementation::Native;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_ref() {
            "--size" | "-s" => size = parse_number(flag_value(args, &mut i, "--size")?)?,
            "--seed" => seed = parse_number(flag_value(args, &mut i, "--seed")?)?,
            "--impl" => implementation = flag_value(args, &mut i, "--impl")?.parse()?,
            other => return Err(unknown(other)),
        }
        i += 1;
    }

    Ok(Command::Hamming {
        size,
        seed,
        implementation,
    })
}

fn parse_bench<S: AsRef<str>>(args: &[S]) -> Result<Command> {
    let mut size = DEFAULT_BENCH_SIZE;
    let mut seed = DEFAULT_DATA_SEED;
    let mut iterations = DEFAULT_BENCH_ITERATIONS;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_ref() {
            "--size" | "-s" => size = parse_number(flag_value(args, &mut i, "--size")?)?,
            "--seed" => seed = parse_number(flag_value(args, &mut i, "--seed")?)?,
            "--iterations" => {
                iterations = parse_number(flag_value(args, &mut i, "--iterations")?)?
            }
            other => return Err(unknown(other)),
        }
        i += 1;
    }

    Ok(Command::Bench {
        size,
        seed,
        iterations,
    })
}

fn parse_demo<S: AsRef<str>>(args: &[S]) -> Result<Command> {
    let mut sections = Vec::new();
    for arg in args {
        let section = match arg.as_ref() {
            "--rand" => DemoSection::Rand,
            "--hamming" => DemoSection::Hamming,
            "--simple-function" => DemoSection::SimpleFunction,
            "--integration" => DemoSection::Integration,
            other => return Err(unknown(other)),
        };
        if !sections.contains(&section) {
            sections.push(section);
        }
    }
    if sections.is_empty() {
        sections = DemoSection::ALL.to_vec();
    }
    Ok(Command::Demo { sections })
}
