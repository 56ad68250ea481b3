//! Executes a parsed [`Command`], writing its report to `out`.

use std::io::{self, Write};
use std::num::NonZeroU32;

use crate::config::{Command, DemoSection, Implementation, USAGE};
use crate::error::{Error, Result};
use crate::generator::SeededRng;
use crate::hamming::{self, HammingDistanceCalculator};
use crate::reference;
use crate::simple_function::{add_doubles, add_generic, add_integers};

/// Runs `command` and returns the process exit status, reporting failures
/// on stderr. A reader closing the output early ends the run with status 0.
pub fn execute(command: &Command, out: &mut impl Write) -> i32 {
    match run(command, out) {
        Ok(()) => 0,
        Err(Error::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("output closed early: {e}");
            0
        }
        Err(e) => {
            eprintln!("numbind: {e}");
            e.exit_code()
        }
    }
}

pub fn run(command: &Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Version => writeln!(out, "numbind {}", crate::VERSION)?,
        Command::Help => writeln!(out, "{USAGE}")?,
        Command::Rand { count, seed } => draw(*count, *seed, out)?,
        Command::Hamming {
            size,
            seed,
            implementation,
        } => hamming_report(*size, *seed, *implementation, out)?,
        Command::Bench {
            size,
            seed,
            iterations,
        } => bench(*size, *seed, *iterations, out)?,
        Command::Demo { sections } => {
            writeln!(out, "=== numbind demo ===")?;
            for section in sections {
                demo(*section, out)?;
            }
            writeln!(out, "\n=== demo complete ===")?;
        }
    }
    Ok(())
}

/// Only the draws go to `out`, one per line.
fn draw(count: usize, seed: u64, out: &mut impl Write) -> Result<()> {
    log::info!("drawing {count} values with seed {seed}");
    let mut rng = SeededRng::new(seed);
    for _ in 0..count {
        writeln!(out, "{}", rng.next())?;
    }
    Ok(())
}

fn hamming_report(
    size: usize,
    seed: u64,
    implementation: Implementation,
    out: &mut impl Write,
) -> Result<()> {
    let (a, b) = reference::generate_test_data(size, seed);
    let (label, total) = match implementation {
        Implementation::Native => ("native", HammingDistanceCalculator::new(a, b)?.calculate()),
        Implementation::Reference => ("reference", reference::hamming_distance_batch(&a, &b)?),
    };
    log::info!("{label} hamming over {size} pairs (seed {seed}) = {total}");

    writeln!(out, "=== {label} hamming distance ===")?;
    writeln!(out, "size:  {size}")?;
    writeln!(out, "total: {total}")?;
    Ok(())
}

/// Mean seconds per call of `f` over `iterations` calls, and its last result.
fn time_it<T>(iterations: NonZeroU32, mut f: impl FnMut() -> T) -> (T, f64) {
    let start = instant::Instant::now();
    let mut result = f();
    for _ in 1..iterations.get() {
        result = f();
    }
    (result, start.elapsed().as_secs_f64() / f64::from(iterations.get()))
}

fn bench(size: usize, seed: u64, iterations: NonZeroU32, out: &mut impl Write) -> Result<()> {
    writeln!(out, "=== hamming distance: native vs reference ===")?;
    writeln!(out, "size: {size}, iterations: {iterations}")?;
    let (a, b) = reference::generate_test_data(size, seed);

    let (reference_total, reference_secs) =
        time_it(iterations, || reference::hamming_distance_batch(&a, &b));
    let reference_total = reference_total?;
    writeln!(out, "reference: {:.1}us", reference_secs * 1e6)?;

    let (native_total, native_secs) =
        time_it(iterations, || hamming::hamming_distance_batch(&a, &b));
    let native_total = native_total?;
    writeln!(out, "native:    {:.1}us", native_secs * 1e6)?;

    if native_secs > 0.0 {
        writeln!(out, "native is {:.0}x faster", reference_secs / native_secs)?;
    }
    if native_total == reference_total {
        writeln!(out, "results match ({native_total})")?;
    } else {
        log::warn!("native {native_total} != reference {reference_total}");
        writeln!(out, "results differ: native {native_total}, reference {reference_total}")?;
    }
    Ok(())
}

fn demo(section: DemoSection, out: &mut impl Write) -> Result<()> {
    match section {
        DemoSection::Rand => {
            writeln!(out, "\n--- rand ---")?;
            let mut rng = SeededRng::new(42);
            let before = [rng.next(), rng.next(), rng.next()];
            rng.set_seed(42);
            let after = [rng.next(), rng.next(), rng.next()];
            writeln!(out, "seed 42:   {:.3}, {:.3}, {:.3}", before[0], before[1], before[2])?;
            writeln!(out, "reseed 42: {:.3}, {:.3}, {:.3}", after[0], after[1], after[2])?;
        }
        DemoSection::Hamming => {
            writeln!(out, "\n--- hamming ---")?;
            let calc = HammingDistanceCalculator::new(
                vec![0x1234567890ABCDEF, u64::MAX],
                vec![0xFEDCBA0987654321, 0],
            )?;
            writeln!(out, "distance over {} pairs: {}", calc.size(), calc.calculate())?;
        }
        DemoSection::SimpleFunction => {
            writeln!(out, "\n--- simple functions ---")?;
            writeln!(out, "add_integers(5, 3) = {}", add_integers(5, 3))?;
            writeln!(out, "add_doubles(5.5, 3.2) = {}", add_doubles(5.5, 3.2))?;
            writeln!(out, "add_generic(10, 20) = {}", add_generic(10, 20))?;
            writeln!(out, "add_generic(7.7, 2.3) = {}", add_generic(7.7, 2.3))?;
        }
        DemoSection::Integration => {
            writeln!(out, "\n--- integration ---")?;
            let x = add_integers(100, 200) as u64;
            let y = add_integers(50, 150) as u64;
            writeln!(out, "generated values: {x}, {y}")?;
            let total = hamming::hamming_distance_batch(&[x, y], &[y, x])?;
            writeln!(out, "hamming distance of generated data: {total}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(command: Command) -> String {
        let mut buf = Vec::new();
        run(&command, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn rand_prints_only_draws() {
        let text = output(Command::Rand { count: 4, seed: 42 });
        let lines: Vec<f64> = text.lines().map(|l| l.parse().unwrap()).collect();
        let mut rng = SeededRng::new(42);
        let expected: Vec<f64> = (0..4).map(|_| rng.next()).collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn rand_zero_count_prints_nothing() {
        assert!(output(Command::Rand { count: 0, seed: 1 }).is_empty());
    }

    #[test]
    fn version_line() {
        assert_eq!(
            output(Command::Version),
            format!("numbind {}\n", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn implementations_report_same_total() {
        let native = output(Command::Hamming {
            size: 257,
            seed: 9,
            implementation: Implementation::Native,
        });
        let reference = output(Command::Hamming {
            size: 257,
            seed: 9,
            implementation: Implementation::Reference,
        });
        let total = |s: &str| s.lines().last().unwrap().to_string();
        assert!(native.contains("native"));
        assert_eq!(total(&native), total(&reference));
    }

    #[test]
    fn bench_reports_agreement() {
        let text = output(Command::Bench {
            size: 100,
            seed: 42,
            iterations: NonZeroU32::new(2).unwrap(),
        });
        assert!(text.contains("results match"));
    }

    #[test]
    fn bench_single_iteration_has_finite_timings() {
        let text = output(Command::Bench {
            size: 16,
            seed: 1,
            iterations: NonZeroU32::new(1).unwrap(),
        });
        assert!(!text.contains("NaN") && !text.contains("inf"), "{text}");
        assert!(text.contains("results match"));
    }

    struct FailingWriter(io::ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(self.0))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn closed_pipe_is_a_clean_exit() {
        let command = Command::Rand { count: 5, seed: 7 };
        let mut out = FailingWriter(io::ErrorKind::BrokenPipe);
        assert!(matches!(run(&command, &mut out), Err(Error::Io(_))));
        assert_eq!(execute(&command, &mut out), 0);
    }

    #[test]
    fn other_write_failures_exit_nonzero() {
        let command = Command::Rand { count: 5, seed: 7 };
        let mut out = FailingWriter(io::ErrorKind::PermissionDenied);
        assert_eq!(execute(&command, &mut out), 1);
    }

    #[test]
    fn successful_run_exits_zero() {
        let mut buf = Vec::new();
        assert_eq!(execute(&Command::Rand { count: 3, seed: 0 }, &mut buf), 0);
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 3);
    }

    #[test]
    fn demo_runs_every_section() {
        let text = output(Command::Demo {
            sections: DemoSection::ALL.to_vec(),
        });
        assert!(text.contains("add_integers(5, 3) = 8"));
        assert!(text.contains("distance over 2 pairs: 100"));
        assert!(text.contains("generated values: 300, 200"));
        let seeded: Vec<&str> = text
            .lines()
            .filter(|l| l.starts_with("seed 42:") || l.starts_with("reseed 42:"))
            .map(|l| l.split(':').nth(1).unwrap().trim())
            .collect();
        assert_eq!(seeded.len(), 2);
        assert_eq!(seeded[0], seeded[1]);
    }
}
