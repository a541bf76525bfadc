//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - sets up logging
//! - runs the conversion/solve pipeline on the built-in scenario
//! - prints the report

use log::info;

use crate::domain::{Scenario, SolverConfig};
use crate::error::AppError;
use crate::math::SvdSolver;

pub mod pipeline;

/// Entry point for the `lsq` binary.
pub fn run() -> Result<(), AppError> {
    init_logging();

    let solver = SvdSolver::new(SolverConfig::default());
    let run = pipeline::run_scenario(&solver, Scenario::example())?;
    info!("pipeline finished, {} unknowns", run.x.len());

    print!("{}", crate::report::format_run_report(&run));
    Ok(())
}

/// Initialise `env_logger`, honouring `RUST_LOG` from the environment or a `.env` file.
///
/// Defaults to `warn` so the report on stdout stays uncluttered.
pub fn init_logging() {
    dotenvy::dotenv().ok();
    let env = env_logger::Env::default().default_filter_or("warn");
    let _ = env_logger::Builder::from_env(env).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_report_layout() {
        init_logging();
        let run = pipeline::run_scenario(&SvdSolver::default(), Scenario::example()).unwrap();
        let report = crate::report::format_run_report(&run);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            &lines[..10],
            &[
                "Initial coefficient matrix",
                "Rows: 3",
                "Columns: 3",
                "1 2 3 ",
                "4 5 6 ",
                "7 8 9 ",
                "Initial right-hand side vector",
                "Rows: 3",
                "10",
                "11",
            ]
        );
        assert_eq!(lines.iter().filter(|l| **l == crate::report::SEPARATOR).count(), 2);
        assert!(lines.contains(&"Dense solution vector:"));

        let tail = &lines[lines.len() - 5..];
        assert_eq!(tail[0], "Solution vector");
        assert_eq!(tail[1], "Columns: 3");
    }
}
