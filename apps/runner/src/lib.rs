//! # numkit Runner Library
//!
//! Drives one run: arithmetic, list generation, sorting, in that order.
//!
//! ## Module Organization
//! ```text
//! numkit_runner/
//! ├── lib.rs          ◄─── You are here (run orchestration & logging setup)
//! ├── config.rs       ◄─── RunConfig: defaults, JSON file, env overrides
//! ├── report.rs       ◄─── RunReport and console rendering
//! └── error.rs        ◄─── RunnerError
//! ```
//!
//! ## Example
//! ```rust
//! use numkit_runner::{run, RunConfig};
//!
//! let config = RunConfig { seed: Some(1), ..RunConfig::default() };
//! let report = run(&config).unwrap();
//! let lines = report.lines();
//! assert_eq!(&lines[..4], ["0", "10", "0", "3.0"]);
//! ```

pub mod config;
pub mod error;
pub mod report;

use numkit_core::{NumberGenerator, Operands, Operation};
use rand::Rng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub use config::{ConfigError, RunConfig};
pub use error::RunnerError;
pub use report::{ArithmeticReport, RunReport};

/// Loads the config from `NUMKIT_CONFIG` / `NUMKIT_SEED` and runs it.
pub fn run_from_env() -> Result<RunReport, RunnerError> {
    run_loaded(RunConfig::from_env()?)
}

/// Loads the config from an optional file path and seed string, then runs it.
pub fn run_from_sources(
    path: Option<String>,
    seed: Option<String>,
) -> Result<RunReport, RunnerError> {
    run_loaded(RunConfig::from_sources(path, seed)?)
}

fn run_loaded(config: RunConfig) -> Result<RunReport, RunnerError> {
    info!(seed = ?config.seed, "Configuration loaded");
    run(&config)
}

/// Runs the configured steps with a generator built from `config.seed`.
///
/// ## Run Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Arithmetic (if calculate)                                           │
/// │     • each enabled operation on config.operands                         │
/// │     • disabled operations report 0                                      │
/// │                                                                         │
/// │  2. Generate list (if list is set)                                      │
/// │     • seeded StdRng when config.seed is set, OS entropy otherwise       │
/// │                                                                         │
/// │  3. Sort list (if sort is set)                                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(config: &RunConfig) -> Result<RunReport, RunnerError> {
    let mut generator = match config.seed {
        Some(seed) => NumberGenerator::seeded(seed),
        None => NumberGenerator::from_entropy(),
    };
    run_with_generator(config, &mut generator)
}

/// Runs the configured steps with a caller-supplied generator.
pub fn run_with_generator<R: Rng>(
    config: &RunConfig,
    generator: &mut NumberGenerator<R>,
) -> Result<RunReport, RunnerError> {
    info!(
        calculate = config.calculate,
        list = ?config.list,
        sort = ?config.sort,
        "Starting run"
    );

    let arithmetic = if config.calculate {
        Some(calculate(config.operands, &config.operations)?)
    } else {
        None
    };

    let numbers = match &config.list {
        Some(kind) => {
            let list = generator.generate(kind)?;
            debug!(len = list.len(), "List generated");

            let list = match config.sort {
                Some(algorithm) => {
                    let (sorted, metrics) = algorithm.sort_with_metrics(&list);
                    info!(
                        %algorithm,
                        comparisons = metrics.comparisons,
                        moves = metrics.moves,
                        passes = metrics.passes,
                        "List sorted"
                    );
                    sorted
                }
                None => list,
            };
            Some(list)
        }
        None => None,
    };

    Ok(RunReport {
        arithmetic,
        numbers,
        print_list: config.print_list,
    })
}

/// Computes each enabled operation; the rest stay at zero.
fn calculate(operands: Operands, operations: &[Operation]) -> Result<ArithmeticReport, RunnerError> {
    let mut report = ArithmeticReport::default();

    for &operation in operations {
        let outcome = operands.apply(operation)?;
        debug!(%operation, %outcome, "Operation applied");
        report.record(operation, outcome);
    }

    debug!(?report, "Arithmetic complete");
    Ok(report)
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout carries only the report lines.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=numkit_core=debug` - Debug for the core crate only
/// - Default: warnings, plus INFO for the numkit crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,numkit_runner=info,numkit_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
