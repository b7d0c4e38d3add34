//! # numkit Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Load `RunConfig` (defaults, `NUMKIT_CONFIG`, `NUMKIT_SEED`)
//! 3. Run arithmetic, generation and sorting
//! 4. Print the report lines to stdout
//!
//! Any error aborts the run and is returned from `main`.

use numkit_runner::{run_from_env, RunnerError};

fn main() -> Result<(), RunnerError> {
    numkit_runner::init_tracing();

    let report = run_from_env()?;
    for line in report.lines() {
        println!("{}", line);
    }

    Ok(())
}
