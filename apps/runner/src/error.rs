//! # Runner Error Type
//!
//! Everything that can stop a run.
//!
//! ```text
//! ValidationError ─┐
//!                  ├─► CoreError ──┐
//! arithmetic/gen ──┘               ├─► RunnerError ──► main (stderr, exit 1)
//! file / JSON / env ─► ConfigError ┘
//! ```
//!
//! There is no recovery: the first error aborts the run.

use numkit_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

/// Error returned from [`crate::run`] and config loading.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Arithmetic or generation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_passes_through() {
        let err: RunnerError = CoreError::DivideByZero.into();
        assert_eq!(err.to_string(), "Division by zero");
        assert!(matches!(err, RunnerError::Core(CoreError::DivideByZero)));
    }

    #[test]
    fn test_config_error_passes_through() {
        let err: RunnerError = ConfigError::InvalidValue("NUMKIT_SEED".to_string()).into();
        assert_eq!(err.to_string(), "Invalid value for NUMKIT_SEED");
    }
}
