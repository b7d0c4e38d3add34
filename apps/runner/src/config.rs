//! # Run Configuration
//!
//! Selects which steps a run performs.
//!
//! ## Configuration Sources (Priority Order)
//! 1. `NUMKIT_SEED` environment variable (seed only)
//! 2. JSON file named by `NUMKIT_CONFIG`
//! 3. Defaults (this file)
//!
//! With nothing set, the defaults reproduce the classic run: operands
//! (15, 5), subtraction and division, 52 integers in `[5, 15]`, bubble
//! sort, list printed.
//!
//! ## File Format
//! ```json
//! {
//!   "operands": { "a": 20, "b": 4 },
//!   "operations": ["add", "divide"],
//!   "list": { "kind": "binary", "length": 52 },
//!   "sort": "merge",
//!   "printList": true,
//!   "seed": 7
//! }
//! ```
//! Missing fields take their default. `"list": null` or `"sort": null`
//! skip generation or sorting.

use numkit_core::validation::validate_bounds;
use numkit_core::{ListKind, Operands, Operation, SortAlgorithm, ValidationError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a JSON config file.
pub const CONFIG_PATH_VAR: &str = "NUMKIT_CONFIG";

/// Environment variable overriding the generator seed.
pub const SEED_VAR: &str = "NUMKIT_SEED";

/// Everything a run needs to know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunConfig {
    /// Operand pair for the arithmetic step.
    pub operands: Operands,

    /// Run the arithmetic step at all.
    pub calculate: bool,

    /// Operations to compute. Others report zero.
    pub operations: Vec<Operation>,

    /// List to generate, or `None` to skip generation.
    pub list: Option<ListKind>,

    /// Algorithm to sort the list with, or `None` to leave it unsorted.
    pub sort: Option<SortAlgorithm>,

    /// Print the list after the arithmetic lines.
    pub print_list: bool,

    /// Generator seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            operands: Operands::default(),
            calculate: true,
            operations: vec![Operation::Subtract, Operation::Divide],
            list: Some(ListKind::default()),
            sort: Some(SortAlgorithm::Bubble),
            print_list: true,
            seed: None,
        }
    }
}

impl RunConfig {
    /// Loads configuration from `NUMKIT_CONFIG` and `NUMKIT_SEED`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_sources(
            std::env::var(CONFIG_PATH_VAR).ok(),
            std::env::var(SEED_VAR).ok(),
        )
    }

    /// Builds a config from an optional file path and an optional seed string.
    pub fn from_sources(path: Option<String>, seed: Option<String>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => RunConfig::default(),
        };

        if let Some(seed) = seed {
            let seed = seed
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue(SEED_VAR.to_string()))?;
            config.seed = Some(seed);
        }

        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RunConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that would otherwise fail halfway through a run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ListKind::Integers { min, max, .. }) = self.list {
            validate_bounds("list", min, max)?;
        }
        Ok(())
    }

    /// Whether `op` is enabled.
    pub fn is_enabled(&self, op: Operation) -> bool {
        self.operations.contains(&op)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid config: {0}")]
    Invalid(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_classic_run() {
        let config = RunConfig::default();
        assert_eq!(config.operands, Operands::new(15, 5));
        assert!(config.calculate);
        assert!(!config.is_enabled(Operation::Add));
        assert!(config.is_enabled(Operation::Subtract));
        assert!(!config.is_enabled(Operation::Multiply));
        assert!(config.is_enabled(Operation::Divide));
        assert_eq!(
            config.list,
            Some(ListKind::Integers {
                length: 52,
                min: 5,
                max: 15
            })
        );
        assert_eq!(config.sort, Some(SortAlgorithm::Bubble));
        assert!(config.print_list);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = RunConfig::from_json_str(r#"{ "sort": "merge", "seed": 3 }"#).unwrap();
        assert_eq!(config.sort, Some(SortAlgorithm::Merge));
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.operands, Operands::default());
        assert_eq!(config.operations, vec![Operation::Subtract, Operation::Divide]);
    }

    #[test]
    fn test_full_json() {
        let json = r#"{
            "operands": { "a": 20, "b": 4 },
            "calculate": false,
            "operations": ["add", "multiply"],
            "list": { "kind": "binary", "length": 10 },
            "sort": null,
            "printList": false
        }"#;
        let config = RunConfig::from_json_str(json).unwrap();
        assert_eq!(config.operands, Operands::new(20, 4));
        assert!(!config.calculate);
        assert_eq!(config.operations, vec![Operation::Add, Operation::Multiply]);
        assert_eq!(config.list, Some(ListKind::Binary { length: 10 }));
        assert_eq!(config.sort, None);
        assert!(!config.print_list);
    }

    #[test]
    fn test_null_list_disables_generation() {
        let config = RunConfig::from_json_str(r#"{ "list": null }"#).unwrap();
        assert_eq!(config.list, None);
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let json = r#"{ "list": { "kind": "integers", "length": 5, "min": 9, "max": 1 } }"#;
        let err = RunConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let err = RunConfig::from_json_str(r#"{ "sort": "heap" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_seed_override() {
        let config = RunConfig::from_sources(None, Some(" 99 ".to_string())).unwrap();
        assert_eq!(config.seed, Some(99));

        let err = RunConfig::from_sources(None, Some("abc".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref var) if var == SEED_VAR));
    }

    #[test]
    fn test_missing_file() {
        let err = RunConfig::from_sources(
            Some("/nonexistent/numkit/config.json".to_string()),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("numkit-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "sort": "quick", "seed": 12 }"#).unwrap();

        let config = RunConfig::from_sources(
            Some(path.to_string_lossy().into_owned()),
            Some("13".to_string()),
        )
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.sort, Some(SortAlgorithm::Quick));
        assert_eq!(config.seed, Some(13));
    }
}
