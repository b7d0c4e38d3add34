//! # Validation Module
//!
//! Argument checks shared by the generator and the runner's config loader.
//!
//! The runner validates a config when it is loaded so a bad file fails
//! before any output is printed; the generator checks again at call time
//! because it is also used directly.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an inclusive `[min, max]` range.
///
/// ## Rules
/// - `min <= max` (a single-value range `min == max` is allowed)
///
/// ## Example
/// ```rust
/// use numkit_core::validation::validate_bounds;
///
/// assert!(validate_bounds("bounds", 5, 15).is_ok());
/// assert!(validate_bounds("bounds", 7, 7).is_ok());
/// assert!(validate_bounds("bounds", 15, 5).is_err());
/// ```
pub fn validate_bounds(field: &str, min: i64, max: i64) -> ValidationResult<()> {
    if min > max {
        return Err(ValidationError::InvalidRange {
            field: field.to_string(),
            min,
            max,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_bounds() {
        assert!(validate_bounds("bounds", 5, 15).is_ok());
        assert!(validate_bounds("bounds", -3, -3).is_ok());
        assert!(validate_bounds("bounds", i64::MIN, i64::MAX).is_ok());

        let err = validate_bounds("list.bounds", 15, 5).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidRange {
                field: "list.bounds".to_string(),
                min: 15,
                max: 5
            }
        );
    }
}
