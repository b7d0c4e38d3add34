//! # Error Types
//!
//! Domain-specific error types for numkit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  numkit-core errors (this file)                                        │
//! │  ├── CoreError        - Arithmetic and argument failures               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  runner errors (apps/runner)                                           │
//! │  ├── ConfigError      - Config file / env var problems                 │
//! │  └── RunnerError      - What `main` sees                               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → RunnerError → stderr              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, bounds, operation)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::types::Operation;

// =============================================================================
// Core Error
// =============================================================================

/// Core logic errors.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// Division with a zero divisor.
    ///
    /// ## When This Occurs
    /// - `Operands::divide` (or `apply(Operation::Divide)`) with `b == 0`
    ///
    /// The divisor is checked as an integer before the float division, so
    /// callers never observe `inf` or `NaN` quotients.
    #[error("Division by zero")]
    DivideByZero,

    /// Integer result does not fit in `i64`.
    #[error("{operation} overflowed")]
    Overflow { operation: Operation },

    /// An argument was rejected before any work was done.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before generation or arithmetic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Lower bound is greater than the upper bound.
    #[error("{field}: min ({min}) must not exceed max ({max})")]
    InvalidRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
