//! # Arithmetic Module
//!
//! The four operations on an [`Operands`] pair.
//!
//! ## Result Types
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add       a + b   → i64   (checked, Overflow on wrap)                 │
//! │  subtract  a - b   → i64   (checked, Overflow on wrap)                 │
//! │  multiply  a * b   → i64   (checked, Overflow on wrap)                 │
//! │  divide    a / b   → f64   (real-valued, DivideByZero when b == 0)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Division deliberately returns `f64` while the other three return `i64`:
//! 15 / 4 is 3.75, not 3. Callers that need one type for all four should go
//! through [`Operands::apply`] and match on [`Outcome`].
//!
//! ## Usage
//! ```rust
//! use numkit_core::Operands;
//!
//! let ops = Operands::new(15, 5);
//! assert_eq!(ops.subtract().unwrap(), 10);
//! assert_eq!(ops.divide().unwrap(), 3.0);
//! ```

use crate::error::{CoreError, CoreResult};
use crate::types::{Operands, Operation, Outcome};

impl Operands {
    /// Returns `a + b`.
    pub fn add(&self) -> CoreResult<i64> {
        self.a()
            .checked_add(self.b())
            .ok_or(CoreError::Overflow {
                operation: Operation::Add,
            })
    }

    /// Returns `a - b`.
    pub fn subtract(&self) -> CoreResult<i64> {
        self.a()
            .checked_sub(self.b())
            .ok_or(CoreError::Overflow {
                operation: Operation::Subtract,
            })
    }

    /// Returns `a * b`.
    ///
    /// ## Example
    /// ```rust
    /// use numkit_core::{CoreError, Operands};
    ///
    /// assert_eq!(Operands::new(15, 5).multiply().unwrap(), 75);
    /// assert!(matches!(
    ///     Operands::new(i64::MAX, 2).multiply(),
    ///     Err(CoreError::Overflow { .. })
    /// ));
    /// ```
    pub fn multiply(&self) -> CoreResult<i64> {
        self.a()
            .checked_mul(self.b())
            .ok_or(CoreError::Overflow {
                operation: Operation::Multiply,
            })
    }

    /// Returns the real-valued quotient `a / b`.
    ///
    /// ## Zero Divisor
    /// Plain `f64` division would give `inf` (or `NaN` for `0 / 0`). The
    /// divisor is checked as an integer first and the call fails with
    /// [`CoreError::DivideByZero`] instead.
    ///
    /// ## Example
    /// ```rust
    /// use numkit_core::{CoreError, Operands};
    ///
    /// assert_eq!(Operands::new(15, 4).divide().unwrap(), 3.75);
    /// assert_eq!(Operands::new(1, 0).divide(), Err(CoreError::DivideByZero));
    /// ```
    pub fn divide(&self) -> CoreResult<f64> {
        if self.b() == 0 {
            return Err(CoreError::DivideByZero);
        }
        Ok(self.a() as f64 / self.b() as f64)
    }

    /// Applies `op`, keeping the integer/real distinction in the result.
    pub fn apply(&self, op: Operation) -> CoreResult<Outcome> {
        match op {
            Operation::Add => self.add().map(Outcome::Integer),
            Operation::Subtract => self.subtract().map(Outcome::Integer),
            Operation::Multiply => self.multiply().map(Outcome::Integer),
            Operation::Divide => self.divide().map(Outcome::Real),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let ops = Operands::new(15, 5);
        assert_eq!(ops.add().unwrap(), 20);
        assert_eq!(ops.subtract().unwrap(), 10);
        assert_eq!(ops.multiply().unwrap(), 75);
        assert_eq!(ops.divide().unwrap(), 3.0);
    }

    #[test]
    fn test_divide_is_real_valued() {
        let ops = Operands::new(7, 2);
        assert_eq!(ops.divide().unwrap(), 3.5);

        let ops = Operands::new(-9, 4);
        assert_eq!(ops.divide().unwrap(), -2.25);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Operands::new(15, 0).divide(), Err(CoreError::DivideByZero));
        assert_eq!(Operands::new(0, 0).divide(), Err(CoreError::DivideByZero));
        assert_eq!(
            Operands::new(15, 0).apply(Operation::Divide),
            Err(CoreError::DivideByZero)
        );
    }

    #[test]
    fn test_zero_divisor_only_affects_divide() {
        let ops = Operands::new(15, 0);
        assert_eq!(ops.add().unwrap(), 15);
        assert_eq!(ops.subtract().unwrap(), 15);
        assert_eq!(ops.multiply().unwrap(), 0);
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            Operands::new(i64::MAX, 1).add(),
            Err(CoreError::Overflow {
                operation: Operation::Add
            })
        );
        assert_eq!(
            Operands::new(i64::MIN, 1).subtract(),
            Err(CoreError::Overflow {
                operation: Operation::Subtract
            })
        );
        assert_eq!(
            Operands::new(i64::MAX, 2).multiply(),
            Err(CoreError::Overflow {
                operation: Operation::Multiply
            })
        );
    }

    #[test]
    fn test_apply_keeps_result_types() {
        let ops = Operands::default();
        assert_eq!(ops.apply(Operation::Add).unwrap(), Outcome::Integer(20));
        assert_eq!(ops.apply(Operation::Subtract).unwrap(), Outcome::Integer(10));
        assert_eq!(ops.apply(Operation::Multiply).unwrap(), Outcome::Integer(75));
        assert_eq!(ops.apply(Operation::Divide).unwrap(), Outcome::Real(3.0));
    }
}
