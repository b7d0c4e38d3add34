//! # Domain Types
//!
//! Small value types shared by the arithmetic unit, the generator and the
//! runner's configuration.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Operands     │   │    Operation    │   │     Outcome     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  a (i64)        │   │  Add            │   │  Integer(i64)   │       │
//! │  │  b (i64)        │   │  Subtract       │   │  Real(f64)      │       │
//! │  └─────────────────┘   │  Multiply       │   └─────────────────┘       │
//! │                        │  Divide         │                              │
//! │  ┌─────────────────┐   └─────────────────┘                              │
//! │  │    ListKind     │                                                    │
//! │  │  ─────────────  │                                                    │
//! │  │  Binary         │                                                    │
//! │  │  Integers       │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Operands
// =============================================================================

/// The two numbers the arithmetic unit works on.
///
/// Fields are private so a pair cannot change after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operands {
    a: i64,
    b: i64,
}

impl Operands {
    /// Creates an operand pair.
    #[inline]
    pub const fn new(a: i64, b: i64) -> Self {
        Operands { a, b }
    }

    /// Left operand.
    #[inline]
    pub const fn a(&self) -> i64 {
        self.a
    }

    /// Right operand (the divisor for `divide`).
    #[inline]
    pub const fn b(&self) -> i64 {
        self.b
    }
}

/// Default operands are (15, 5).
impl Default for Operands {
    fn default() -> Self {
        Operands::new(15, 5)
    }
}

// =============================================================================
// Operation
// =============================================================================

/// One of the four arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations in display order (sum, difference, product, quotient).
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Lowercase name, matching the serde representation.
    pub const fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Outcome
// =============================================================================

/// Result of applying an [`Operation`].
///
/// Division is real-valued while the other three stay integral, so the
/// result type differs by operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Integer(i64),
    Real(f64),
}

impl Outcome {
    /// Returns the integer value, or `None` for a real result.
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Outcome::Integer(v) => Some(*v),
            Outcome::Real(_) => None,
        }
    }

    /// Returns the value widened to `f64`.
    pub fn as_real(&self) -> f64 {
        match self {
            Outcome::Integer(v) => *v as f64,
            Outcome::Real(v) => *v,
        }
    }
}

/// Integers print plainly; reals always carry a fractional part (`3.0`).
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Integer(v) => write!(f, "{}", v),
            Outcome::Real(v) => write!(f, "{:?}", v),
        }
    }
}

// =============================================================================
// List Kind
// =============================================================================

/// Which list the generator should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ListKind {
    /// Shuffled balanced 0/1 list. `length` is accepted but not used; see
    /// [`crate::generator::NumberGenerator::balanced_binary`].
    Binary { length: usize },

    /// `length` uniform integers in `[min, max]`.
    Integers { length: usize, min: i64, max: i64 },
}

/// Default list is 52 integers in `[5, 15]`.
impl Default for ListKind {
    fn default() -> Self {
        ListKind::Integers {
            length: 52,
            min: 5,
            max: 15,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
