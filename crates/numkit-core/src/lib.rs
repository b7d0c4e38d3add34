//! # numkit-core: Pure Logic for numkit
//!
//! Arithmetic on an operand pair, random list generation and three
//! interchangeable sorting algorithms. No I/O happens in this crate.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        numkit Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/runner (numkit binary)                    │   │
//! │  │    load RunConfig ──► run ──► RunReport ──► stdout              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ numkit-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │arithmetic │  │ generator │  │  sorter   │  │ validation│  │   │
//! │  │   │ Operands  │  │ NumberGen │  │ SortAlgo  │  │  bounds   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Operands, Operation, Outcome, ListKind
//! - [`arithmetic`] - The four operations on an operand pair
//! - [`generator`] - Balanced binary and bounded integer lists
//! - [`sorter`] - Merge, quick and bubble sort
//! - [`error`] - Domain error types
//! - [`validation`] - Argument checks
//!
//! ## Example Usage
//!
//! ```rust
//! use numkit_core::{NumberGenerator, Operands, SortAlgorithm};
//!
//! let ops = Operands::new(15, 5);
//! assert_eq!(ops.subtract().unwrap(), 10);
//!
//! let mut gen = NumberGenerator::seeded(42);
//! let list = gen.bounded_integers(52, 5, 15).unwrap();
//! let sorted = SortAlgorithm::Bubble.sort(&list);
//! assert!(numkit_core::sorter::is_sorted(&sorted));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod arithmetic;
pub mod error;
pub mod generator;
pub mod sorter;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use generator::NumberGenerator;
pub use sorter::{SortAlgorithm, SortMetrics};
pub use types::*;
