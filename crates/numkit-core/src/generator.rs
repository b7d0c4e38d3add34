//! # Generator Module
//!
//! Produces the number lists the sorter works on.
//!
//! ## Random Source
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  NumberGenerator<R: Rng>                                                │
//! │                                                                         │
//! │  ::from_entropy()  → StdRng seeded from the OS (different every run)   │
//! │  ::seeded(42)      → StdRng::seed_from_u64 (reproducible)              │
//! │  ::new(rng)        → any caller-supplied Rng                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use numkit_core::generator::NumberGenerator;
//!
//! let mut gen = NumberGenerator::seeded(7);
//! let list = gen.bounded_integers(52, 5, 15).unwrap();
//! assert_eq!(list.len(), 52);
//! assert!(list.iter().all(|v| (5..=15).contains(v)));
//! ```

use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::CoreResult;
use crate::types::ListKind;
use crate::validation::validate_bounds;

/// Number of 0/1 pairs produced by [`NumberGenerator::balanced_binary`].
pub const BALANCED_BINARY_PAIRS: usize = 26;

/// List generator over an injectable random source.
#[derive(Debug, Clone)]
pub struct NumberGenerator<R = StdRng> {
    rng: R,
}

impl NumberGenerator<StdRng> {
    /// Generator seeded from operating system entropy.
    ///
    /// Output differs between runs and cannot be replayed.
    pub fn from_entropy() -> Self {
        NumberGenerator {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generator with a fixed seed. Same seed, same lists.
    pub fn seeded(seed: u64) -> Self {
        NumberGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> NumberGenerator<R> {
    /// Wraps an existing random source.
    pub fn new(rng: R) -> Self {
        NumberGenerator { rng }
    }

    /// Returns a shuffled list of 26 zeros and 26 ones.
    ///
    /// ## Ignored `length`
    /// `length` is accepted for call-site compatibility but does not affect
    /// the output: the list always has [`BALANCED_BINARY_PAIRS`] pairs
    /// (52 elements). Use [`balanced_binary_pairs`](Self::balanced_binary_pairs)
    /// to choose the size.
    ///
    /// ## Example
    /// ```rust
    /// use numkit_core::generator::NumberGenerator;
    ///
    /// let mut gen = NumberGenerator::seeded(1);
    /// let bits = gen.balanced_binary(10);
    /// assert_eq!(bits.len(), 52);
    /// assert_eq!(bits.iter().filter(|&&b| b == 1).count(), 26);
    /// ```
    pub fn balanced_binary(&mut self, length: usize) -> Vec<i64> {
        if length != BALANCED_BINARY_PAIRS * 2 {
            debug!(
                requested = length,
                produced = BALANCED_BINARY_PAIRS * 2,
                "balanced_binary ignores the requested length"
            );
        }
        self.balanced_binary_pairs(BALANCED_BINARY_PAIRS)
    }

    /// Returns `pairs` zeros and `pairs` ones in uniformly random order.
    pub fn balanced_binary_pairs(&mut self, pairs: usize) -> Vec<i64> {
        let mut bits = Vec::with_capacity(pairs * 2);
        for _ in 0..pairs {
            bits.push(0);
            bits.push(1);
        }

        bits.shuffle(&mut self.rng);
        bits
    }

    /// Returns `length` independent uniform integers in `[min, max]`.
    ///
    /// ## Errors
    /// [`CoreError::InvalidArgument`](crate::CoreError::InvalidArgument)
    /// when `min > max`.
    pub fn bounded_integers(&mut self, length: usize, min: i64, max: i64) -> CoreResult<Vec<i64>> {
        validate_bounds("bounds", min, max)?;

        let range = Uniform::new_inclusive(min, max);
        let values: Vec<i64> = (&mut self.rng).sample_iter(range).take(length).collect();

        debug!(length, min, max, "Generated bounded integer list");
        Ok(values)
    }

    /// Generates the list described by `kind`.
    pub fn generate(&mut self, kind: &ListKind) -> CoreResult<Vec<i64>> {
        match *kind {
            ListKind::Binary { length } => Ok(self.balanced_binary(length)),
            ListKind::Integers { length, min, max } => self.bounded_integers(length, min, max),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    fn count(list: &[i64], value: i64) -> usize {
        list.iter().filter(|&&v| v == value).count()
    }

    #[test]
    fn test_balanced_binary_ignores_length() {
        let mut gen = NumberGenerator::seeded(3);
        for length in [0, 1, 10, 52, 1000] {
            let bits = gen.balanced_binary(length);
            assert_eq!(bits.len(), 52);
            assert_eq!(count(&bits, 0), 26);
            assert_eq!(count(&bits, 1), 26);
        }
    }

    #[test]
    fn test_balanced_binary_pairs() {
        let mut gen = NumberGenerator::seeded(3);
        let bits = gen.balanced_binary_pairs(4);
        assert_eq!(bits.len(), 8);
        assert_eq!(count(&bits, 0), 4);
        assert_eq!(count(&bits, 1), 4);

        assert!(gen.balanced_binary_pairs(0).is_empty());
    }

    #[test]
    fn test_balanced_binary_is_shuffled() {
        let mut gen = NumberGenerator::seeded(11);
        let unshuffled: Vec<i64> = (0..52).map(|i| i % 2).collect();
        assert_ne!(gen.balanced_binary(52), unshuffled);
    }

    #[test]
    fn test_balanced_binary_position_is_fair() {
        let mut gen = NumberGenerator::seeded(2024);
        let trials = 2000;
        let zeros_first = (0..trials)
            .filter(|_| gen.balanced_binary(52)[0] == 0)
            .count();
        assert!((800..=1200).contains(&zeros_first), "got {}", zeros_first);
    }

    #[test]
    fn test_bounded_integers_range_and_length() {
        let mut gen = NumberGenerator::seeded(5);
        let list = gen.bounded_integers(52, 5, 15).unwrap();
        assert_eq!(list.len(), 52);
        assert!(list.iter().all(|v| (5..=15).contains(v)));
    }

    #[test]
    fn test_bounded_integers_hits_both_ends() {
        let mut gen = NumberGenerator::seeded(9);
        let list = gen.bounded_integers(10_000, 5, 15).unwrap();
        for value in 5..=15 {
            assert!(count(&list, value) > 0, "missing {}", value);
        }
    }

    #[test]
    fn test_bounded_integers_single_value_range() {
        let mut gen = NumberGenerator::seeded(9);
        assert_eq!(gen.bounded_integers(4, 7, 7).unwrap(), vec![7, 7, 7, 7]);
    }

    #[test]
    fn test_bounded_integers_empty() {
        let mut gen = NumberGenerator::seeded(9);
        assert!(gen.bounded_integers(0, 1, 6).unwrap().is_empty());
    }

    #[test]
    fn test_bounded_integers_invalid_range() {
        let mut gen = NumberGenerator::seeded(9);
        let err = gen.bounded_integers(52, 15, 5).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidArgument(ValidationError::InvalidRange {
                field: "bounds".to_string(),
                min: 15,
                max: 5
            })
        );
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = NumberGenerator::seeded(42).bounded_integers(20, 0, 100).unwrap();
        let b = NumberGenerator::seeded(42).bounded_integers(20, 0, 100).unwrap();
        assert_eq!(a, b);

        let a = NumberGenerator::seeded(42).balanced_binary(52);
        let b = NumberGenerator::seeded(42).balanced_binary(52);
        assert_eq!(a, b);
    }

    #[test]
    fn test_new_accepts_any_rng() {
        let rng = rand::rngs::mock::StepRng::new(0, 1);
        let mut gen = NumberGenerator::new(rng);
        let list = gen.bounded_integers(3, 0, 9).unwrap();
        assert!(list.iter().all(|v| (0..=9).contains(v)));
    }

    #[test]
    fn test_generate_dispatches_on_kind() {
        let mut gen = NumberGenerator::seeded(1);

        let bits = gen.generate(&ListKind::Binary { length: 52 }).unwrap();
        assert_eq!(bits.len(), 52);

        let ints = gen
            .generate(&ListKind::Integers {
                length: 8,
                min: -2,
                max: 2,
            })
            .unwrap();
        assert_eq!(ints.len(), 8);
        assert!(ints.iter().all(|v| (-2..=2).contains(v)));
    }
}
