//! # Sorter Module
//!
//! Three textbook sorts behind one [`SortAlgorithm`] switch.
//!
//! ## Algorithms
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Algorithm │ Time (avg / worst)   │ Extra space │ Stable               │
//! │  ──────────┼──────────────────────┼─────────────┼──────────            │
//! │  Merge     │ n log n / n log n    │ O(n)        │ yes                  │
//! │  Quick     │ n log n / n²         │ O(log n)    │ no                   │
//! │  Bubble    │ n²      / n²         │ O(1)        │ yes                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every entry point borrows its input and returns a new ascending `Vec`.
//! The work happens in place on a private copy.
//!
//! ## Usage
//! ```rust
//! use numkit_core::sorter::SortAlgorithm;
//!
//! for algorithm in SortAlgorithm::ALL {
//!     assert_eq!(algorithm.sort(&[9, 1, 5, 3]), vec![1, 3, 5, 9]);
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Sort Algorithm
// =============================================================================

/// Which sorting algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    /// Top-down merge sort with a left-biased merge.
    Merge,
    /// Quicksort with Lomuto partitioning on the last element.
    Quick,
    /// Bubble sort, n-1 passes, no early exit.
    Bubble,
}

impl SortAlgorithm {
    /// All algorithms, for substitution tests.
    pub const ALL: [SortAlgorithm; 3] = [
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Bubble,
    ];

    /// Lowercase name, matching `FromStr` and serde.
    pub const fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Bubble => "bubble",
        }
    }

    /// Whether equal elements keep their input order.
    pub const fn is_stable(&self) -> bool {
        match self {
            SortAlgorithm::Merge | SortAlgorithm::Bubble => true,
            SortAlgorithm::Quick => false,
        }
    }

    /// Returns `items` in ascending order.
    pub fn sort<T: Ord + Clone>(&self, items: &[T]) -> Vec<T> {
        self.sort_with_metrics(items).0
    }

    /// Sorts and reports how much work was done.
    ///
    /// ## Example
    /// ```rust
    /// use numkit_core::sorter::SortAlgorithm;
    ///
    /// let (sorted, metrics) = SortAlgorithm::Bubble.sort_with_metrics(&[9, 1, 5, 3]);
    /// assert_eq!(sorted, vec![1, 3, 5, 9]);
    /// assert_eq!(metrics.passes, 3);
    /// assert_eq!(metrics.comparisons, 6);
    /// ```
    pub fn sort_with_metrics<T: Ord + Clone>(&self, items: &[T]) -> (Vec<T>, SortMetrics) {
        let mut sorted = items.to_vec();
        let mut metrics = SortMetrics::default();

        match self {
            SortAlgorithm::Merge => merge_sort_in_place(&mut sorted, &mut metrics),
            SortAlgorithm::Quick => quick_sort_in_place(&mut sorted, &mut metrics),
            SortAlgorithm::Bubble => bubble_sort_in_place(&mut sorted, &mut metrics),
        }

        (sorted, metrics)
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort algorithm '{0}' (expected merge, quick or bubble)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for SortAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "merge" => Ok(SortAlgorithm::Merge),
            "quick" => Ok(SortAlgorithm::Quick),
            "bubble" => Ok(SortAlgorithm::Bubble),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

// =============================================================================
// Metrics
// =============================================================================

/// Work counters collected by [`SortAlgorithm::sort_with_metrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortMetrics {
    /// Element comparisons.
    pub comparisons: usize,
    /// Swaps (quick, bubble) or writes out of the merge buffers (merge).
    pub moves: usize,
    /// Outer passes (bubble), partition calls (quick) or merges (merge).
    pub passes: usize,
}

// =============================================================================
// Public Entry Points
// =============================================================================

/// Stable merge sort.
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    SortAlgorithm::Merge.sort(items)
}

/// Lomuto quicksort. Not stable.
pub fn quick_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    SortAlgorithm::Quick.sort(items)
}

/// Classic bubble sort. Stable.
pub fn bubble_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    SortAlgorithm::Bubble.sort(items)
}

/// Checks that `items` is in non-decreasing order.
#[inline]
pub fn is_sorted<T: Ord>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] <= w[1])
}

// =============================================================================
// Merge Sort
// =============================================================================

fn merge_sort_in_place<T: Ord + Clone>(v: &mut [T], metrics: &mut SortMetrics) {
    if v.len() <= 1 {
        return;
    }

    // Left half takes the extra element on odd lengths.
    let mid = (v.len() + 1) / 2;
    merge_sort_in_place(&mut v[..mid], metrics);
    merge_sort_in_place(&mut v[mid..], metrics);
    merge(v, mid, metrics);
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]`.
fn merge<T: Ord + Clone>(v: &mut [T], mid: usize, metrics: &mut SortMetrics) {
    let left = v[..mid].to_vec();
    let right = v[mid..].to_vec();

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        metrics.comparisons += 1;
        // `<=` takes from the left run on ties, which keeps the sort stable.
        if left[i] <= right[j] {
            v[k] = left[i].clone();
            i += 1;
        } else {
            v[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }

    for item in left[i..].iter().chain(&right[j..]) {
        v[k] = item.clone();
        k += 1;
    }

    metrics.moves += k;
    metrics.passes += 1;
}

// =============================================================================
// Quick Sort
// =============================================================================

/// Recurses into the smaller partition and loops on the larger one, so the
/// stack stays O(log n) deep even when every partition is degenerate.
fn quick_sort_in_place<T: Ord>(mut v: &mut [T], metrics: &mut SortMetrics) {
    while v.len() > 1 {
        let p = partition(v, metrics);
        let (left, right) = std::mem::take(&mut v).split_at_mut(p);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort_in_place(left, metrics);
            v = right;
        } else {
            quick_sort_in_place(right, metrics);
            v = left;
        }
    }
}

/// Lomuto partition around the last element. Returns the pivot's final index.
fn partition<T: Ord>(v: &mut [T], metrics: &mut SortMetrics) -> usize {
    let high = v.len() - 1;
    let mut boundary = 0;

    for j in 0..high {
        metrics.comparisons += 1;
        if v[j] < v[high] {
            v.swap(boundary, j);
            metrics.moves += 1;
            boundary += 1;
        }
    }

    v.swap(boundary, high);
    metrics.moves += 1;
    metrics.passes += 1;
    boundary
}

// =============================================================================
// Bubble Sort
// =============================================================================

fn bubble_sort_in_place<T: Ord>(v: &mut [T], metrics: &mut SortMetrics) {
    let n = v.len();
    for pass in 0..n.saturating_sub(1) {
        // The last `pass` elements are already in their final place.
        for j in 0..n - pass - 1 {
            metrics.comparisons += 1;
            if v[j] > v[j + 1] {
                v.swap(j, j + 1);
                metrics.moves += 1;
            }
        }
        metrics.passes += 1;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
