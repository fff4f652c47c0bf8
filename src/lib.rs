//! # pdqsort
//!
//! `pdqsort` (Public Domain QuickSORT) is a small, in-place, comparison-based sort: a
//! Quicksort with an insertion sort fallback for short ranges. It is not the
//! pattern-defeating quicksort that shares the acronym.
//!
//! Its distinguishing feature is the **pluggable exchange**. Every element movement the
//! sort makes, including moving the pivot around, is a single call to an exchange
//! strategy chosen per call. Swap in a strategy that also swaps a second array and that
//! array gets co-sorted, without the algorithm knowing it exists.
//!
//! ## Key Features
//!
//! - **In-Place**: No allocation. Auxiliary space is a fixed, cache-aligned stack of
//!   pending ranges whose depth stays at `O(log N)` for any input.
//! - **Co-sorting**: [`CoSort`] mirrors every swap into a parallel slice; [`exchange_fn`]
//!   accepts any closure.
//! - **Hybrid**: Sub-ranges at or below `1 << shift` elements are insertion sorted.
//!   The shift lives in a per-call [`Config`]; zero means pure Quicksort.
//! - **Type-erased entry point**: [`pdqsort_bytes`] sorts records of a run-time size in a
//!   flat byte buffer.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use pdqsort::{pdqsort, pdqsort_by};
//!
//! let mut data = vec![10, 1, 5, 0];
//! pdqsort(&mut data);
//! assert_eq!(data, vec![0, 1, 5, 10]);
//!
//! pdqsort_by(&mut data, |a: &i32, b: &i32| b.cmp(a));
//! assert_eq!(data, vec![10, 5, 1, 0]);
//! ```
//!
//! ### Co-sorting a Parallel Array
//!
//! The exchange strategy is an argument, so one call can co-sort and the next one not.
//!
//! ```rust
//! use pdqsort::{Config, CoSort, Swap, pdqsort_with};
//!
//! let ascending = |a: &f64, b: &f64| a.total_cmp(b);
//! let descending = |a: &f64, b: &f64| b.total_cmp(a);
//!
//! let mut data = [0.0, 1.0, 10.0, 5.0];
//! let mut data2 = [0.0, 1.0, 10.0, 5.0];
//!
//! pdqsort_with(&mut data, ascending, CoSort::new(&mut data2), &Config::default());
//! assert_eq!(data, [0.0, 1.0, 5.0, 10.0]);
//! assert_eq!(data2, [0.0, 1.0, 5.0, 10.0]);
//!
//! pdqsort_with(&mut data, descending, Swap, &Config::default());
//! assert_eq!(data, [10.0, 5.0, 1.0, 0.0]);
//! assert_eq!(data2, [0.0, 1.0, 5.0, 10.0]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Average Case**: O(N log N).
//! - **Worst Case**: O(N²). The pivot is always the midpoint element, with no
//!   median-of-three or randomization, so crafted inputs can force quadratic time.
//! - **Memory Overhead**: `usize::BITS + 1` stack frames of two `usize` each, plus nothing
//!   proportional to N.
//! - **Stability**: none; equal elements may be reordered.

pub mod algo;
pub mod bytes;
pub mod config;
pub mod core;
pub mod error;

pub use algo::{
    pdqsort, pdqsort_by, pdqsort_cosort_by, pdqsort_elements, pdqsort_with, try_pdqsort_with,
};
pub use bytes::{ByteExchange, ByteSwap, byte_exchange_fn, pdqsort_bytes};
pub use config::{Config, DEFAULT_INSERTION_THRESHOLD_SHIFT};
pub use crate::core::{CoSort, ElementAccess, Exchange, Swap, exchange_fn};
pub use error::SortError;

pub mod prelude {
    pub use crate::algo::{
        pdqsort, pdqsort_by, pdqsort_cosort_by, pdqsort_elements, pdqsort_with,
        try_pdqsort_with,
    };
    pub use crate::bytes::{ByteExchange, ByteSwap, byte_exchange_fn, pdqsort_bytes};
    pub use crate::config::Config;
    pub use crate::core::{CoSort, ElementAccess, Exchange, Swap, exchange_fn};
    pub use crate::error::SortError;
}
