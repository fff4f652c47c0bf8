//! Errors reported by the validating entry points.

use thiserror::Error;

/// Invalid geometry passed to [`pdqsort_bytes`](crate::pdqsort_bytes) or
/// [`pdqsort_cosort_by`](crate::pdqsort_cosort_by).
///
/// Every variant is detected before the buffer is touched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    #[error("element size must be non-zero")]
    ZeroElementSize,

    #[error("{length} elements of {size} bytes overflow the address space")]
    GeometryOverflow { length: usize, size: usize },

    #[error("buffer holds {available} bytes but {required} are required")]
    BufferTooShort { required: usize, available: usize },

    #[error("parallel array has {actual} elements, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}
