//! In-place Quicksort with an insertion sort fallback.
//!
//! The sort is made of three pieces, all written against [`ElementAccess`]:
//! - **Partitioner**: midpoint pivot, parked at the right end of the range while
//!   smaller elements are swapped to the front, then dropped into place.
//! - **Work-list scheduler**: a fixed-capacity explicit stack of pending ranges.
//!   The smaller side of every split ends up on top, which keeps the stack
//!   depth at `O(log N)` whatever the pivots look like.
//! - **Insertion sort**: takes over sub-ranges at or below the configured
//!   threshold (see [`Config`]).
//!
//! The typed entry points are [`pdqsort`], [`pdqsort_by`], [`pdqsort_with`],
//! [`try_pdqsort_with`] and [`pdqsort_cosort_by`]. [`pdqsort_elements`] sorts
//! anything implementing [`ElementAccess`].

use crate::config::Config;
use crate::core::{CoSort, ElementAccess, Exchange, SliceElements, Swap};
use crate::error::SortError;
use cuneiform::cuneiform;
use log::{debug, trace};
use std::cmp::Ordering;
use std::convert::Infallible;

/// Capacity of the work-list.
///
/// The stack never holds more than `floor(log2 N) + 1` ranges, and `N` fits
/// in a `usize`.
const STACK_FRAMES: usize = usize::BITS as usize + 1;

/// Sorts a slice in place in ascending order.
///
/// The sort is not stable: equal elements may be reordered.
///
/// # Examples
///
/// ```
/// use pdqsort::pdqsort;
///
/// let mut data = vec![5, 1, 4, 2, 3];
/// pdqsort(&mut data);
///
/// assert_eq!(data, vec![1, 2, 3, 4, 5]);
/// ```
pub fn pdqsort<T: Ord>(v: &mut [T]) {
    pdqsort_by(v, T::cmp);
}

/// Sorts a slice in place with a comparator, using the default exchange and
/// configuration.
///
/// # Examples
///
/// ```
/// use pdqsort::pdqsort_by;
///
/// let mut data = [1.5, -2.0, 10.0, 0.25];
/// pdqsort_by(&mut data, |a: &f64, b: &f64| b.total_cmp(a));
///
/// assert_eq!(data, [10.0, 1.5, 0.25, -2.0]);
/// ```
pub fn pdqsort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    pdqsort_with(v, compare, Swap, &Config::default());
}

/// Sorts a slice in place with an explicit exchange strategy and configuration.
///
/// All element movement goes through `exchange`. Passing a [`CoSort`], or any
/// other [`Exchange`] that mirrors swaps into parallel data, co-sorts that data.
pub fn pdqsort_with<T, F, X>(v: &mut [T], mut compare: F, exchange: X, config: &Config)
where
    F: FnMut(&T, &T) -> Ordering,
    X: Exchange<T>,
{
    let infallible = |a: &T, b: &T| Ok::<_, Infallible>(compare(a, b));
    match try_pdqsort_with(v, infallible, exchange, config) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Sorts a slice in place with a fallible comparator.
///
/// The first comparator error stops the sort and is returned as is. The slice
/// is then partially sorted but still holds exactly the elements it started
/// with, since every movement is an exchange.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use pdqsort::{Config, Swap, try_pdqsort_with};
///
/// let mut data = [3.0, f64::NAN, 1.0];
/// let result = try_pdqsort_with(
///     &mut data,
///     |a: &f64, b: &f64| a.partial_cmp(b).ok_or("NaN"),
///     Swap,
///     &Config::default(),
/// );
/// assert_eq!(result, Err("NaN"));
/// ```
pub fn try_pdqsort_with<T, E, F, X>(
    v: &mut [T],
    compare: F,
    exchange: X,
    config: &Config,
) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
    X: Exchange<T>,
{
    let mut elements = SliceElements::new(v, compare, exchange);
    quicksort(&mut elements, config).map(|_| ())
}

/// Sorts `v` and applies the same permutation to `other`.
///
/// Fails with [`SortError::LengthMismatch`] before touching either slice if
/// the lengths differ.
///
/// # Examples
///
/// ```
/// use pdqsort::pdqsort_cosort_by;
///
/// let mut keys = [0.0, 1.0, 10.0, 5.0];
/// let mut labels = ["zero", "one", "ten", "five"];
/// pdqsort_cosort_by(&mut keys, &mut labels, |a: &f64, b: &f64| a.total_cmp(b)).unwrap();
///
/// assert_eq!(keys, [0.0, 1.0, 5.0, 10.0]);
/// assert_eq!(labels, ["zero", "one", "five", "ten"]);
/// ```
pub fn pdqsort_cosort_by<T, U, F>(v: &mut [T], other: &mut [U], compare: F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() != other.len() {
        return Err(SortError::LengthMismatch {
            expected: v.len(),
            actual: other.len(),
        });
    }
    pdqsort_with(v, compare, CoSort::new(other), &Config::default());
    Ok(())
}

/// Sorts any [`ElementAccess`] implementation in place.
pub fn pdqsort_elements<A>(elements: &mut A, config: &Config) -> Result<(), A::Error>
where
    A: ElementAccess + ?Sized,
{
    quicksort(elements, config).map(|_| ())
}

/// Half-open range `[start, end)` of elements still waiting to be ordered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline(always)]
    fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.end - self.start
    }
}

// Cache-aligned stack storage.
#[cuneiform]
struct Frames {
    data: [Span; STACK_FRAMES],
}

/// Explicit LIFO stack of pending ranges, replacing call recursion.
pub(crate) struct WorkList {
    frames: Frames,
    len: usize,
    peak: usize,
}

impl WorkList {
    fn new() -> Self {
        Self {
            frames: Frames {
                data: [Span::default(); STACK_FRAMES],
            },
            len: 0,
            peak: 0,
        }
    }

    #[inline(always)]
    fn push(&mut self, span: Span) {
        self.frames.data[self.len] = span;
        self.len += 1;
        self.peak = self.peak.max(self.len);
    }

    #[inline(always)]
    fn pop(&mut self) -> Option<Span> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.frames.data[self.len])
    }

    /// Highest number of ranges pending at once.
    fn peak(&self) -> usize {
        self.peak
    }
}

/// Drives the sort to completion and returns the peak work-list depth.
pub(crate) fn quicksort<A>(elements: &mut A, config: &Config) -> Result<usize, A::Error>
where
    A: ElementAccess + ?Sized,
{
    let len = elements.len();
    if len < 2 {
        return Ok(0);
    }

    let threshold = config.insertion_threshold();
    let mut work = WorkList::new();
    work.push(Span::new(0, len));

    while let Some(span) = work.pop() {
        trace!("partitioning [{}, {})", span.start, span.end);
        let store = partition(elements, span)?;

        let left = Span::new(span.start, store);
        let right = Span::new(store + 1, span.end);

        // The side scheduled last is popped first.
        if left.len() < right.len() {
            schedule(elements, &mut work, right, threshold)?;
            schedule(elements, &mut work, left, threshold)?;
        } else {
            schedule(elements, &mut work, left, threshold)?;
            schedule(elements, &mut work, right, threshold)?;
        }
    }

    debug!(
        "sorted {} elements, insertion threshold {:?}, peak work-list depth {}",
        len,
        threshold,
        work.peak()
    );
    Ok(work.peak())
}

/// Insertion sorts `span` if it is small enough, otherwise defers it.
#[inline]
fn schedule<A>(
    elements: &mut A,
    work: &mut WorkList,
    span: Span,
    threshold: Option<usize>,
) -> Result<(), A::Error>
where
    A: ElementAccess + ?Sized,
{
    if span.len() < 2 {
        return Ok(());
    }
    match threshold {
        Some(threshold) if span.len() <= threshold => insertion_sort(elements, span),
        _ => {
            work.push(span);
            Ok(())
        }
    }
}

/// Partitions `span` (at least two elements) around its midpoint element.
///
/// Returns the pivot's final index `store`: everything in `[start, store)`
/// compares less than the pivot, everything in `(store, end)` does not.
pub(crate) fn partition<A>(elements: &mut A, span: Span) -> Result<usize, A::Error>
where
    A: ElementAccess + ?Sized,
{
    let right = span.end - 1;
    let middle = span.start + (right - span.start) / 2;

    // Park the pivot at the right end.
    exchange(elements, middle, right);

    let mut store = span.start;
    for index in span.start..right {
        if elements.compare(right, index)? == Ordering::Greater {
            exchange(elements, index, store);
            store += 1;
        }
    }

    exchange(elements, right, store);
    Ok(store)
}

/// Insertion sort confined to `span`.
pub(crate) fn insertion_sort<A>(elements: &mut A, span: Span) -> Result<(), A::Error>
where
    A: ElementAccess + ?Sized,
{
    for index in span.start + 1..span.end {
        let mut trail = index;
        while trail > span.start && elements.compare(trail - 1, trail)? == Ordering::Greater {
            elements.exchange(trail - 1, trail);
            trail -= 1;
        }
    }
    Ok(())
}

#[inline(always)]
fn exchange<A>(elements: &mut A, a: usize, b: usize)
where
    A: ElementAccess + ?Sized,
{
    if a != b {
        elements.exchange(a, b);
    }
}
