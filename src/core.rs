//! Core traits and types for pdqsort.
//!
//! This module defines:
//! - [`ElementAccess`]: the index-addressed view the algorithm sorts through.
//! - [`Exchange`]: the per-call element movement strategy for typed slices,
//!   with the [`Swap`], [`CoSort`] and [`FromFn`] implementations.

use std::cmp::Ordering;
use std::marker::PhantomData;

/// Index-addressed access to a collection being sorted in place.
///
/// The partitioner, the work-list scheduler and the insertion sort fallback are
/// written against this trait only. They never read or write elements
/// themselves: they ask [`compare`](ElementAccess::compare) for an ordering and
/// ask [`exchange`](ElementAccess::exchange) to move things. Every movement the
/// sort performs, pivot relocation included, is one `exchange` call.
///
/// Implement it directly to sort structures that are not a single slice, such
/// as a table stored column by column.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use std::convert::Infallible;
/// use pdqsort::{Config, ElementAccess, pdqsort_elements};
///
/// struct Columns {
///     keys: Vec<u32>,
///     names: Vec<&'static str>,
/// }
///
/// impl ElementAccess for Columns {
///     type Error = Infallible;
///
///     fn len(&self) -> usize {
///         self.keys.len()
///     }
///
///     fn compare(&mut self, a: usize, b: usize) -> Result<Ordering, Infallible> {
///         Ok(self.keys[a].cmp(&self.keys[b]))
///     }
///
///     fn exchange(&mut self, a: usize, b: usize) {
///         self.keys.swap(a, b);
///         self.names.swap(a, b);
///     }
/// }
///
/// let mut table = Columns {
///     keys: vec![3, 1, 2],
///     names: vec!["c", "a", "b"],
/// };
/// pdqsort_elements(&mut table, &Config::default()).unwrap();
/// assert_eq!(table.names, ["a", "b", "c"]);
/// ```
pub trait ElementAccess {
    /// Error a comparison may fail with. Use [`Infallible`](std::convert::Infallible)
    /// when comparisons cannot fail.
    type Error;

    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Orders the element at `a` relative to the element at `b`.
    ///
    /// Must describe a strict weak ordering. Anything else leaves the final
    /// order unspecified, but the collection still ends up a permutation of
    /// its input.
    fn compare(&mut self, a: usize, b: usize) -> Result<Ordering, Self::Error>;

    /// Exchanges the elements at `a` and `b`. The sort never passes `a == b`.
    fn exchange(&mut self, a: usize, b: usize);
}

/// Element movement strategy for sorting a slice.
///
/// This is the override point for co-sorting: an implementation swaps the two
/// slots of the primary slice and mirrors the swap in whatever parallel data
/// shares its indices. The sort calls it for every move it makes and never
/// moves elements any other way.
pub trait Exchange<T> {
    /// Exchanges `v[a]` and `v[b]`.
    fn exchange(&mut self, v: &mut [T], a: usize, b: usize);
}

/// The default exchange: a plain slice swap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Swap;

impl<T> Exchange<T> for Swap {
    #[inline(always)]
    fn exchange(&mut self, v: &mut [T], a: usize, b: usize) {
        v.swap(a, b);
    }
}

/// Exchange that mirrors every swap into one parallel slice.
///
/// After sorting, `other[i]` is the entry that was paired with the element now
/// at `v[i]`. The parallel slice must be at least as long as the sorted one;
/// [`pdqsort_cosort_by`](crate::pdqsort_cosort_by) checks this up front.
///
/// # Examples
///
/// ```
/// use pdqsort::{Config, CoSort, pdqsort_with};
///
/// let mut ages = [41, 7, 23];
/// let mut names = ["ada", "bob", "cy"];
/// pdqsort_with(&mut ages, |a: &i32, b: &i32| a.cmp(b), CoSort::new(&mut names), &Config::default());
///
/// assert_eq!(ages, [7, 23, 41]);
/// assert_eq!(names, ["bob", "cy", "ada"]);
/// ```
#[derive(Debug)]
pub struct CoSort<'a, U> {
    other: &'a mut [U],
}

impl<'a, U> CoSort<'a, U> {
    /// Wraps the parallel slice that follows every swap of the sorted one.
    pub fn new(other: &'a mut [U]) -> Self {
        Self { other }
    }

    /// Releases the borrow of the parallel slice.
    pub fn into_inner(self) -> &'a mut [U] {
        self.other
    }
}

impl<T, U> Exchange<T> for CoSort<'_, U> {
    #[inline(always)]
    fn exchange(&mut self, v: &mut [T], a: usize, b: usize) {
        // Parallel slice first: an out-of-range index panics before anything moves.
        self.other.swap(a, b);
        v.swap(a, b);
    }
}

/// Exchange backed by a closure. Created by [`exchange_fn`].
pub struct FromFn<T, F> {
    f: F,
    _marker: PhantomData<fn(&mut [T])>,
}

/// Builds an [`Exchange`] from a closure taking the slice and two indices.
///
/// The closure is responsible for the swap in `v` itself.
///
/// # Examples
///
/// ```
/// use pdqsort::{Config, exchange_fn, pdqsort_with};
///
/// let mut moves = 0;
/// let mut data = [3, 2, 1];
/// pdqsort_with(
///     &mut data,
///     |a: &i32, b: &i32| a.cmp(b),
///     exchange_fn(|v: &mut [i32], a, b| {
///         moves += 1;
///         v.swap(a, b);
///     }),
///     &Config::default(),
/// );
/// assert_eq!(data, [1, 2, 3]);
/// assert!(moves > 0);
/// ```
pub fn exchange_fn<T, F>(f: F) -> FromFn<T, F>
where
    F: FnMut(&mut [T], usize, usize),
{
    FromFn {
        f,
        _marker: PhantomData,
    }
}

impl<T, F> Exchange<T> for FromFn<T, F>
where
    F: FnMut(&mut [T], usize, usize),
{
    #[inline(always)]
    fn exchange(&mut self, v: &mut [T], a: usize, b: usize) {
        (self.f)(v, a, b)
    }
}

/// Slice plus comparator plus exchange strategy, viewed as [`ElementAccess`].
pub(crate) struct SliceElements<'a, T, F, X> {
    v: &'a mut [T],
    compare: F,
    exchange: X,
}

impl<'a, T, F, X> SliceElements<'a, T, F, X> {
    pub(crate) fn new(v: &'a mut [T], compare: F, exchange: X) -> Self {
        Self {
            v,
            compare,
            exchange,
        }
    }
}

impl<T, E, F, X> ElementAccess for SliceElements<'_, T, F, X>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
    X: Exchange<T>,
{
    type Error = E;

    fn len(&self) -> usize {
        self.v.len()
    }

    #[inline(always)]
    fn compare(&mut self, a: usize, b: usize) -> Result<Ordering, E> {
        (self.compare)(&self.v[a], &self.v[b])
    }

    #[inline(always)]
    fn exchange(&mut self, a: usize, b: usize) {
        self.exchange.exchange(self.v, a, b);
    }
}
