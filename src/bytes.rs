//! Type-erased sorting over a flat byte buffer.
//!
//! [`pdqsort_bytes`] sorts `length` contiguous records of `size` bytes each,
//! for callers that only know the element size at run time (bindings, file
//! formats, FFI buffers). It is a thin adapter over the same scheduler the
//! typed entry points use.

use crate::algo::quicksort;
use crate::config::Config;
use crate::core::ElementAccess;
use crate::error::SortError;
use log::debug;
use std::cmp::Ordering;
use std::convert::Infallible;

/// Element movement strategy for byte buffers.
///
/// `a` and `b` are element indices; the records live at
/// `array[a * size..(a + 1) * size]` and `array[b * size..(b + 1) * size]`.
pub trait ByteExchange {
    fn exchange(&mut self, array: &mut [u8], a: usize, b: usize, size: usize);
}

/// The default byte exchange: swaps the two records byte for byte.
///
/// The records never partially overlap. `a == b` is a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ByteSwap;

impl ByteExchange for ByteSwap {
    #[inline]
    fn exchange(&mut self, array: &mut [u8], a: usize, b: usize, size: usize) {
        if a == b {
            return;
        }
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = array.split_at_mut(high * size);
        head[low * size..(low + 1) * size].swap_with_slice(&mut tail[..size]);
    }
}

/// Byte exchange backed by a closure. Created by [`byte_exchange_fn`].
pub struct FromByteFn<F> {
    f: F,
}

/// Builds a [`ByteExchange`] from a closure taking the buffer, two element
/// indices and the element size.
///
/// The closure must perform the swap in `array` itself; [`ByteSwap`] can do
/// that part.
///
/// # Examples
///
/// ```
/// use pdqsort::{ByteExchange, ByteSwap, Config, byte_exchange_fn, pdqsort_bytes};
///
/// let mut keys: Vec<u8> = [30u16, 10, 20].iter().flat_map(|k| k.to_le_bytes()).collect();
/// let mut tags = ['c', 'a', 'b'];
///
/// pdqsort_bytes(
///     &mut keys,
///     3,
///     2,
///     |a, b| u16::from_le_bytes([a[0], a[1]]).cmp(&u16::from_le_bytes([b[0], b[1]])),
///     byte_exchange_fn(|array: &mut [u8], a, b, size| {
///         ByteSwap.exchange(array, a, b, size);
///         tags.swap(a, b);
///     }),
///     &Config::default(),
/// )
/// .unwrap();
///
/// assert_eq!(tags, ['a', 'b', 'c']);
/// ```
pub fn byte_exchange_fn<F>(f: F) -> FromByteFn<F>
where
    F: FnMut(&mut [u8], usize, usize, usize),
{
    FromByteFn { f }
}

impl<F> ByteExchange for FromByteFn<F>
where
    F: FnMut(&mut [u8], usize, usize, usize),
{
    #[inline(always)]
    fn exchange(&mut self, array: &mut [u8], a: usize, b: usize, size: usize) {
        (self.f)(array, a, b, size)
    }
}

/// Sorts `length` records of `size` bytes at the start of `array` in place.
///
/// `compare` receives two records as `size`-byte slices. Every movement goes
/// through `exchange`. Bytes past `length * size` are left alone.
///
/// # Errors
///
/// The geometry is checked before anything is compared or moved:
/// - [`SortError::ZeroElementSize`] if `size` is zero;
/// - [`SortError::GeometryOverflow`] if `length * size` overflows;
/// - [`SortError::BufferTooShort`] if `array` is shorter than `length * size`.
///
/// # Examples
///
/// ```
/// use pdqsort::{ByteSwap, Config, pdqsort_bytes};
///
/// let mut buf: Vec<u8> = [3u32, 1, 2].iter().flat_map(|x| x.to_ne_bytes()).collect();
/// pdqsort_bytes(
///     &mut buf,
///     3,
///     4,
///     |a, b| u32::from_ne_bytes(a.try_into().unwrap()).cmp(&u32::from_ne_bytes(b.try_into().unwrap())),
///     ByteSwap,
///     &Config::default(),
/// )
/// .unwrap();
///
/// let sorted: Vec<u32> = buf.chunks(4).map(|c| u32::from_ne_bytes(c.try_into().unwrap())).collect();
/// assert_eq!(sorted, [1, 2, 3]);
/// ```
pub fn pdqsort_bytes<F, X>(
    array: &mut [u8],
    length: usize,
    size: usize,
    compare: F,
    exchange: X,
    config: &Config,
) -> Result<(), SortError>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
    X: ByteExchange,
{
    let required = validate(array.len(), length, size).inspect_err(|err| {
        debug!("rejected byte sort: {}", err);
    })?;

    let mut elements = ByteElements {
        array: &mut array[..required],
        size,
        compare,
        exchange,
    };
    match quicksort(&mut elements, config) {
        Ok(_) => Ok(()),
        Err(never) => match never {},
    }
}

/// Returns the number of bytes the records occupy.
fn validate(available: usize, length: usize, size: usize) -> Result<usize, SortError> {
    if size == 0 {
        return Err(SortError::ZeroElementSize);
    }
    let required = length
        .checked_mul(size)
        .ok_or(SortError::GeometryOverflow { length, size })?;
    if required > available {
        return Err(SortError::BufferTooShort {
            required,
            available,
        });
    }
    Ok(required)
}

struct ByteElements<'a, F, X> {
    array: &'a mut [u8],
    size: usize,
    compare: F,
    exchange: X,
}

impl<F, X> ElementAccess for ByteElements<'_, F, X>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
    X: ByteExchange,
{
    type Error = Infallible;

    fn len(&self) -> usize {
        self.array.len() / self.size
    }

    #[inline(always)]
    fn compare(&mut self, a: usize, b: usize) -> Result<Ordering, Infallible> {
        let size = self.size;
        let record_a = &self.array[a * size..(a + 1) * size];
        let record_b = &self.array[b * size..(b + 1) * size];
        Ok((self.compare)(record_a, record_b))
    }

    #[inline(always)]
    fn exchange(&mut self, a: usize, b: usize) {
        self.exchange.exchange(self.array, a, b, self.size);
    }
}
