//! Copy and move over iterator ranges.
//!
//! The source is any iterator meeting the algorithm's minimum category, the
//! destination any [`Sink`]. Passing `&v` copies clones, passing
//! `v.into_iter()` moves the values themselves.

use core::mem;
use core::ops::DerefMut;

use crate::iterator::category::{BidirectionalTag, ForwardTag, InputTag, RandomAccessTag};
use crate::iterator::sink::{BidirectionalSink, Sink};
use crate::iterator::traits::{BidirectionalIterator, CategoryOf, InputIterator};

#[cold]
#[inline(never)]
#[track_caller]
fn source_exhausted(required: usize, copied: usize) -> ! {
    panic!("copy_n: source ran out after {copied} of {required} elements")
}

/// Writes every element of `src` to `result`, in order.
///
/// Returns the sink positioned just past the last write.
///
/// ```
/// use tola_algo::algobase::copy;
///
/// let src = [1, 2, 3];
/// let mut dst = [0; 5];
/// let rest = copy(&src, dst.iter_mut());
/// assert_eq!(rest.len(), 2);
/// assert_eq!(dst, [1, 2, 3, 0, 0]);
/// ```
#[inline]
pub fn copy<I, O>(src: I, mut result: O) -> O
where
    I: IntoIterator,
    I::IntoIter: InputIterator,
    O: Sink<I::Item>,
{
    for item in src {
        result.put(item);
    }
    result
}

/// Writes the elements of `src` from the back, last element first.
///
/// `result` fills from its back end; the returned sink's remaining front
/// part is everything before the first written slot.
///
/// ```
/// use tola_algo::algobase::copy_backward;
///
/// let src = [1, 2, 3];
/// let mut dst = [0; 5];
/// let rest = copy_backward(&src, dst.iter_mut());
/// assert_eq!(rest.len(), 2);
/// assert_eq!(dst, [0, 0, 1, 2, 3]);
/// ```
#[inline]
pub fn copy_backward<I, O>(src: I, mut result: O) -> O
where
    I: IntoIterator,
    I::IntoIter: BidirectionalIterator,
    O: BidirectionalSink<I::Item>,
{
    for item in src.into_iter().rev() {
        result.put_back(item);
    }
    result
}

/// Moves every element of `src` into `result`, in order.
///
/// Each source slot is left holding `T::default()`.
#[inline]
pub fn move_range<I, O, T>(src: I, mut result: O) -> O
where
    I: IntoIterator,
    I::IntoIter: InputIterator,
    I::Item: DerefMut<Target = T>,
    T: Default,
    O: Sink<T>,
{
    for mut slot in src {
        result.put(mem::take(&mut *slot));
    }
    result
}

/// Moving counterpart of [`copy_backward`].
#[inline]
pub fn move_backward<I, O, T>(src: I, mut result: O) -> O
where
    I: IntoIterator,
    I::IntoIter: BidirectionalIterator,
    I::Item: DerefMut<Target = T>,
    T: Default,
    O: BidirectionalSink<T>,
{
    for mut slot in src.into_iter().rev() {
        result.put_back(mem::take(&mut *slot));
    }
    result
}

/// Writes the elements of `src` satisfying `pred`, preserving their order.
///
/// `pred` is called exactly once per source element.
#[inline]
pub fn copy_if<I, O, P>(src: I, mut result: O, mut pred: P) -> O
where
    I: IntoIterator,
    I::IntoIter: InputIterator,
    O: Sink<I::Item>,
    P: FnMut(&I::Item) -> bool,
{
    for item in src {
        if pred(&item) {
            result.put(item);
        }
    }
    result
}

// =============================================================================
// copy_n
// =============================================================================

/// `copy_n` for iterators of category `Self`.
pub trait CopyNDispatch<I: Iterator> {
    fn copy_n<O: Sink<I::Item>>(src: I, n: usize, result: O) -> (I, O);
}

#[inline]
#[track_caller]
fn copy_n_stepping<I, O>(mut src: I, n: usize, mut result: O) -> (I, O)
where
    I: Iterator,
    O: Sink<I::Item>,
{
    for copied in 0..n {
        match src.next() {
            Some(item) => result.put(item),
            None => source_exhausted(n, copied),
        }
    }
    (src, result)
}

macro_rules! impl_copy_n_stepping {
    ($($Tag:ty),* $(,)?) => {
        $(
            impl<I: Iterator> CopyNDispatch<I> for $Tag {
                #[inline]
                #[track_caller]
                fn copy_n<O: Sink<I::Item>>(src: I, n: usize, result: O) -> (I, O) {
                    copy_n_stepping(src, n, result)
                }
            }
        )*
    };
}

impl_copy_n_stepping!(InputTag, ForwardTag, BidirectionalTag);

/// The length is known up front, so a short source is rejected before any
/// element is written.
impl<I: ExactSizeIterator> CopyNDispatch<I> for RandomAccessTag {
    #[inline]
    #[track_caller]
    fn copy_n<O: Sink<I::Item>>(src: I, n: usize, result: O) -> (I, O) {
        let available = src.len();
        if available < n {
            source_exhausted(n, 0);
        }
        copy_n_stepping(src, n, result)
    }
}

/// Copies exactly `n` elements from `src` to `result`.
///
/// Returns the advanced source and sink.
///
/// # Panics
///
/// Panics if `src` has fewer than `n` elements. Random-access sources are
/// checked before anything is written.
///
/// ```
/// use tola_algo::algobase::copy_n;
///
/// let src = [1, 2, 3, 4];
/// let mut dst = [0; 2];
/// let (mut rest, _) = copy_n(&src, 2, dst.iter_mut());
/// assert_eq!(dst, [1, 2]);
/// assert_eq!(rest.next(), Some(&3));
/// ```
#[inline]
#[track_caller]
pub fn copy_n<I, O>(src: I, n: usize, result: O) -> (I::IntoIter, O)
where
    I: IntoIterator,
    I::IntoIter: InputIterator,
    CategoryOf<I::IntoIter>: CopyNDispatch<I::IntoIter>,
    O: Sink<I::Item>,
{
    <CategoryOf<I::IntoIter> as CopyNDispatch<I::IntoIter>>::copy_n(src.into_iter(), n, result)
}
