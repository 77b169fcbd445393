//! Fill over iterator ranges.

use core::ops::DerefMut;

use crate::iterator::category::{BidirectionalTag, ForwardTag, RandomAccessTag};
use crate::iterator::traits::{CategoryOf, ForwardIterator};

#[cold]
#[inline(never)]
#[track_caller]
fn range_exhausted(required: usize, filled: usize) -> ! {
    panic!("fill_n: range ran out after {filled} of {required} elements")
}

/// `fill` for iterators of category `Self`.
pub trait FillDispatch<I, T> {
    fn fill(dst: I, value: &T);
}

impl<I, T> FillDispatch<I, T> for ForwardTag
where
    I: Iterator,
    I::Item: DerefMut<Target = T>,
    T: Clone,
{
    #[inline]
    fn fill(dst: I, value: &T) {
        for mut slot in dst {
            T::clone_from(&mut *slot, value);
        }
    }
}

impl<I, T> FillDispatch<I, T> for BidirectionalTag
where
    I: Iterator,
    I::Item: DerefMut<Target = T>,
    T: Clone,
{
    #[inline]
    fn fill(dst: I, value: &T) {
        <ForwardTag as FillDispatch<I, T>>::fill(dst, value)
    }
}

/// The length is known, so the fill is a counted loop.
impl<I, T> FillDispatch<I, T> for RandomAccessTag
where
    I: ExactSizeIterator,
    I::Item: DerefMut<Target = T>,
    T: Clone,
{
    #[inline]
    fn fill(dst: I, value: &T) {
        let n = dst.len();
        fill_n_with(dst, n, value);
    }
}

/// Assigns `value` to every element of `dst`.
///
/// ```
/// use tola_algo::algobase::fill;
///
/// let mut v = vec![0; 4];
/// fill(&mut v, &7);
/// assert_eq!(v, [7, 7, 7, 7]);
/// ```
#[inline]
pub fn fill<I, T>(dst: I, value: &T)
where
    I: IntoIterator,
    I::IntoIter: ForwardIterator,
    CategoryOf<I::IntoIter>: FillDispatch<I::IntoIter, T>,
{
    <CategoryOf<I::IntoIter> as FillDispatch<I::IntoIter, T>>::fill(dst.into_iter(), value)
}

#[inline]
#[track_caller]
fn fill_n_with<I, T>(mut dst: I, n: usize, value: &T) -> I
where
    I: Iterator,
    I::Item: DerefMut<Target = T>,
    T: Clone,
{
    for filled in 0..n {
        match dst.next() {
            Some(mut slot) => T::clone_from(&mut *slot, value),
            None => range_exhausted(n, filled),
        }
    }
    dst
}

/// Assigns `value` to the first `n` elements of `dst`.
///
/// Returns the iterator positioned after the last assigned element.
///
/// # Panics
///
/// Panics if `dst` has fewer than `n` elements.
///
/// ```
/// use tola_algo::algobase::fill_n;
///
/// let mut v = [0u8; 4];
/// let rest = fill_n(&mut v, 3, &9);
/// assert_eq!(rest.len(), 1);
/// assert_eq!(v, [9, 9, 9, 0]);
/// ```
#[inline]
#[track_caller]
pub fn fill_n<I, T>(dst: I, n: usize, value: &T) -> I::IntoIter
where
    I: IntoIterator,
    I::IntoIter: ForwardIterator,
    I::Item: DerefMut<Target = T>,
    T: Clone,
{
    fill_n_with(dst.into_iter(), n, value)
}
