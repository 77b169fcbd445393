//! Category-dispatched iterator operations.
//!
//! Each operation is a helper trait implemented once per tag. The tag that
//! an iterator reports selects the implementation, so a random-access
//! iterator never falls back to stepping.

use crate::iterator::category::{BidirectionalTag, ForwardTag, InputTag, RandomAccessTag};
use crate::iterator::traits::{InputIterator, IteratorTraits};

/// Remaining-length computation for iterators of category `Self`.
pub trait DistanceDispatch<I> {
    fn distance(iter: I) -> usize;
}

/// Forward skip for iterators of category `Self`.
pub trait AdvanceDispatch<I> {
    /// Skips up to `n` elements, returning how many could not be skipped.
    fn advance(iter: &mut I, n: usize) -> usize;
}

macro_rules! impl_stepping_ops {
    ($($Tag:ty),* $(,)?) => {
        $(
            impl<I: Iterator> DistanceDispatch<I> for $Tag {
                #[inline]
                fn distance(iter: I) -> usize {
                    iter.count()
                }
            }

            impl<I: Iterator> AdvanceDispatch<I> for $Tag {
                #[inline]
                fn advance(iter: &mut I, n: usize) -> usize {
                    for taken in 0..n {
                        if iter.next().is_none() {
                            return n - taken;
                        }
                    }
                    0
                }
            }
        )*
    };
}

impl_stepping_ops!(InputTag, ForwardTag, BidirectionalTag);

impl<I: ExactSizeIterator> DistanceDispatch<I> for RandomAccessTag {
    #[inline]
    fn distance(iter: I) -> usize {
        iter.len()
    }
}

impl<I: ExactSizeIterator> AdvanceDispatch<I> for RandomAccessTag {
    #[inline]
    fn advance(iter: &mut I, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let len = iter.len();
        iter.nth(n - 1);
        n.saturating_sub(len)
    }
}

/// Number of elements left in `iter`.
///
/// O(1) for random-access iterators, a full traversal otherwise.
///
/// ```
/// use tola_algo::iterator::distance;
///
/// let v = [1, 2, 3, 4];
/// assert_eq!(distance(v.iter()), 4);
/// assert_eq!(distance(v.iter().filter(|x| **x > 2)), 2);
/// ```
#[inline]
pub fn distance<I>(iter: I) -> usize
where
    I: InputIterator,
    I::Category: DistanceDispatch<I>,
{
    <I::Category as DistanceDispatch<I>>::distance(iter)
}

/// Skips `n` elements of `iter`.
///
/// Returns the number of steps that could not be taken because the
/// iterator ran out (zero when all `n` were skipped).
///
/// ```
/// use tola_algo::iterator::advance;
///
/// let v = [1, 2, 3, 4];
/// let mut it = v.iter();
/// assert_eq!(advance(&mut it, 3), 0);
/// assert_eq!(it.next(), Some(&4));
/// assert_eq!(advance(&mut it, 2), 2);
/// ```
#[inline]
pub fn advance<I>(iter: &mut I, n: usize) -> usize
where
    I: Iterator + IteratorTraits,
    I::Category: AdvanceDispatch<I>,
{
    <I::Category as AdvanceDispatch<I>>::advance(iter, n)
}
