//! Comparison algorithms and small helpers.

use core::cmp::Ordering;
use core::mem;

use crate::error::Error;
use crate::iterator::traits::{ForwardIterator, InputIterator};

#[cold]
#[inline(never)]
#[track_caller]
fn second_range_exhausted(compared: usize) -> ! {
    panic!("second range ran out after {compared} elements; it must be at least as long as the first")
}

// =============================================================================
// equal
// =============================================================================

/// Whether every element of `r1` equals the corresponding element of `r2`.
///
/// The comparison runs for the length of `r1` only: extra elements of `r2`
/// are never looked at.
///
/// # Panics
///
/// Panics if `r2` runs out before `r1` while all elements so far matched.
/// Use [`try_equal`] to get an error instead.
///
/// ```
/// use tola_algo::algobase::equal;
///
/// assert!(equal(&[1, 2, 3], &[1, 2, 3]));
/// assert!(equal(&[1, 2], &[1, 2, 99]));
/// assert!(!equal(&[1, 2, 3], &[1, 5, 3]));
/// ```
#[inline]
#[track_caller]
pub fn equal<I1, I2>(r1: I1, r2: I2) -> bool
where
    I1: IntoIterator,
    I1::IntoIter: InputIterator,
    I2: IntoIterator,
    I2::IntoIter: InputIterator,
    I1::Item: PartialEq<I2::Item>,
{
    equal_by(r1, r2, |a, b| a == b)
}

/// [`equal`] with a caller-supplied equivalence.
#[inline]
#[track_caller]
pub fn equal_by<I1, I2, F>(r1: I1, r2: I2, mut eq: F) -> bool
where
    I1: IntoIterator,
    I1::IntoIter: InputIterator,
    I2: IntoIterator,
    I2::IntoIter: InputIterator,
    F: FnMut(I1::Item, I2::Item) -> bool,
{
    let mut r2 = r2.into_iter();
    for (compared, a) in r1.into_iter().enumerate() {
        match r2.next() {
            Some(b) => {
                if !eq(a, b) {
                    return false;
                }
            }
            None => second_range_exhausted(compared),
        }
    }
    true
}

/// Checked [`equal`] for ranges of known length.
///
/// Returns [`Error::LengthMismatch`] when `r2` is shorter than `r1`,
/// without comparing anything.
pub fn try_equal<I1, I2>(r1: I1, r2: I2) -> Result<bool, Error>
where
    I1: IntoIterator,
    I1::IntoIter: InputIterator + ExactSizeIterator,
    I2: IntoIterator,
    I2::IntoIter: InputIterator + ExactSizeIterator,
    I1::Item: PartialEq<I2::Item>,
{
    try_equal_by(r1, r2, |a, b| a == b)
}

/// [`try_equal`] with a caller-supplied equivalence.
pub fn try_equal_by<I1, I2, F>(r1: I1, r2: I2, eq: F) -> Result<bool, Error>
where
    I1: IntoIterator,
    I1::IntoIter: InputIterator + ExactSizeIterator,
    I2: IntoIterator,
    I2::IntoIter: InputIterator + ExactSizeIterator,
    F: FnMut(I1::Item, I2::Item) -> bool,
{
    let (r1, r2) = (r1.into_iter(), r2.into_iter());
    let (required, available) = (r1.len(), r2.len());
    if available < required {
        return Err(Error::LengthMismatch { required, available });
    }
    Ok(equal_by(r1, r2, eq))
}

// =============================================================================
// mismatch
// =============================================================================

/// Positions of the first pair of elements that differ.
///
/// Returns `(r1', r2')` where `r1'.next()` and `r2'.next()` yield the first
/// differing pair. When no difference exists within `r1`, `r1'` is empty
/// and `r2'` has been advanced by the length of `r1`.
///
/// # Panics
///
/// Panics if `r2` runs out before `r1` while all elements so far matched.
///
/// ```
/// use tola_algo::algobase::mismatch;
///
/// let (mut a, mut b) = mismatch(&[1, 2, 3, 4], &[1, 2, 7, 4]);
/// assert_eq!((a.next(), b.next()), (Some(&3), Some(&7)));
///
/// let (a, b) = mismatch(&[1, 2], &[1, 2, 3]);
/// assert_eq!((a.len(), b.len()), (0, 1));
/// ```
///
/// Read-once iterators cannot report positions:
///
/// ```compile_fail
/// use tola_algo::algobase::mismatch;
///
/// let mut n = 0;
/// let counter = core::iter::from_fn(move || { n += 1; (n <= 3).then_some(n) });
/// let _ = mismatch(counter, [1, 2, 3]);
/// ```
#[inline]
#[track_caller]
pub fn mismatch<I1, I2>(r1: I1, r2: I2) -> (I1::IntoIter, I2::IntoIter)
where
    I1: IntoIterator,
    I1::IntoIter: ForwardIterator + Clone,
    I2: IntoIterator,
    I2::IntoIter: ForwardIterator + Clone,
    I1::Item: PartialEq<I2::Item>,
{
    mismatch_by(r1, r2, |a, b| a == b)
}

/// [`mismatch`] with a caller-supplied equivalence.
#[track_caller]
pub fn mismatch_by<I1, I2, F>(r1: I1, r2: I2, mut eq: F) -> (I1::IntoIter, I2::IntoIter)
where
    I1: IntoIterator,
    I1::IntoIter: ForwardIterator + Clone,
    I2: IntoIterator,
    I2::IntoIter: ForwardIterator + Clone,
    F: FnMut(I1::Item, I2::Item) -> bool,
{
    let (mut r1, mut r2) = (r1.into_iter(), r2.into_iter());
    let mut compared = 0;
    loop {
        let at = (r1.clone(), r2.clone());
        let Some(a) = r1.next() else {
            return at;
        };
        let Some(b) = r2.next() else {
            second_range_exhausted(compared);
        };
        if !eq(a, b) {
            return at;
        }
        compared += 1;
    }
}

// =============================================================================
// lexicographical_compare
// =============================================================================

/// Whether `r1` orders strictly before `r2`.
///
/// The first differing pair decides; a strict prefix orders first; equal
/// ranges are not less.
///
/// ```
/// use tola_algo::algobase::lexicographical_compare;
///
/// assert!(lexicographical_compare(&[1, 2, 3], &[1, 2, 3, 4]));
/// assert!(!lexicographical_compare(&[1, 2, 4], &[1, 2, 3]));
/// assert!(!lexicographical_compare(&[1, 2, 3], &[1, 2, 3]));
/// ```
#[inline]
pub fn lexicographical_compare<I1, I2>(r1: I1, r2: I2) -> bool
where
    I1: IntoIterator,
    I1::IntoIter: InputIterator,
    I2: IntoIterator<Item = I1::Item>,
    I2::IntoIter: InputIterator,
    I1::Item: PartialOrd,
{
    lexicographical_compare_by(r1, r2, |a, b| a < b)
}

/// [`lexicographical_compare`] under the strict ordering `is_less`.
pub fn lexicographical_compare_by<I1, I2, F>(r1: I1, r2: I2, mut is_less: F) -> bool
where
    I1: IntoIterator,
    I1::IntoIter: InputIterator,
    I2: IntoIterator<Item = I1::Item>,
    I2::IntoIter: InputIterator,
    F: FnMut(&I1::Item, &I1::Item) -> bool,
{
    let mut r2 = r2.into_iter();
    for a in r1 {
        let Some(b) = r2.next() else {
            return false;
        };
        if is_less(&a, &b) {
            return true;
        }
        if is_less(&b, &a) {
            return false;
        }
    }
    r2.next().is_some()
}

/// Byte-string ordering: one block compare of the common prefix, then the
/// shorter buffer orders first.
///
/// ```
/// use tola_algo::algobase::lexicographical_compare_bytes;
///
/// assert!(lexicographical_compare_bytes(b"abc", b"abd"));
/// assert!(lexicographical_compare_bytes(b"ab", b"abc"));
/// assert!(!lexicographical_compare_bytes(b"abc", b"abc"));
/// ```
#[inline]
pub fn lexicographical_compare_bytes(a: &[u8], b: &[u8]) -> bool {
    let common = a.len().min(b.len());
    match a[..common].cmp(&b[..common]) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => a.len() < b.len(),
    }
}

// =============================================================================
// min / max / iter_swap
// =============================================================================

/// The larger of `a` and `b`; `a` when they are equivalent.
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { b } else { a }
}

/// The smaller of `a` and `b`; `a` when they are equivalent.
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

/// [`max`] under the strict ordering `is_less`.
#[inline]
pub fn max_by<T, F: FnOnce(&T, &T) -> bool>(a: T, b: T, is_less: F) -> T {
    if is_less(&a, &b) { b } else { a }
}

/// [`min`] under the strict ordering `is_less`.
#[inline]
pub fn min_by<T, F: FnOnce(&T, &T) -> bool>(a: T, b: T, is_less: F) -> T {
    if is_less(&b, &a) { b } else { a }
}

/// Exchanges the values behind two positions.
#[inline]
pub fn iter_swap<T>(a: &mut T, b: &mut T) {
    mem::swap(a, b);
}
