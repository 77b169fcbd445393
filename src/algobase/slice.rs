//! Contiguous forms of the movement algorithms.
//!
//! On slices the element facts select the implementation: [`ElementCaps`]
//! types with `Trivial = Present` move as one `memmove`, one-byte integers
//! fill with one `memset`, everything else goes element by element. Both
//! paths produce the same slice contents.
//!
//! The `_within` forms work inside one buffer and accept overlapping
//! source and destination as long as the write direction is safe:
//!
//! - forward (`copy_within`, `move_within`): `dest <= src.start`, or no
//!   overlap at all;
//! - backward (`*_backward_within`): `result >= src.end`, or no overlap.
//!
//! Bounds and the overlap rule are checked before the first write, in
//! every build. A call breaking the rule panics instead of producing
//! contents that depend on the element facts.

use core::ops::Range;

use crate::element::{ElementCaps, Fill, Transfer};

#[track_caller]
fn check_range(src: &Range<usize>, len: usize) {
    assert!(
        src.start <= src.end && src.end <= len,
        "source range {}..{} out of bounds for length {len}",
        src.start,
        src.end,
    );
}

#[track_caller]
fn check_forward(buf_len: usize, src: &Range<usize>, dest: usize) {
    check_range(src, buf_len);
    let n = src.end - src.start;
    assert!(
        dest <= buf_len && n <= buf_len - dest,
        "destination {dest}..{} out of bounds for length {buf_len}",
        dest.saturating_add(n),
    );
    assert!(
        dest <= src.start || dest >= src.end,
        "forward copy to {dest} would overwrite unread elements of {}..{}",
        src.start,
        src.end,
    );
}

#[track_caller]
fn check_backward(buf_len: usize, src: &Range<usize>, result: usize) {
    check_range(src, buf_len);
    let n = src.end - src.start;
    assert!(
        result <= buf_len && result >= n,
        "destination ending at {result} out of bounds for {n} elements in length {buf_len}",
    );
    assert!(
        result >= src.end || result <= src.start,
        "backward copy ending at {result} would overwrite unread elements of {}..{}",
        src.start,
        src.end,
    );
}

#[track_caller]
fn check_dst_room(required: usize, dst_len: usize) {
    assert!(
        dst_len >= required,
        "destination length {dst_len} is shorter than required length {required}",
    );
}

// =============================================================================
// Copy
// =============================================================================

/// Copies `src` into the front of `dst`. Returns the number of elements
/// written.
///
/// # Panics
///
/// Panics if `dst` is shorter than `src`.
///
/// ```
/// use tola_algo::algobase::copy_slice;
///
/// let mut dst = [0u32; 4];
/// assert_eq!(copy_slice(&[1, 2, 3], &mut dst), 3);
/// assert_eq!(dst, [1, 2, 3, 0]);
/// ```
#[inline]
#[track_caller]
pub fn copy_slice<T: Clone + ElementCaps>(src: &[T], dst: &mut [T]) -> usize {
    let n = src.len();
    check_dst_room(n, dst.len());
    <T::Trivial as Transfer<T>>::copy(src, &mut dst[..n]);
    n
}

/// Copies `buf[src]` to `buf[dest..]`, front to back. Returns
/// `dest + src.len()`.
///
/// The classic use is a left shift inside one buffer:
///
/// ```
/// use tola_algo::algobase::copy_within;
///
/// let mut v = [0, 1, 2, 3, 4, 5];
/// assert_eq!(copy_within(&mut v, 2..6, 0), 4);
/// assert_eq!(v, [2, 3, 4, 5, 4, 5]);
/// ```
///
/// # Panics
///
/// Panics if either range is out of bounds.
#[inline]
#[track_caller]
pub fn copy_within<T: Clone + ElementCaps>(buf: &mut [T], src: Range<usize>, dest: usize) -> usize {
    check_forward(buf.len(), &src, dest);
    let n = src.len();
    <T::Trivial as Transfer<T>>::copy_within(buf, src, dest);
    dest + n
}

/// Copies `src` into `dst[result - src.len()..result]`, last element first.
/// Returns the start of the written range.
///
/// # Panics
///
/// Panics if the destination range does not fit in `dst`.
#[inline]
#[track_caller]
pub fn copy_backward_slice<T: Clone + ElementCaps>(src: &[T], dst: &mut [T], result: usize) -> usize {
    let n = src.len();
    assert!(
        result <= dst.len() && result >= n,
        "destination ending at {result} out of bounds for {n} elements in length {}",
        dst.len(),
    );
    let start = result - n;
    <T::Trivial as Transfer<T>>::copy_backward(src, &mut dst[start..result]);
    start
}

/// Copies `buf[src]` so that it ends at `result`, last element first.
/// Returns `result - src.len()`.
///
/// The classic use is a right shift inside one buffer:
///
/// ```
/// use tola_algo::algobase::copy_backward_within;
///
/// let mut v = [0, 1, 2, 3, 4, 5];
/// assert_eq!(copy_backward_within(&mut v, 0..4, 6), 2);
/// assert_eq!(v, [0, 1, 0, 1, 2, 3]);
/// ```
///
/// # Panics
///
/// Panics if either range is out of bounds.
#[inline]
#[track_caller]
pub fn copy_backward_within<T: Clone + ElementCaps>(
    buf: &mut [T],
    src: Range<usize>,
    result: usize,
) -> usize {
    check_backward(buf.len(), &src, result);
    let n = src.len();
    <T::Trivial as Transfer<T>>::copy_backward_within(buf, src, result);
    result - n
}

// =============================================================================
// Move
// =============================================================================

/// Moves `src` into the front of `dst`. Returns the number of elements
/// moved.
///
/// Element-wise types leave `T::default()` in every source slot; trivial
/// types are copied and the source keeps its values.
///
/// # Panics
///
/// Panics if `dst` is shorter than `src`.
#[inline]
#[track_caller]
pub fn move_slice<T: Default + ElementCaps>(src: &mut [T], dst: &mut [T]) -> usize {
    let n = src.len();
    check_dst_room(n, dst.len());
    <T::Trivial as Transfer<T>>::take(src, &mut dst[..n]);
    n
}

/// Moving counterpart of [`copy_within`].
#[inline]
#[track_caller]
pub fn move_within<T: Default + ElementCaps>(buf: &mut [T], src: Range<usize>, dest: usize) -> usize {
    check_forward(buf.len(), &src, dest);
    let n = src.len();
    <T::Trivial as Transfer<T>>::take_within(buf, src, dest);
    dest + n
}

/// Moving counterpart of [`copy_backward_within`].
#[inline]
#[track_caller]
pub fn move_backward_within<T: Default + ElementCaps>(
    buf: &mut [T],
    src: Range<usize>,
    result: usize,
) -> usize {
    check_backward(buf.len(), &src, result);
    let n = src.len();
    <T::Trivial as Transfer<T>>::take_backward_within(buf, src, result);
    result - n
}

// =============================================================================
// Fill
// =============================================================================

/// Assigns `value` to every element of `dst`.
///
/// ```
/// use tola_algo::algobase::fill_slice;
///
/// let mut bytes = [0u8; 16];
/// fill_slice(&mut bytes, &0xAB);
/// assert!(bytes.iter().all(|b| *b == 0xAB));
/// ```
#[inline]
pub fn fill_slice<T: Clone + ElementCaps>(dst: &mut [T], value: &T) {
    <T::OneByte as Fill<T>>::fill(dst, value);
}

/// Assigns `value` to the first `n` elements of `dst`. Returns `n`.
///
/// # Panics
///
/// Panics if `dst` is shorter than `n`.
#[inline]
#[track_caller]
pub fn fill_n_slice<T: Clone + ElementCaps>(dst: &mut [T], n: usize, value: &T) -> usize {
    check_dst_room(n, dst.len());
    <T::OneByte as Fill<T>>::fill(&mut dst[..n], value);
    n
}
