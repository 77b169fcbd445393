//! Heap operations over slices.

use crate::error::Error;
use crate::functional::less;
use crate::heap::hole::Hole;
use crate::heap::sift::{adjust_heap, sift_up};

#[inline]
fn push_heap_inner<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }
    // SAFETY: `len - 1` is in bounds and `0 <= len - 1`.
    unsafe {
        let mut hole = Hole::new(v, len - 1);
        sift_up(&mut hole, 0, is_less);
    }
}

#[inline]
fn pop_heap_inner<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }
    v.swap(0, len - 1);
    // SAFETY: the shortened heap has at least one element.
    unsafe { adjust_heap(&mut v[..len - 1], 0, is_less) };
}

/// Adds the last element of `v` to the heap `v[..len - 1]`.
///
/// ```
/// use tola_algo::heap::{is_heap, push_heap};
///
/// let mut v = vec![9, 5, 8, 1];
/// v.push(7);
/// push_heap(&mut v);
/// assert!(is_heap(&v));
/// assert_eq!(v[1], 7);
/// ```
#[inline]
pub fn push_heap<T: PartialOrd>(v: &mut [T]) {
    push_heap_inner(v, &mut less::<T>)
}

/// [`push_heap`] under the strict ordering `is_less`.
#[inline]
pub fn push_heap_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    push_heap_inner(v, &mut is_less)
}

/// Moves the maximum of the heap `v` to the end and restores the heap on
/// `v[..len - 1]`.
///
/// ```
/// use tola_algo::heap::{make_heap, pop_heap};
///
/// let mut v = [3, 1, 4, 1, 5];
/// make_heap(&mut v);
/// pop_heap(&mut v);
/// assert_eq!(v[4], 5);
/// ```
#[inline]
pub fn pop_heap<T: PartialOrd>(v: &mut [T]) {
    pop_heap_inner(v, &mut less::<T>)
}

/// [`pop_heap`] under the strict ordering `is_less`.
#[inline]
pub fn pop_heap_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    pop_heap_inner(v, &mut is_less)
}

/// Rearranges `v` into a max-heap in O(n).
#[inline]
pub fn make_heap<T: PartialOrd>(v: &mut [T]) {
    make_heap_by(v, less::<T>)
}

/// [`make_heap`] under the strict ordering `is_less`.
pub fn make_heap_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }
    // Bottom-up from the last internal node.
    for start in (0..=(len - 2) / 2).rev() {
        // SAFETY: `start <= (len - 2) / 2 < len`.
        unsafe { adjust_heap(v, start, &mut is_less) };
    }
}

/// Sorts the heap `v` into ascending order.
///
/// ```
/// use tola_algo::heap::{make_heap, sort_heap};
///
/// let mut v = [3, 1, 4, 1, 5, 9, 2, 6];
/// make_heap(&mut v);
/// sort_heap(&mut v);
/// assert_eq!(v, [1, 1, 2, 3, 4, 5, 6, 9]);
/// ```
#[inline]
pub fn sort_heap<T: PartialOrd>(v: &mut [T]) {
    sort_heap_by(v, less::<T>)
}

/// [`sort_heap`] under the strict ordering `is_less`.
pub fn sort_heap_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for end in (2..=v.len()).rev() {
        pop_heap_inner(&mut v[..end], &mut is_less);
    }
}

// =============================================================================
// Queries
// =============================================================================

/// Length of the longest prefix of `v` that is a heap.
///
/// ```
/// use tola_algo::heap::is_heap_until;
///
/// assert_eq!(is_heap_until(&[9, 5, 8, 6]), 3);
/// assert_eq!(is_heap_until(&[9, 5, 8]), 3);
/// ```
#[inline]
pub fn is_heap_until<T: PartialOrd>(v: &[T]) -> usize {
    is_heap_until_by(v, less::<T>)
}

/// [`is_heap_until`] under the strict ordering `is_less`.
pub fn is_heap_until_by<T, F>(v: &[T], mut is_less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    (1..v.len())
        .find(|&child| is_less(&v[(child - 1) / 2], &v[child]))
        .unwrap_or(v.len())
}

/// Whether `v` is a max-heap.
#[inline]
pub fn is_heap<T: PartialOrd>(v: &[T]) -> bool {
    is_heap_until(v) == v.len()
}

/// [`is_heap`] under the strict ordering `is_less`.
#[inline]
pub fn is_heap_by<T, F>(v: &[T], is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    is_heap_until_by(v, is_less) == v.len()
}

/// Checked [`is_heap`]: reports the first parent/child pair out of order.
///
/// ```
/// use tola_algo::{Error, heap::check_heap};
///
/// assert_eq!(check_heap(&[9, 5, 8]), Ok(()));
/// assert_eq!(check_heap(&[9, 5, 8, 6]), Err(Error::NotAHeap { parent: 1, child: 3 }));
/// ```
#[inline]
pub fn check_heap<T: PartialOrd>(v: &[T]) -> Result<(), Error> {
    check_heap_by(v, less::<T>)
}

/// [`check_heap`] under the strict ordering `is_less`.
pub fn check_heap_by<T, F>(v: &[T], is_less: F) -> Result<(), Error>
where
    F: FnMut(&T, &T) -> bool,
{
    match is_heap_until_by(v, is_less) {
        child if child < v.len() => Err(Error::NotAHeap { parent: (child - 1) / 2, child }),
        _ => Ok(()),
    }
}
