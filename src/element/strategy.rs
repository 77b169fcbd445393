//! Transfer strategies selected by element facts.
//!
//! [`Transfer`] and [`Fill`] are implemented on the two type-level booleans.
//! `Absent` is the element-wise path that works for every type; `Present`
//! is the block path, available only where the compiler can prove it
//! indistinguishable from the element-wise one (`T: Copy` for transfers,
//! a one-byte integer for fills).
//!
//! Callers validate lengths and bounds before reaching a strategy; the
//! strategies themselves trust their arguments.

use core::mem;
use core::ops::Range;
use core::ptr;

use crate::primitives::{Absent, Present};

/// Copy and move between or within slices.
///
/// For the `_within` forms, `src` and the destination may overlap as long
/// as the write order never reads a slot it already wrote: forward forms
/// need `dest <= src.start` (or no overlap), backward forms need
/// `end >= src.end` (or no overlap).
pub trait Transfer<T> {
    /// `dst[i] = src[i]` for every `i`, front to back. Equal lengths.
    fn copy(src: &[T], dst: &mut [T])
    where
        T: Clone;

    /// Like [`copy`](Transfer::copy), back to front.
    fn copy_backward(src: &[T], dst: &mut [T])
    where
        T: Clone;

    /// Copies `buf[src]` to `buf[dest..dest + src.len()]`, front to back.
    fn copy_within(buf: &mut [T], src: Range<usize>, dest: usize)
    where
        T: Clone;

    /// Copies `buf[src]` to `buf[end - src.len()..end]`, back to front.
    fn copy_backward_within(buf: &mut [T], src: Range<usize>, end: usize)
    where
        T: Clone;

    /// Moves `src[i]` into `dst[i]`, leaving `T::default()` behind on the
    /// element-wise path.
    fn take(src: &mut [T], dst: &mut [T])
    where
        T: Default;

    /// Moving counterpart of [`copy_within`](Transfer::copy_within).
    fn take_within(buf: &mut [T], src: Range<usize>, dest: usize)
    where
        T: Default;

    /// Moving counterpart of
    /// [`copy_backward_within`](Transfer::copy_backward_within).
    fn take_backward_within(buf: &mut [T], src: Range<usize>, end: usize)
    where
        T: Default;
}

/// Assigning one value to every slot of a slice.
pub trait Fill<T> {
    fn fill(dst: &mut [T], value: &T)
    where
        T: Clone;
}

// =============================================================================
// Element-wise
// =============================================================================

impl<T> Transfer<T> for Absent {
    fn copy(src: &[T], dst: &mut [T])
    where
        T: Clone,
    {
        for (slot, value) in dst.iter_mut().zip(src) {
            slot.clone_from(value);
        }
    }

    fn copy_backward(src: &[T], dst: &mut [T])
    where
        T: Clone,
    {
        for (slot, value) in dst.iter_mut().zip(src).rev() {
            slot.clone_from(value);
        }
    }

    fn copy_within(buf: &mut [T], src: Range<usize>, dest: usize)
    where
        T: Clone,
    {
        for offset in 0..src.len() {
            let value = buf[src.start + offset].clone();
            buf[dest + offset] = value;
        }
    }

    fn copy_backward_within(buf: &mut [T], src: Range<usize>, end: usize)
    where
        T: Clone,
    {
        let start = end - src.len();
        for offset in (0..src.len()).rev() {
            let value = buf[src.start + offset].clone();
            buf[start + offset] = value;
        }
    }

    fn take(src: &mut [T], dst: &mut [T])
    where
        T: Default,
    {
        for (slot, value) in dst.iter_mut().zip(src) {
            *slot = mem::take(value);
        }
    }

    fn take_within(buf: &mut [T], src: Range<usize>, dest: usize)
    where
        T: Default,
    {
        for offset in 0..src.len() {
            let value = mem::take(&mut buf[src.start + offset]);
            buf[dest + offset] = value;
        }
    }

    fn take_backward_within(buf: &mut [T], src: Range<usize>, end: usize)
    where
        T: Default,
    {
        let start = end - src.len();
        for offset in (0..src.len()).rev() {
            let value = mem::take(&mut buf[src.start + offset]);
            buf[start + offset] = value;
        }
    }
}

impl<T> Fill<T> for Absent {
    fn fill(dst: &mut [T], value: &T)
    where
        T: Clone,
    {
        for slot in dst {
            slot.clone_from(value);
        }
    }
}

// =============================================================================
// Block
// =============================================================================

// A `Copy` type has no drop glue and no observable clone, so a memmove is
// the same as the element-wise loop in either direction. Moving a `Copy`
// value leaves the source untouched.
impl<T: Copy> Transfer<T> for Present {
    #[inline]
    fn copy(src: &[T], dst: &mut [T]) {
        dst.copy_from_slice(src);
    }

    #[inline]
    fn copy_backward(src: &[T], dst: &mut [T]) {
        dst.copy_from_slice(src);
    }

    #[inline]
    fn copy_within(buf: &mut [T], src: Range<usize>, dest: usize) {
        buf.copy_within(src, dest);
    }

    #[inline]
    fn copy_backward_within(buf: &mut [T], src: Range<usize>, end: usize) {
        let start = end - src.len();
        buf.copy_within(src, start);
    }

    #[inline]
    fn take(src: &mut [T], dst: &mut [T]) {
        dst.copy_from_slice(src);
    }

    #[inline]
    fn take_within(buf: &mut [T], src: Range<usize>, dest: usize) {
        buf.copy_within(src, dest);
    }

    #[inline]
    fn take_backward_within(buf: &mut [T], src: Range<usize>, end: usize) {
        let start = end - src.len();
        buf.copy_within(src, start);
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for i8 {}
}

/// One-byte integers: every byte pattern is a valid value, so a fill is a
/// memset of the value's bits.
///
/// `bool` is not one: only two of its byte patterns are valid.
pub trait OneByteInt: Copy + sealed::Sealed {
    fn to_byte(self) -> u8;
}

impl OneByteInt for u8 {
    #[inline(always)]
    fn to_byte(self) -> u8 {
        self
    }
}

impl OneByteInt for i8 {
    #[inline(always)]
    fn to_byte(self) -> u8 {
        self as u8
    }
}

impl<T: OneByteInt> Fill<T> for Present {
    #[inline]
    fn fill(dst: &mut [T], value: &T) {
        let byte = value.to_byte();
        // SAFETY: `T` is `u8` or `i8`: one byte wide, no padding, no drop,
        // and valid for every byte. `dst` is a live unique borrow of exactly
        // `dst.len()` elements.
        unsafe { ptr::write_bytes(dst.as_mut_ptr(), byte, dst.len()) }
    }
}
