//! Object construction and destruction on raw storage.
//!
//! These are the only primitives that create or end the life of a value in
//! place. Destruction is skipped entirely for types without drop glue.

use core::mem;
use core::ptr;

/// Writes `value` into uninitialized storage at `ptr`.
///
/// # Safety
///
/// `ptr` must be valid for writes and properly aligned. Any value already
/// there is overwritten without being dropped.
#[inline]
pub unsafe fn construct<T>(ptr: *mut T, value: T) {
    unsafe { ptr.write(value) }
}

/// Writes `T::default()` into uninitialized storage at `ptr`.
///
/// # Safety
///
/// Same as [`construct`].
#[inline]
pub unsafe fn construct_default<T: Default>(ptr: *mut T) {
    unsafe { ptr.write(T::default()) }
}

/// Ends the life of the value at `ptr`. No-op for types that do not need
/// drop, and for a null `ptr`.
///
/// # Safety
///
/// A non-null `ptr` must point to a live, properly aligned `T` that is not
/// used again.
#[inline]
pub unsafe fn destroy<T>(ptr: *mut T) {
    if mem::needs_drop::<T>() && !ptr.is_null() {
        unsafe { ptr::drop_in_place(ptr) }
    }
}

/// Ends the life of `len` consecutive values starting at `ptr`.
///
/// # Safety
///
/// A non-null `ptr` must point to `len` live, properly aligned `T`s that
/// are not used again.
#[inline]
pub unsafe fn destroy_range<T>(ptr: *mut T, len: usize) {
    if mem::needs_drop::<T>() && !ptr.is_null() && len != 0 {
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr, len)) }
    }
}
