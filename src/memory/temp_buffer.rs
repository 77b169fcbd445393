//! Best-effort scratch storage.
//!
//! A [`TempBuffer`] asks for some number of elements and settles for fewer:
//! when the allocator refuses, the request is halved and retried until it
//! succeeds or reaches zero. Callers must treat a shorter buffer as a
//! valid, smaller one. Storage is always released when the buffer goes
//! away, including when element construction fails or panics.

use core::alloc::Layout;
use core::convert::Infallible;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ops::{Deref, DerefMut};
use core::ptr::NonNull;
use core::slice;

use crate::memory::construct::{construct, destroy_range};
use crate::memory::raw_alloc::{Global, RawAlloc};

/// Upper bound on the elements one request may ask for.
#[inline]
const fn max_elements<T>() -> usize {
    let size = if mem::size_of::<T>() == 0 { 1 } else { mem::size_of::<T>() };
    i32::MAX as usize / size
}

/// Allocates room for up to `requested` elements, halving on failure.
fn acquire<T, A: RawAlloc>(alloc: &A, requested: usize) -> (NonNull<T>, usize) {
    let mut len = requested.min(max_elements::<T>());
    if mem::size_of::<T>() == 0 {
        return (NonNull::dangling(), len);
    }
    while len > 0 {
        if let Ok(layout) = Layout::array::<T>(len) {
            if let Some(ptr) = alloc.allocate(layout) {
                return (ptr.cast(), len);
            }
        }
        len /= 2;
    }
    (NonNull::dangling(), 0)
}

/// Frees storage obtained from [`acquire`].
///
/// # Safety
///
/// `ptr` and `len` must be a pair returned by `acquire` on `alloc`, with no
/// live elements left in the block.
unsafe fn release<T, A: RawAlloc>(alloc: &A, ptr: NonNull<T>, len: usize) {
    if mem::size_of::<T>() == 0 || len == 0 {
        return;
    }
    if let Ok(layout) = Layout::array::<T>(len) {
        unsafe { alloc.deallocate(ptr.cast(), layout) }
    }
}

/// Owns a partially initialized block while it is being filled.
struct InitGuard<'a, T, A: RawAlloc> {
    ptr: NonNull<T>,
    initialized: usize,
    capacity: usize,
    alloc: &'a A,
}

impl<T, A: RawAlloc> Drop for InitGuard<'_, T, A> {
    fn drop(&mut self) {
        // SAFETY: exactly `initialized` leading slots are live, and the block
        // came from `acquire` with `capacity` elements.
        unsafe {
            destroy_range(self.ptr.as_ptr(), self.initialized);
            release(self.alloc, self.ptr, self.capacity);
        }
    }
}

// =============================================================================
// TempBuffer
// =============================================================================

/// Scratch storage of at most the requested number of initialized
/// elements.
///
/// ```
/// use tola_algo::memory::TempBuffer;
///
/// let mut buf = TempBuffer::new(8, &0u32);
/// assert_eq!(buf.requested_len(), 8);
/// assert!(buf.len() <= 8);
/// buf.iter_mut().enumerate().for_each(|(i, x)| *x = i as u32);
/// ```
pub struct TempBuffer<T, A: RawAlloc = Global> {
    ptr: NonNull<T>,
    len: usize,
    requested: usize,
    alloc: A,
    _owns: PhantomData<T>,
}

// SAFETY: the buffer uniquely owns its elements.
unsafe impl<T: Send, A: RawAlloc + Send> Send for TempBuffer<T, A> {}
// SAFETY: shared access only hands out `&[T]`.
unsafe impl<T: Sync, A: RawAlloc + Sync> Sync for TempBuffer<T, A> {}

impl<T: Clone> TempBuffer<T, Global> {
    /// Up to `requested` clones of `seed`, from the global allocator.
    pub fn new(requested: usize, seed: &T) -> Self {
        Self::new_in(requested, seed, Global)
    }

    /// As many clones of `src[0]` as storage allows, up to `src.len()`.
    ///
    /// An empty `src` yields an empty buffer.
    pub fn for_slice(src: &[T]) -> Self {
        match src.first() {
            Some(seed) => Self::new(src.len(), seed),
            None => Self::empty_in(0, Global),
        }
    }
}

impl<T> TempBuffer<T, Global> {
    /// Up to `requested` elements produced by `f(index)`.
    ///
    /// If `f` fails, every element built so far is dropped, the storage is
    /// released, and the result is an empty buffer that still reports
    /// `requested`.
    pub fn try_with<E, F>(requested: usize, f: F) -> Self
    where
        F: FnMut(usize) -> Result<T, E>,
    {
        Self::try_with_in(requested, f, Global)
    }
}

impl<T, A: RawAlloc> TempBuffer<T, A> {
    fn empty_in(requested: usize, alloc: A) -> Self {
        TempBuffer { ptr: NonNull::dangling(), len: 0, requested, alloc, _owns: PhantomData }
    }

    /// [`new`](TempBuffer::new) with an explicit allocator.
    pub fn new_in(requested: usize, seed: &T, alloc: A) -> Self
    where
        T: Clone,
    {
        Self::try_with_in(requested, |_| Ok::<T, Infallible>(seed.clone()), alloc)
    }

    /// [`try_with`](TempBuffer::try_with) with an explicit allocator.
    pub fn try_with_in<E, F>(requested: usize, mut f: F, alloc: A) -> Self
    where
        F: FnMut(usize) -> Result<T, E>,
    {
        let (ptr, granted) = acquire::<T, A>(&alloc, requested);
        let mut guard = InitGuard { ptr, initialized: 0, capacity: granted, alloc: &alloc };
        while guard.initialized < granted {
            match f(guard.initialized) {
                // SAFETY: `initialized < granted`, so the slot is in the block
                // and still uninitialized.
                Ok(value) => unsafe {
                    construct(ptr.as_ptr().add(guard.initialized), value);
                    guard.initialized += 1;
                },
                Err(_) => {
                    drop(guard);
                    return Self::empty_in(requested, alloc);
                }
            }
        }
        mem::forget(guard);
        TempBuffer { ptr, len: granted, requested, alloc, _owns: PhantomData }
    }

    /// Number of elements originally asked for.
    #[inline]
    pub fn requested_len(&self) -> usize {
        self.requested
    }

    /// Number of elements actually granted and initialized.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }
}

impl<T, A: RawAlloc> Deref for TempBuffer<T, A> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        // SAFETY: `len` leading elements are initialized; a dangling pointer
        // is valid for an empty slice.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T, A: RawAlloc> DerefMut for TempBuffer<T, A> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        // SAFETY: as in `deref`, plus `&mut self` is unique.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: fmt::Debug, A: RawAlloc> fmt::Debug for TempBuffer<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TempBuffer")
            .field("requested", &self.requested)
            .field("elements", &&**self)
            .finish()
    }
}

impl<T, A: RawAlloc> Drop for TempBuffer<T, A> {
    fn drop(&mut self) {
        // SAFETY: `len` leading elements are live; the block holds exactly
        // `len` elements (an empty buffer never owns a block).
        unsafe {
            destroy_range(self.ptr.as_ptr(), self.len);
            release(&self.alloc, self.ptr, self.len);
        }
    }
}

// =============================================================================
// Raw helpers
// =============================================================================

/// Uninitialized storage for up to `len` elements from the global
/// allocator, halving on failure. Returns the block and the granted count;
/// a count of zero comes with a dangling pointer.
///
/// ```
/// use tola_algo::memory::{get_temporary_buffer, release_temporary_buffer};
///
/// let (ptr, granted) = get_temporary_buffer::<u64>(16);
/// assert!(granted <= 16);
/// unsafe { release_temporary_buffer(ptr, granted) };
/// ```
pub fn get_temporary_buffer<T>(len: usize) -> (NonNull<T>, usize) {
    acquire::<T, Global>(&Global, len)
}

/// Returns storage obtained from [`get_temporary_buffer`].
///
/// # Safety
///
/// `ptr` and `granted` must be exactly what `get_temporary_buffer` returned
/// and every element constructed in the block must already be destroyed.
pub unsafe fn release_temporary_buffer<T>(ptr: NonNull<T>, granted: usize) {
    unsafe { release(&Global, ptr, granted) }
}
