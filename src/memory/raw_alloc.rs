//! Raw allocation interface.

use core::alloc::Layout;
use core::ptr::NonNull;

/// A fallible raw allocator.
///
/// # Safety
///
/// A block returned by `allocate` must be valid for `layout` until it is
/// passed back to `deallocate` with the same layout.
pub unsafe trait RawAlloc {
    /// Allocates a block for `layout`, or returns `None`. Never panics and
    /// never aborts.
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// Frees a block previously returned by [`allocate`](RawAlloc::allocate).
    ///
    /// # Safety
    ///
    /// `ptr` must come from this allocator with the same `layout`.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

unsafe impl<A: RawAlloc + ?Sized> RawAlloc for &A {
    #[inline]
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        (**self).allocate(layout)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { (**self).deallocate(ptr, layout) }
    }
}

/// The registered global allocator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Global;

unsafe impl RawAlloc for Global {
    /// Zero-sized layouts are refused.
    #[inline]
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        if layout.size() == 0 {
            return None;
        }
        // SAFETY: `layout` has non-zero size.
        NonNull::new(unsafe { ::alloc::alloc::alloc(layout) })
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { ::alloc::alloc::dealloc(ptr.as_ptr(), layout) }
    }
}
