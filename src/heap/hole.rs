//! A slot whose value has been taken out of the slice.

use core::mem::ManuallyDrop;
use core::ptr;

/// A vacant index of a heap slice during a sift.
///
/// The value that belongs in the vacant slot is held aside in `held`. Sifting
/// pulls neighbours into the vacancy one at a time, and dropping the `Hole`
/// puts `held` into whatever slot is vacant at that moment. A comparator that
/// panics halfway through a sift therefore unwinds into a slice holding every
/// original element exactly once.
pub(crate) struct Hole<'a, T: 'a> {
    slots: &'a mut [T],
    held: ManuallyDrop<T>,
    vacant: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Lifts the value at `vacant` out of `slots`.
    ///
    /// # Safety
    ///
    /// `vacant < slots.len()`.
    #[inline]
    pub(crate) unsafe fn new(slots: &'a mut [T], vacant: usize) -> Self {
        debug_assert!(vacant < slots.len(), "hole {vacant} out of bounds for length {}", slots.len());
        // SAFETY: the index is in bounds. The bitwise copy leaves the slot
        // logically empty; only `Drop` writes to it again.
        let held = unsafe { ptr::read(slots.as_ptr().add(vacant)) };
        Hole { slots, held: ManuallyDrop::new(held), vacant }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.vacant
    }

    /// The value waiting to be put back.
    #[inline]
    pub(crate) fn held(&self) -> &T {
        &self.held
    }

    /// Borrows an occupied slot.
    ///
    /// # Safety
    ///
    /// `index` is in bounds and is not the vacant slot.
    #[inline]
    pub(crate) unsafe fn at(&self, index: usize) -> &T {
        debug_assert!(index != self.vacant, "read of the vacant slot {index}");
        debug_assert!(index < self.slots.len(), "read {index} out of bounds for length {}", self.slots.len());
        // SAFETY: every in-bounds slot other than `vacant` holds a live value.
        unsafe { self.slots.get_unchecked(index) }
    }

    /// Shifts the value at `index` into the vacancy, leaving `index` vacant.
    ///
    /// # Safety
    ///
    /// `index` is in bounds and is not the vacant slot.
    #[inline]
    pub(crate) unsafe fn pull_from(&mut self, index: usize) {
        debug_assert!(index != self.vacant, "pull of the vacant slot {index} onto itself");
        debug_assert!(index < self.slots.len(), "pull {index} out of bounds for length {}", self.slots.len());
        let base = self.slots.as_mut_ptr();
        // SAFETY: two distinct in-bounds slots. After the copy `index` is the
        // logically empty one and `vacant` holds a live value.
        unsafe { ptr::copy_nonoverlapping(base.add(index), base.add(self.vacant), 1) };
        self.vacant = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // SAFETY: `held` is read exactly once, here, and goes into the one
        // slot that has no live value. `ptr::write` does not drop the old bits.
        unsafe {
            let held = ManuallyDrop::take(&mut self.held);
            ptr::write(self.slots.as_mut_ptr().add(self.vacant), held);
        }
    }
}
