//! Output positions.
//!
//! A [`Sink`] is where copy-like algorithms write. Mutable slice iterators
//! write through to existing elements (front to back with [`Sink::put`],
//! back to front with [`BidirectionalSink::put_back`]); a [`BackInserter`]
//! appends to a `Vec`.
//!
//! Sinks take owned values, and borrowed values where the element is
//! `Clone`, so `copy(v.iter(), out)` and `copy(v.into_iter(), out)` both
//! work without an adaptor.

use core::slice;

/// A write-only position that advances on every write.
pub trait Sink<T> {
    /// Writes `value` at the current position and steps past it.
    ///
    /// # Panics
    ///
    /// Panics if the sink has no room left.
    fn put(&mut self, value: T);
}

/// A sink that can also be written from its back end.
pub trait BidirectionalSink<T>: Sink<T> {
    /// Writes `value` just before the current back position and steps the
    /// back position down.
    ///
    /// # Panics
    ///
    /// Panics if the sink has no room left.
    fn put_back(&mut self, value: T);
}

#[cold]
#[inline(never)]
#[track_caller]
fn sink_exhausted() -> ! {
    panic!("output range is shorter than the input range")
}

impl<S: Sink<T> + ?Sized, T> Sink<T> for &mut S {
    #[inline]
    fn put(&mut self, value: T) {
        (**self).put(value);
    }
}

impl<S: BidirectionalSink<T> + ?Sized, T> BidirectionalSink<T> for &mut S {
    #[inline]
    fn put_back(&mut self, value: T) {
        (**self).put_back(value);
    }
}

// =============================================================================
// Mutable slices
// =============================================================================

impl<'a, T> Sink<T> for slice::IterMut<'a, T> {
    #[inline]
    #[track_caller]
    fn put(&mut self, value: T) {
        match self.next() {
            Some(slot) => *slot = value,
            None => sink_exhausted(),
        }
    }
}

impl<'a, 'b, T: Clone> Sink<&'b T> for slice::IterMut<'a, T> {
    #[inline]
    #[track_caller]
    fn put(&mut self, value: &'b T) {
        match self.next() {
            Some(slot) => slot.clone_from(value),
            None => sink_exhausted(),
        }
    }
}

impl<'a, T> BidirectionalSink<T> for slice::IterMut<'a, T> {
    #[inline]
    #[track_caller]
    fn put_back(&mut self, value: T) {
        match self.next_back() {
            Some(slot) => *slot = value,
            None => sink_exhausted(),
        }
    }
}

impl<'a, 'b, T: Clone> BidirectionalSink<&'b T> for slice::IterMut<'a, T> {
    #[inline]
    #[track_caller]
    fn put_back(&mut self, value: &'b T) {
        match self.next_back() {
            Some(slot) => slot.clone_from(value),
            None => sink_exhausted(),
        }
    }
}

// =============================================================================
// Back inserter
// =============================================================================

#[cfg(feature = "alloc")]
pub use inserter::{BackInserter, back_inserter};

#[cfg(feature = "alloc")]
mod inserter {
    use alloc::vec::Vec;

    use super::Sink;
    use crate::iterator::category::OutputTag;
    use crate::iterator::traits::IteratorTraits;
    use crate::primitives::Absent;

    /// Appends every written value to a `Vec`. Never runs out of room.
    #[derive(Debug)]
    pub struct BackInserter<'a, T> {
        target: &'a mut Vec<T>,
    }

    impl<'a, T> BackInserter<'a, T> {
        /// The vector written so far.
        pub fn get(&self) -> &Vec<T> {
            self.target
        }
    }

    /// A sink appending to `target`.
    ///
    /// ```
    /// use tola_algo::algobase::copy_if;
    /// use tola_algo::iterator::back_inserter;
    ///
    /// let mut evens: Vec<i32> = Vec::new();
    /// copy_if(&[1, 2, 3, 4], back_inserter(&mut evens), |x| **x % 2 == 0);
    /// assert_eq!(evens, [2, 4]);
    /// ```
    #[inline]
    pub fn back_inserter<T>(target: &mut Vec<T>) -> BackInserter<'_, T> {
        BackInserter { target }
    }

    impl<'a, T> Sink<T> for BackInserter<'a, T> {
        #[inline]
        fn put(&mut self, value: T) {
            self.target.push(value);
        }
    }

    impl<'a, 'b, T: Clone> Sink<&'b T> for BackInserter<'a, T> {
        #[inline]
        fn put(&mut self, value: &'b T) {
            self.target.push(value.clone());
        }
    }

    impl<'a, T> IteratorTraits for BackInserter<'a, T> {
        type Category = OutputTag;
        type IsExactSize = Absent;
        type Value = ();
        type Difference = ();
        type Pointer = ();
        type Reference = ();
    }
}
