//! The two index-arithmetic primitives behind every heap operation.
//!
//! Both work on an open [`Hole`] and finish by dropping it, which writes the
//! held value into its final slot. Element moves are single copies into the
//! hole; nothing is swapped.

use crate::heap::hole::Hole;

/// Moves the hole toward `top` while its parent orders below the held
/// value, then leaves the hole at the first parent that does not.
///
/// Afterwards no ancestor of the resting slot (up to `top`) is less than
/// the value.
///
/// # Safety
///
/// `top <= hole.pos()`.
#[inline]
pub(crate) unsafe fn sift_up<T, F>(hole: &mut Hole<'_, T>, top: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while hole.pos() > top {
        let parent = (hole.pos() - 1) / 2;
        // SAFETY: `parent < pos`, both in bounds.
        unsafe {
            if !is_less(hole.at(parent), hole.held()) {
                break;
            }
            hole.pull_from(parent);
        }
    }
}

/// Re-seats the value at `start` inside the heap `v`.
///
/// The hole first walks all the way down, always promoting the larger
/// child (the right one unless `right < left`), and promotes a lone left
/// child at the bottom. The held value is then sifted up from the leaf it
/// reached, which places it correctly without comparing it on the way
/// down.
///
/// # Safety
///
/// `start < v.len()`.
pub(crate) unsafe fn adjust_heap<T, F>(v: &mut [T], start: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    // SAFETY: `start < len` per the caller's contract. Every `child` below
    // is checked against `len` and differs from the hole position.
    unsafe {
        let mut hole = Hole::new(v, start);
        let mut child = 2 * hole.pos() + 2;
        while child < len {
            if is_less(hole.at(child), hole.at(child - 1)) {
                child -= 1;
            }
            hole.pull_from(child);
            child = 2 * hole.pos() + 2;
        }
        if child == len {
            hole.pull_from(child - 1);
        }
        sift_up(&mut hole, start, is_less);
    }
}

#[cfg(test)]
mod tests {
    use super::{adjust_heap, sift_up};
    use crate::heap::hole::Hole;

    fn lt(a: &i32, b: &i32) -> bool {
        a < b
    }

    #[test]
    fn sift_up_stops_below_larger_parent() {
        let mut v = [9, 5, 8, 1, 2, 7];
        unsafe {
            let mut hole = Hole::new(&mut v, 5);
            sift_up(&mut hole, 0, &mut lt);
        }
        assert_eq!(v, [9, 5, 8, 1, 2, 7]);
    }

    #[test]
    fn sift_up_climbs_to_root() {
        let mut v = [9, 5, 8, 1, 2, 10];
        unsafe {
            let mut hole = Hole::new(&mut v, 5);
            sift_up(&mut hole, 0, &mut lt);
        }
        assert_eq!(v, [10, 5, 9, 1, 2, 8]);
    }

    #[test]
    fn adjust_heap_prefers_right_child_on_tie() {
        // Children 1 and 2 compare equal; the tag lets us see which one moved.
        let mut v = [(0, 'r'), (5, 'a'), (5, 'b')];
        let mut by_key = |a: &(i32, char), b: &(i32, char)| a.0 < b.0;
        unsafe { adjust_heap(&mut v, 0, &mut by_key) };
        assert_eq!(v, [(5, 'b'), (5, 'a'), (0, 'r')]);
    }

    #[test]
    fn adjust_heap_promotes_lone_left_child() {
        let mut v = [1, 7];
        unsafe { adjust_heap(&mut v, 0, &mut lt) };
        assert_eq!(v, [7, 1]);
    }

    #[test]
    fn adjust_heap_sifts_back_up_from_leaf() {
        // The hole walks down to slot 3; 6 then climbs back above the 4.
        let mut v = [6, 9, 8, 4, 3];
        unsafe { adjust_heap(&mut v, 0, &mut lt) };
        assert_eq!(v, [9, 6, 8, 4, 3]);
    }
}
