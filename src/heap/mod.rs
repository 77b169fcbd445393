//! Binary max-heap algorithms over slices.
//!
//! The heap is array-embedded: the parent of `i` is `(i - 1) / 2`, its
//! children are `2i + 1` and `2i + 2`, and no element orders above its
//! parent. Only [`make_heap`] turns arbitrary data into a heap; the other
//! operations require one and keep it valid. Mutating the slice directly
//! invalidates the heap without notice.
//!
//! Every operation has a `*_by` form taking a strict ordering
//! `FnMut(&T, &T) -> bool`; passing [`greater`](crate::functional::greater)
//! yields a min-heap.

mod hole;
mod ops;
mod sift;

pub use ops::{
    check_heap, check_heap_by, is_heap, is_heap_by, is_heap_until, is_heap_until_by, make_heap,
    make_heap_by, pop_heap, pop_heap_by, push_heap, push_heap_by, sort_heap, sort_heap_by,
};
