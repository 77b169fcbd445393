//! Movement and comparison algorithms.
//!
//! Two surfaces:
//!
//! - iterator forms ([`copy`], [`fill`], [`equal`], ...) accept any
//!   iterator meeting the algorithm's minimum category and write into a
//!   [`Sink`](crate::iterator::Sink);
//! - slice forms ([`copy_slice`], [`copy_within`], [`fill_slice`], ...)
//!   work on contiguous storage and take the bulk path when the element
//!   facts allow it.

mod compare;
mod copy;
mod fill;
mod slice;

pub use compare::{
    equal, equal_by, iter_swap, lexicographical_compare, lexicographical_compare_by,
    lexicographical_compare_bytes, max, max_by, min, min_by, mismatch, mismatch_by, try_equal,
    try_equal_by,
};
pub use copy::{CopyNDispatch, copy, copy_backward, copy_if, copy_n, move_backward, move_range};
pub use fill::{FillDispatch, fill, fill_n};
pub use slice::{
    copy_backward_slice, copy_backward_within, copy_slice, copy_within, fill_n_slice, fill_slice,
    move_backward_within, move_slice, move_within,
};
