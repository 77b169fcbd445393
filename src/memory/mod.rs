//! Storage collaborators: in-place construction, raw allocation, and the
//! scratch buffer built on both.

pub mod construct;
#[cfg(feature = "alloc")]
pub mod raw_alloc;
#[cfg(feature = "alloc")]
pub mod temp_buffer;

pub use construct::{construct, construct_default, destroy, destroy_range};
#[cfg(feature = "alloc")]
pub use raw_alloc::{Global, RawAlloc};
#[cfg(feature = "alloc")]
pub use temp_buffer::{TempBuffer, get_temporary_buffer, release_temporary_buffer};
