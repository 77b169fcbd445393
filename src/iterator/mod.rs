//! Iterator capability model.
//!
//! - [`category`]: the five traversal tags and their lattice
//! - [`traits`]: `IteratorTraits` extraction and the concept traits
//! - [`ops`]: `distance` / `advance`, dispatched on category
//! - [`sink`]: output positions

pub mod category;
pub mod ops;
pub mod sink;
mod std_impls;
pub mod traits;

pub use category::{
    BidirectionalTag, Category, ExactSizeFlag, ForwardTag, InputTag, Meet, OutputTag,
    RandomAccessTag, Refines,
};
pub use ops::{AdvanceDispatch, DistanceDispatch, advance, distance};
#[cfg(feature = "alloc")]
pub use sink::{BackInserter, back_inserter};
pub use sink::{BidirectionalSink, Sink};
pub use traits::{
    BidirectionalIterator, CategoryOf, DifferenceOf, ForwardIterator, InputIterator,
    IteratorTraits, PointerOf, RandomAccessIterator, ReferenceOf, ValueOf, category,
    category_name, is_bidirectional_iterator, is_exact_size_iterator, is_forward_iterator,
    is_input_iterator, is_output_iterator, is_random_access_iterator,
};
