#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library (hash collections, io::Bytes facts)
// - alloc: enables TempBuffer, BackInserter and collection iterator facts

//! # tola-algo
//!
//! Generic sequence algorithms driven by compile-time capability facts.
//!
//! ## Architecture
//!
//! Every algorithm states the weakest iterator capability it needs as a
//! trait bound. The iterator's category tag then picks the implementation
//! through trait resolution; nothing is checked at runtime.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (Present / Absent), If / And / Or / Not, SelectBool       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Facts                                                   |
//! |  - iterator: Category tags, IteratorTraits, Refines, Sink         |
//! |  - element:  ElementCaps (Trivial, OneByte) -> Transfer / Fill    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Algorithms                                              |
//! |  - algobase: copy / move / fill / equal / mismatch / lex compare  |
//! |  - heap:     push / pop / make / sort (sift-up, sift-down)        |
//! |  - memory:   construct / destroy, TempBuffer                      |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_algo::prelude::*;
//!
//! // Iterator forms take any iterator meeting the minimum category.
//! let src = [3, 1, 4, 1, 5];
//! let mut dst = [0; 5];
//! let rest = copy(&src, dst.iter_mut());
//! assert_eq!(rest.len(), 0);
//! assert!(equal(&src, &dst));
//!
//! // Slice forms pick a memmove for trivial element types.
//! copy_within(&mut dst, 1..5, 0);
//! assert_eq!(dst, [1, 4, 1, 5, 5]);
//!
//! // Heaps live in plain slices.
//! make_heap(&mut dst);
//! sort_heap(&mut dst);
//! assert_eq!(dst, [1, 1, 4, 5, 5]);
//! ```

// Allow `::tola_algo` to work inside the crate itself
extern crate self as tola_algo;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for the generated query functions
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Capability and element facts
// =============================================================================
pub mod element;
pub mod iterator;

// =============================================================================
// Layer 2: Algorithms
// =============================================================================
pub mod algobase;
pub mod functional;
pub mod heap;
pub mod memory;

pub mod error;

// Registration and detection macros (impl_element_caps!, has_iterator_traits!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use element::{ElementCaps, Fill, Transfer};
pub use error::Error;
pub use primitives::{Absent, Bool, Lift, Present, SelectBool};

// Re-export proc-macros
pub use macros::ElementCaps;

/// Common items for algorithm callers.
pub mod prelude {
    pub use crate::algobase::{
        copy, copy_backward, copy_backward_within, copy_if, copy_n, copy_slice, copy_within,
        equal, equal_by, fill, fill_n, fill_n_slice, fill_slice, lexicographical_compare,
        lexicographical_compare_by, mismatch, mismatch_by, move_backward, move_range, move_slice,
        move_within,
    };
    pub use crate::element::ElementCaps;
    pub use crate::heap::{
        is_heap, is_heap_by, make_heap, make_heap_by, pop_heap, pop_heap_by, push_heap,
        push_heap_by, sort_heap, sort_heap_by,
    };
    #[cfg(feature = "alloc")]
    pub use crate::iterator::back_inserter;
    pub use crate::iterator::{
        BidirectionalIterator, BidirectionalSink, Category, ForwardIterator, InputIterator,
        IteratorTraits, RandomAccessIterator, Refines, Sink,
    };
    pub use crate::Error;
    pub use macros::ElementCaps;
}
