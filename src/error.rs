//! Error types for checked algorithm entry points.
//!
//! Most operations treat a broken precondition as a bug and panic. The
//! checked variants (`check_heap`, `try_equal`) report it as a value.

#[cfg(feature = "std")]
use std::error::Error as StdError;

use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error returned by the checked algorithm variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The element at `child` orders above its parent at `parent`.
    NotAHeap {
        /// Index of the parent slot.
        parent: usize,
        /// Index of the offending child.
        child: usize,
    },

    /// The second range is shorter than the range driving the comparison.
    LengthMismatch {
        /// Elements the driving range needs matched.
        required: usize,
        /// Elements the second range actually has.
        available: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::NotAHeap { parent, child } => {
                write!(f, "Heap property violated: element {child} orders above its parent {parent}")
            }
            Self::LengthMismatch { required, available } => {
                write!(f, "Second range too short: need {required} elements, got {available}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl StdError for Error {}
