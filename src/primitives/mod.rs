//! # Layer 0: Primitives
//!
//! Basic building blocks shared by every other layer:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).

pub mod bool;

// Re-export key types at this level
pub use bool::{Bool, Present, Absent, SelectBool, Lift, If};
