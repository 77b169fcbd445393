//! Element triviality facts and the transfer strategies they select.

pub mod caps;
pub mod strategy;

pub use caps::{ElementCaps, is_one_byte, is_trivial};
pub use strategy::{Fill, OneByteInt, Transfer};
