// Parsing helpers shared by the derive macros.

mod element_args;

pub use element_args::*;
