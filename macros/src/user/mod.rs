//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(ElementCaps)]` | on struct/enum | Declare element facts |
//! | `#[element(trivial)]` | helper attribute | Opt into the bulk copy path |

mod element_caps;

pub use element_caps::expand_derive_element_caps;
