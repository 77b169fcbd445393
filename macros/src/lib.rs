//! Procedural macros for tola-algo
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(ElementCaps)]` | struct/enum | Element facts for the slice algorithms |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Clone, Copy, ElementCaps)]
//! #[element(trivial)]
//! struct Point { x: i32, y: i32 }
//!
//! // Slices of Point now copy with one memmove.
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations
// =============================================================================

mod common;
mod user;

// =============================================================================
// Derive Macros (user/)
// =============================================================================

/// Derive `ElementCaps`.
///
/// # Usage
/// ```ignore
/// #[derive(Clone, ElementCaps)]
/// struct Name(String);                  // element-wise
///
/// #[derive(Clone, Copy, ElementCaps)]
/// #[element(trivial)]
/// struct Pixel(u8, u8, u8, u8);         // bulk copy
/// ```
#[proc_macro_derive(ElementCaps, attributes(element))]
pub fn derive_element_caps(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_element_caps(input).into()
}
