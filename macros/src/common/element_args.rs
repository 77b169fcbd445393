//! `#[element(...)]` helper attribute parsing.

use syn::{Attribute, Result};

/// Options collected from every `#[element(...)]` on a type.
#[derive(Default)]
pub struct ElementArgs {
    /// `#[element(trivial)]`: bitwise copy is a valid clone.
    pub trivial: bool,
}

impl ElementArgs {
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut args = ElementArgs::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("element")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("trivial") {
                    args.trivial = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported element option, expected `trivial`"))
                }
            })?;
        }
        Ok(args)
    }
}
