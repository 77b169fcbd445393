//! `#[derive(ElementCaps)]`

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_quote};

use crate::common::ElementArgs;

/// Expand `#[derive(ElementCaps)]`.
///
/// Without options the type is element-wise (`Trivial = Absent`). With
/// `#[element(trivial)]` the impl gains a `Self: Copy` bound, so a
/// non-`Copy` type fails to compile instead of taking the bulk path.
pub fn expand_derive_element_caps(input: DeriveInput) -> TokenStream {
    let args = match ElementArgs::from_attrs(&input.attrs) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error(),
    };

    let name = &input.ident;
    let mut generics = input.generics.clone();
    let trivial = if args.trivial {
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(Self: ::core::marker::Copy));
        quote!(::tola_algo::Present)
    } else {
        quote!(::tola_algo::Absent)
    };
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::tola_algo::ElementCaps for #name #ty_generics #where_clause {
            type Trivial = #trivial;
            type OneByte = ::tola_algo::Absent;
        }
    }
}
