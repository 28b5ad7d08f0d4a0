use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Type};

use crate::common::generics::{find_attr, impl_parts};

/// `#[derive(Tagged)]` with an optional `#[tag(Path)]`.
///
/// The tag attribute accepts any type, including generic ones that mention
/// the deriving type's parameters (`#[tag(DequeTag<T>)]`).
pub fn expand_derive_tagged(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = impl_parts(&input.generics);

    let tag: TokenStream2 = match find_attr(&input, "tag") {
        Some(attr) => {
            let ty: Type = attr.parse_args()?;
            quote! { #ty }
        }
        None => quote! { Self },
    };

    Ok(quote! {
        impl #impl_generics ::tola_concepts::TagOf for #ident #ty_generics #where_clause {
            type Tag = #tag;
        }
    })
}
