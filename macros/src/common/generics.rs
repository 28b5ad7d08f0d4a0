//! Generic-parameter plumbing shared by the derives.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Generics};

/// Split generics into the three pieces an `impl` header needs.
pub fn impl_parts(generics: &Generics) -> (TokenStream, TokenStream, TokenStream) {
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    (
        quote! { #impl_generics },
        quote! { #ty_generics },
        quote! { #where_clause },
    )
}

/// Find `#[name(...)]` among the derive input's attributes.
pub fn find_attr<'a>(input: &'a DeriveInput, name: &str) -> Option<&'a syn::Attribute> {
    input.attrs.iter().find(|attr| attr.path().is_ident(name))
}
