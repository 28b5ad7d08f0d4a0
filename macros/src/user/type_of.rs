use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

use crate::common::generics::impl_parts;

/// `#[derive(TypeOf)]` makes the type its own promotion target.
pub fn expand_derive_type_of(input: DeriveInput) -> TokenStream2 {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = impl_parts(&input.generics);

    quote! {
        impl #impl_generics ::tola_concepts::TypeOf for #ident #ty_generics #where_clause {
            type Of = Self;
        }
    }
}
