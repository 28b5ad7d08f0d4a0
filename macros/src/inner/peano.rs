//! Peano natural generation macro.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, Ident, LitInt};

pub struct PeanoInput {
    pub max: usize,
}

impl Parse for PeanoInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        if max > 64 {
            return Err(syn::Error::new(lit.span(), "peano! supports at most 64 naturals"));
        }
        Ok(PeanoInput { max })
    }
}

fn natural(n: usize) -> Ident {
    Ident::new(&format!("N{}", n), Span::call_site())
}

pub fn expand_peano(input: PeanoInput) -> TokenStream {
    let mut items = vec![quote! {
        #[doc = "The natural `0`."]
        pub type N0 = Z;
        #[doc = "The natural `0`."]
        pub const N0: N0 = Z;
    }];

    for n in 1..=input.max {
        let curr = natural(n);
        let prev = natural(n - 1);
        let doc = format!("The natural `{}`.", n);
        items.push(quote! {
            #[doc = #doc]
            pub type #curr = S<#prev>;
            #[doc = #doc]
            pub const #curr: #curr = S(#prev);
        });
    }

    quote! { #(#items)* }
}
