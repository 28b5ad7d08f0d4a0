//! Procedural macros for tola-concepts
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `peano!(n)` | - | Peano aliases and constants `N0..Nn` |
//! | `#[derive(TypeOf)]` | struct/enum | Promote values of the type to its type tag |
//! | `#[derive(Tagged)]` | struct/enum | Attach a dispatch tag (`#[tag(Path)]`, default `Self`) |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(TypeOf, Tagged)]
//! #[tag(WeekdayTag)]
//! enum Weekday { Mon, Tue }
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod inner;
mod common;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate Peano naturals `N0..=Nn`.
///
/// Each `Nk` is both a type alias and a constant of that type:
///
/// ```ignore
/// peano!(16);  // pub type N0 = Z; pub const N0: N0 = Z; pub type N1 = S<N0>; ...
/// ```
#[proc_macro]
pub fn peano(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::PeanoInput);
    inner::peano::expand_peano(input).into()
}

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Derive `TypeOf` so that values of this type promote to `Type<Self>`
/// when passed to a metafunction.
///
/// Every type parameter gets no extra bound; the impl is as generic as the
/// type itself.
#[proc_macro_derive(TypeOf)]
pub fn derive_type_of(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::type_of::expand_derive_type_of(input).into()
}

/// Derive `TagOf`.
///
/// Without an attribute the type is its own tag. `#[tag(Path)]` selects a
/// shared tag, so several representations can dispatch to the same hooks.
#[proc_macro_derive(Tagged, attributes(tag))]
pub fn derive_tagged(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    match user::tagged::expand_derive_tagged(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
