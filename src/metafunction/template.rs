//! Templates and their nested results.

/// A type-level function: `F` applied to the argument tuple `Args`.
///
/// Implement it for every arity the template accepts. A blanket
/// `impl<Args> Template<Args> for F` makes the template variadic. `Args` may
/// end in an unsized type (`(str,)`).
pub trait Template<Args: ?Sized> {
    /// The instantiation `F<Args...>`.
    type Apply: ?Sized;
}

/// The nested result of an instantiation (`F<Args...>::type`).
///
/// An instantiation without this impl is still a valid type; it just cannot
/// be invoked through [`Metafn`](crate::Metafn).
pub trait HasType {
    type Type: ?Sized;
}

/// `F<Args...>`.
pub type Apply<F, Args> = <F as Template<Args>>::Apply;

/// Declare a template marker for a generic type.
///
/// Fixed arity, one parameter per listed name:
///
/// ```
/// use tola_concepts::{define_template, Apply, assert_same_type};
///
/// define_template!(pub MaybeT => core::option::Option<A>);
/// assert_same_type!(Apply<MaybeT, (u8,)>, Option<u8>);
/// ```
///
/// Variadic, the whole argument tuple becomes the single parameter:
///
/// ```
/// use tola_concepts::{define_template, Apply, assert_same_type};
///
/// struct Pack<Args>(Args);
/// define_template!(PackT => Pack<..>);
/// assert_same_type!(Apply<PackT, ()>, Pack<()>);
/// assert_same_type!(Apply<PackT, (u8, i8)>, Pack<(u8, i8)>);
/// ```
#[macro_export]
macro_rules! define_template {
    ($(#[$meta:meta])* $vis:vis $name:ident => $($seg:ident)::+ < .. >) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $name;

        impl<Args> $crate::Template<Args> for $name {
            type Apply = $($seg)::+<Args>;
        }
    };
    ($(#[$meta:meta])* $vis:vis $name:ident => $($seg:ident)::+ < $($P:ident),+ >) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $name;

        impl<$($P),+> $crate::Template<($($P,)+)> for $name {
            type Apply = $($seg)::+<$($P),+>;
        }
    };
}
