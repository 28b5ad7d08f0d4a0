//! Lifting templates into callables.
//!
//! [`Metafn<F>`] and [`TemplateFn<F>`] are zero-sized values. Calling one with
//! a tuple of arguments promotes each argument through [`TypeOf`]
//! positionally, instantiates `F`, and returns the tag of the result.
//! Argument values are never read.
//!
//! A call with no valid instantiation is an unimplemented [`Invoke`] bound.
//! Nothing is instantiated eagerly, so [`valid_call!`](crate::valid_call)
//! can probe it and get `false`.

use core::fmt;
use core::marker::PhantomData;

use super::template::{HasType, Template};
use crate::types::{Type, TypeOf};

/// Calling convention shared by the wrappers. `Args` is a tuple.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be called with `{Args}`",
    label = "the wrapped template has no instantiation with a nested type for these arguments",
    note = "every argument must be a `Type<_>` or a value whose type implements `TypeOf`"
)]
pub trait Invoke<Args> {
    type Output;
    fn invoke(&self, args: Args) -> Self::Output;
}

/// Result type of invoking `M` with `Args`; usable in `const` items.
pub type Invoked<M, Args> = <M as Invoke<Args>>::Output;

impl<M: Invoke<Args> + ?Sized, Args> Invoke<Args> for &M {
    type Output = M::Output;

    #[inline(always)]
    fn invoke(&self, args: Args) -> Self::Output {
        (**self).invoke(args)
    }
}

// =============================================================================
// Metafn: F<Args...>::Type
// =============================================================================

/// `F` lifted to a callable that yields the tag of `F<Args...>::Type`.
pub struct Metafn<F>(PhantomData<fn() -> F>);

/// Wrap the template `F`.
#[inline(always)]
pub const fn metafunction<F>() -> Metafn<F> {
    Metafn(PhantomData)
}

impl<F> Metafn<F> {
    /// Call with a tuple of tags and/or values.
    #[inline(always)]
    pub fn call<Args>(&self, args: Args) -> Invoked<Self, Args>
    where
        Self: Invoke<Args>,
    {
        self.invoke(args)
    }
}

/// The wrapper is itself a template: `Apply<Metafn<F>, Args>` is
/// `Apply<F, Args>`.
impl<F: Template<Args>, Args: ?Sized> Template<Args> for Metafn<F> {
    type Apply = F::Apply;
}

// =============================================================================
// TemplateFn: F<Args...> itself
// =============================================================================

/// `F` lifted to a callable that yields the tag of the instantiation
/// `F<Args...>`, without requiring a nested result.
pub struct TemplateFn<F>(PhantomData<fn() -> F>);

/// Wrap the template `F`, keeping instantiations as the result.
#[inline(always)]
pub const fn template<F>() -> TemplateFn<F> {
    TemplateFn(PhantomData)
}

impl<F> TemplateFn<F> {
    /// Call with a tuple of tags and/or values.
    #[inline(always)]
    pub fn call<Args>(&self, args: Args) -> Invoked<Self, Args>
    where
        Self: Invoke<Args>,
    {
        self.invoke(args)
    }
}

impl<F: Template<Args>, Args: ?Sized> Template<Args> for TemplateFn<F> {
    type Apply = F::Apply;
}

// Manual impls so that no bound leaks onto `F`.
macro_rules! impl_wrapper_traits {
    ($($W:ident),*) => {
        $(
            impl<F> Clone for $W<F> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<F> Copy for $W<F> {}

            impl<F> Default for $W<F> {
                fn default() -> Self {
                    $W(PhantomData)
                }
            }

            impl<F> fmt::Debug for $W<F> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, concat!(stringify!($W), "<{}>"), core::any::type_name::<F>())
                }
            }
        )*
    };
}

impl_wrapper_traits!(Metafn, TemplateFn);

// =============================================================================
// Invoke impls, arity 0..=6
// =============================================================================

// Leading arguments must promote to sized types; the last one may be unsized.
macro_rules! impl_invoke {
    ($($A:ident)* ; $($L:ident)?) => {
        impl<F, $($A: TypeOf,)* $($L: TypeOf)?> Invoke<($($A,)* $($L,)?)> for Metafn<F>
        where
            $(<$A as TypeOf>::Of: Sized,)*
            F: Template<($(<$A as TypeOf>::Of,)* $(<$L as TypeOf>::Of,)?)>,
            <F as Template<($(<$A as TypeOf>::Of,)* $(<$L as TypeOf>::Of,)?)>>::Apply: HasType,
        {
            type Output = Type<
                <<F as Template<($(<$A as TypeOf>::Of,)* $(<$L as TypeOf>::Of,)?)>>::Apply as HasType>::Type,
            >;

            #[inline(always)]
            fn invoke(&self, _args: ($($A,)* $($L,)?)) -> Self::Output {
                Type::new()
            }
        }

        impl<F, $($A: TypeOf,)* $($L: TypeOf)?> Invoke<($($A,)* $($L,)?)> for TemplateFn<F>
        where
            $(<$A as TypeOf>::Of: Sized,)*
            F: Template<($(<$A as TypeOf>::Of,)* $(<$L as TypeOf>::Of,)?)>,
        {
            type Output = Type<<F as Template<($(<$A as TypeOf>::Of,)* $(<$L as TypeOf>::Of,)?)>>::Apply>;

            #[inline(always)]
            fn invoke(&self, _args: ($($A,)* $($L,)?)) -> Self::Output {
                Type::new()
            }
        }
    };
}

impl_invoke!(;);
impl_invoke!(; A0);
impl_invoke!(A0; A1);
impl_invoke!(A0 A1; A2);
impl_invoke!(A0 A1 A2; A3);
impl_invoke!(A0 A1 A2 A3; A4);
impl_invoke!(A0 A1 A2 A3 A4; A5);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{type_c, Apply};

    struct Wrap<T>(PhantomData<T>);
    impl<T> HasType for Wrap<T> {
        type Type = [T; 2];
    }

    struct WrapT;
    impl<T> Template<(T,)> for WrapT {
        type Apply = Wrap<T>;
    }

    #[test]
    fn test_call_with_tag_and_value() {
        let f = metafunction::<WrapT>();
        assert_eq!(f.call((type_c::<u8>(),)), type_c::<[u8; 2]>());
        assert_eq!(f.call((0_u8,)), type_c::<[u8; 2]>());
    }

    #[test]
    fn test_template_fn_returns_instantiation() {
        let t = template::<WrapT>();
        assert_eq!(t.call((type_c::<i32>(),)), type_c::<Wrap<i32>>());
    }

    #[test]
    fn test_wrapper_is_a_template() {
        crate::assert_same_type!(Apply<Metafn<WrapT>, (u8,)>, Wrap<u8>);
        crate::assert_same_type!(Apply<TemplateFn<WrapT>, (u8,)>, Wrap<u8>);
    }

    #[test]
    fn test_reference_forwards() {
        let f = metafunction::<WrapT>();
        let r = &f;
        assert_eq!(r.invoke((type_c::<char>(),)), type_c::<[char; 2]>());
    }
}
