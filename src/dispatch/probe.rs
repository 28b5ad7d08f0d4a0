//! # Trial probes
//!
//! Detection that answers "is this bound satisfied" with a `bool` instead of
//! a compile error.
//!
//! All probes use the "Inherent Const Fallback" pattern: an inherent const
//! shadows a trait const when the bound is satisfied, and the trait default
//! (`false`) is found otherwise.
//!
//! **Note**: the type-level forms only work for concrete types known at the
//! call site. Inside `fn foo<T>()` the inherent impl is never selected; use
//! the concept traits as bounds there instead.
//!
//! ```
//! use tola_concepts::{has_impl, models, Enumerable};
//!
//! assert!(has_impl!(String, Clone));
//! assert!(!has_impl!(String, Copy));
//!
//! const INT_IS_ENUMERABLE: bool = models!(i32: Enumerable);
//! assert!(INT_IS_ENUMERABLE);
//! assert!(!models!(String: Enumerable));
//! ```

// =============================================================================
// has_impl! - Low-level trait detection (concrete types only)
// =============================================================================

/// Check if a concrete type implements a trait at compile time.
///
/// The result is a constant expression.
///
/// ```
/// use tola_concepts::has_impl;
///
/// trait MyTrait {}
/// impl MyTrait for i32 {}
///
/// assert!(has_impl!(i32, MyTrait));
/// assert!(!has_impl!(String, MyTrait));
/// assert!(has_impl!(str, core::fmt::Display));
/// ```
#[macro_export]
macro_rules! has_impl {
    ($T:ty, $Trait:path) => {{
        struct __Probe<T: ?Sized>(::core::marker::PhantomData<T>);

        trait __Fallback { const VAL: bool = false; }
        impl<T: ?Sized> __Fallback for __Probe<T> {}

        impl<T: ?Sized + $Trait> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Probe::<$T>::VAL
    }};
}

// =============================================================================
// is_default! - Is a hook left at its default?
// =============================================================================

/// `true` iff the hook has **not** been implemented for the tag.
///
/// ```
/// use tola_concepts::{is_default, PredImpl, SuccImpl, Z};
/// use tola_concepts::instances::peano::PeanoTag;
///
/// assert!(!is_default!(PeanoTag: SuccImpl<Z>));
/// // Zero has no predecessor.
/// assert!(is_default!(PeanoTag: PredImpl<Z>));
/// ```
#[macro_export]
macro_rules! is_default {
    ($Tag:ty : $Hook:path) => {
        !$crate::has_impl!($Tag, $Hook)
    };
}

// =============================================================================
// models! - Concept membership
// =============================================================================

/// `true` iff `T` models the concept.
///
/// Concepts are traits whose blanket impl requires every hook of the
/// concept, so this is `true` exactly when every required hook is
/// implemented for `T`'s tag. A missing hook makes it `false`; it never
/// fails to compile.
///
/// ```
/// use tola_concepts::{models, Enumerable, Iterable, List};
///
/// assert!(models!(u8: Enumerable));
/// assert!(models!((u8, char): Iterable));
/// assert!(models!((): List));
/// assert!(!models!((): Iterable));
/// ```
#[macro_export]
macro_rules! models {
    ($T:ty : $Concept:path) => {
        $crate::has_impl!($T, $Concept)
    };
}

// =============================================================================
// valid_call! - Would this call compile?
// =============================================================================

/// Probe whether a callable accepts the given arguments.
///
/// Two forms:
///
/// * `valid_call!(f, a, b)` takes values; only their static types are used.
/// * `valid_call!(type F, (A, B))` takes types and is a constant expression.
///
/// A rejected call answers `false`; it does not abort compilation.
///
/// ```
/// use tola_concepts::{metafunction, type_c, valid_call, Metafn, Template};
/// use tola_concepts::metafunction::builtin::Identity;
///
/// // Instantiable, but without a nested type.
/// struct Bare<Args>(Args);
/// struct NoType;
/// impl<Args> Template<Args> for NoType {
///     type Apply = Bare<Args>;
/// }
///
/// assert!(valid_call!(metafunction::<Identity>(), type_c::<u8>()));
/// assert!(!valid_call!(metafunction::<NoType>()));
/// assert!(!valid_call!(metafunction::<NoType>(), type_c::<u8>()));
/// const OK: bool = valid_call!(type Metafn<Identity>, (u8,));
/// assert!(OK);
/// ```
#[macro_export]
macro_rules! valid_call {
    (type $F:ty, ($($A:ty),* $(,)?)) => {
        $crate::has_impl!($F, $crate::Invoke<($($A,)*)>)
    };
    ($f:expr $(, $arg:expr)* $(,)?) => {{
        struct __Probe<F, A>(::core::marker::PhantomData<(F, A)>);

        trait __Fallback { fn __valid(&self) -> bool { false } }
        impl<F, A> __Fallback for __Probe<F, A> {}

        impl<F: $crate::Invoke<A>, A> __Probe<F, A> {
            #[allow(dead_code)]
            fn __valid(&self) -> bool { true }
        }

        #[allow(dead_code)]
        fn __probe<F, A>(_: &F, _: &A) -> __Probe<F, A> {
            __Probe(::core::marker::PhantomData)
        }

        __probe(&$f, &($($arg,)*)).__valid()
    }};
}
