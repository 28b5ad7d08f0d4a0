//! Compile-time assertions.
//!
//! A failed check is a compilation failure, never a runtime panic.
//!
//! ```
//! use tola_concepts::{assert_same_type, constant_check, models, Enumerable, N2, S, Z};
//!
//! assert_same_type!(N2, S<S<Z>>);
//! constant_check!(models!(u8: Enumerable));
//! ```
//!
//! ```compile_fail
//! tola_concepts::assert_same_type!(u8, u16);
//! ```
//!
//! ```compile_fail
//! use tola_concepts::{constant_check, models, Enumerable};
//! constant_check!(models!(String: Enumerable));
//! ```

use crate::types::Type;

/// Implemented only for `T: SameAs<T>`.
#[diagnostic::on_unimplemented(
    message = "type mismatch: `{Self}` is not `{T}`",
    label = "expected `{T}`"
)]
pub trait SameAs<T: ?Sized> {}

impl<T: ?Sized> SameAs<T> for T {}

#[doc(hidden)]
pub const fn __require_same<A: ?Sized + SameAs<B>, B: ?Sized>() {}

/// Accepts two tags only if they encode the same type.
///
/// The values are never inspected; this is a type check dressed as a call,
/// so it works on results that are not constants.
#[inline(always)]
pub const fn same_tag<A: ?Sized + SameAs<B>, B: ?Sized>(_a: Type<A>, _b: Type<B>) {}

/// Fail compilation unless the two types are identical.
#[macro_export]
macro_rules! assert_same_type {
    ($A:ty, $B:ty $(,)?) => {
        const _: () = $crate::dispatch::check::__require_same::<$A, $B>();
    };
}

/// Fail compilation unless the constant condition holds.
#[macro_export]
macro_rules! constant_check {
    ($cond:expr $(,)?) => {
        const _: () = ::core::assert!($cond);
    };
    ($cond:expr, $msg:literal $(,)?) => {
        const _: () = ::core::assert!($cond, $msg);
    };
}
