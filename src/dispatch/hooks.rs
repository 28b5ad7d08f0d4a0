//! Customization hooks.
//!
//! Each operation has one hook trait, implemented **on the tag** and
//! parameterized by the value type it applies to. A hook that has not been
//! implemented is the default: probing it yields `false`
//! ([`is_default!`](crate::is_default)), using it fails to compile with the
//! message attached below.

/// `succ`: the next value.
#[diagnostic::on_unimplemented(
    message = "`succ` is not defined for `{X}`",
    label = "tag `{Self}` has no `SuccImpl<{X}>` hook",
    note = "implement `SuccImpl<{X}>` for `{Self}`; together with `PredImpl` this makes `{X}` Enumerable"
)]
pub trait SuccImpl<X> {
    type Output;
    fn apply(x: X) -> Self::Output;

    /// `apply`, or `None` when the successor is not representable.
    #[inline(always)]
    fn checked(x: X) -> Option<Self::Output> {
        Some(Self::apply(x))
    }
}

/// `pred`: the previous value.
#[diagnostic::on_unimplemented(
    message = "`pred` is not defined for `{X}`",
    label = "tag `{Self}` has no `PredImpl<{X}>` hook",
    note = "implement `PredImpl<{X}>` for `{Self}`; together with `SuccImpl` this makes `{X}` Enumerable"
)]
pub trait PredImpl<X> {
    type Output;
    fn apply(x: X) -> Self::Output;

    /// `apply`, or `None` when the predecessor is not representable.
    #[inline(always)]
    fn checked(x: X) -> Option<Self::Output> {
        Some(Self::apply(x))
    }
}

/// `head`: the first element.
#[diagnostic::on_unimplemented(
    message = "`head` is not defined for `{Xs}`",
    label = "tag `{Self}` has no `HeadImpl<{Xs}>` hook",
    note = "empty heterogeneous sequences have no head"
)]
pub trait HeadImpl<Xs> {
    type Output;
    fn apply(xs: Xs) -> Self::Output;
}

/// `tail`: everything but the first element, in the same container kind.
#[diagnostic::on_unimplemented(
    message = "`tail` is not defined for `{Xs}`",
    label = "tag `{Self}` has no `TailImpl<{Xs}>` hook",
    note = "empty heterogeneous sequences have no tail"
)]
pub trait TailImpl<Xs> {
    type Output;
    fn apply(xs: Xs) -> Self::Output;
}

/// `is_empty`: a `bool`, or a type-level `True`/`False` when the answer is
/// known from the type alone.
#[diagnostic::on_unimplemented(
    message = "`is_empty` is not defined for `{Xs}`",
    label = "tag `{Self}` has no `IsEmptyImpl<{Xs}>` hook"
)]
pub trait IsEmptyImpl<Xs> {
    type Output;
    fn apply(xs: &Xs) -> Self::Output;
}

/// The List instance of a tag: how to build an empty sequence.
///
/// Implementing this is what makes values of the tag model `List`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a List tag",
    label = "`{Self}` has no `ListImpl` instance",
    note = "implement `ListImpl` (nil) and `ConsImpl` (cons) for the tag"
)]
pub trait ListImpl {
    type Nil;
    fn nil() -> Self::Nil;
}

/// `cons`: prepend `X` to `Xs`, producing a new sequence.
///
/// The input sequence is consumed or borrowed, never mutated in place
/// behind the caller's back.
#[diagnostic::on_unimplemented(
    message = "`cons` is not defined for `{X}` onto `{Xs}`",
    label = "tag `{Self}` has no `ConsImpl<{X}, {Xs}>` hook"
)]
pub trait ConsImpl<X, Xs>: ListImpl {
    type Output;
    fn apply(x: X, xs: Xs) -> Self::Output;
}
