//! Operations: free functions dispatching on `TagOf`.
//!
//! Resolution is static. Each function names its hook in its where-clause,
//! so a missing hook surfaces as that hook's diagnostic at the call site.

use super::hooks::{ConsImpl, HeadImpl, IsEmptyImpl, ListImpl, PredImpl, SuccImpl, TailImpl};
use super::tag::TagOf;

/// Successor of `x`.
#[inline(always)]
pub fn succ<X: TagOf>(x: X) -> <X::Tag as SuccImpl<X>>::Output
where
    X::Tag: SuccImpl<X>,
{
    <X::Tag as SuccImpl<X>>::apply(x)
}

/// Predecessor of `x`.
#[inline(always)]
pub fn pred<X: TagOf>(x: X) -> <X::Tag as PredImpl<X>>::Output
where
    X::Tag: PredImpl<X>,
{
    <X::Tag as PredImpl<X>>::apply(x)
}

/// Successor of `x`, or `None` when it is not representable.
#[inline(always)]
pub fn checked_succ<X: TagOf>(x: X) -> Option<<X::Tag as SuccImpl<X>>::Output>
where
    X::Tag: SuccImpl<X>,
{
    <X::Tag as SuccImpl<X>>::checked(x)
}

/// Predecessor of `x`, or `None` when it is not representable.
#[inline(always)]
pub fn checked_pred<X: TagOf>(x: X) -> Option<<X::Tag as PredImpl<X>>::Output>
where
    X::Tag: PredImpl<X>,
{
    <X::Tag as PredImpl<X>>::checked(x)
}

/// First element of `xs`.
#[inline(always)]
pub fn head<Xs: TagOf>(xs: Xs) -> <Xs::Tag as HeadImpl<Xs>>::Output
where
    Xs::Tag: HeadImpl<Xs>,
{
    <Xs::Tag as HeadImpl<Xs>>::apply(xs)
}

/// `xs` without its first element.
#[inline(always)]
pub fn tail<Xs: TagOf>(xs: Xs) -> <Xs::Tag as TailImpl<Xs>>::Output
where
    Xs::Tag: TailImpl<Xs>,
{
    <Xs::Tag as TailImpl<Xs>>::apply(xs)
}

/// Whether `xs` has no elements.
#[inline(always)]
pub fn is_empty<Xs: TagOf>(xs: &Xs) -> <Xs::Tag as IsEmptyImpl<Xs>>::Output
where
    Xs::Tag: IsEmptyImpl<Xs>,
{
    <Xs::Tag as IsEmptyImpl<Xs>>::apply(xs)
}

/// `xs` with `x` in front.
#[inline(always)]
pub fn cons<X, Xs: TagOf>(x: X, xs: Xs) -> <Xs::Tag as ConsImpl<X, Xs>>::Output
where
    Xs::Tag: ConsImpl<X, Xs>,
{
    <Xs::Tag as ConsImpl<X, Xs>>::apply(x, xs)
}

/// The empty sequence of tag `T`.
#[inline(always)]
pub fn nil<T: ListImpl>() -> T::Nil {
    T::nil()
}

/// Equality across types: `Type<A>` against `Type<B>`, or any pair with a
/// `PartialEq` impl.
#[inline(always)]
pub fn equal<A, B>(a: A, b: B) -> bool
where
    A: PartialEq<B>,
{
    a == b
}
