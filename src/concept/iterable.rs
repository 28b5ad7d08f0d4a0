//! Iterable: sequences that can be taken apart from the front.

use crate::dispatch::hooks::{HeadImpl, IsEmptyImpl, TailImpl};
use crate::dispatch::tag::TagOf;

/// `Xs` models Iterable iff its tag implements `HeadImpl<Xs>`,
/// `TailImpl<Xs>` and `IsEmptyImpl<Xs>`.
///
/// For heterogeneous sequences the empty value has no head and no tail, so
/// `()` and `HNil` answer `is_empty` but do not model Iterable.
pub trait Iterable: TagOf + Sized {
    type Head;
    type Tail;
    type IsEmpty;

    fn head(self) -> Self::Head;
    fn tail(self) -> Self::Tail;
    fn is_empty(&self) -> Self::IsEmpty;
}

impl<Xs> Iterable for Xs
where
    Xs: TagOf,
    Xs::Tag: HeadImpl<Xs> + TailImpl<Xs> + IsEmptyImpl<Xs>,
{
    type Head = <Xs::Tag as HeadImpl<Xs>>::Output;
    type Tail = <Xs::Tag as TailImpl<Xs>>::Output;
    type IsEmpty = <Xs::Tag as IsEmptyImpl<Xs>>::Output;

    #[inline(always)]
    fn head(self) -> Self::Head {
        <Xs::Tag as HeadImpl<Xs>>::apply(self)
    }

    #[inline(always)]
    fn tail(self) -> Self::Tail {
        <Xs::Tag as TailImpl<Xs>>::apply(self)
    }

    #[inline(always)]
    fn is_empty(&self) -> Self::IsEmpty {
        <Xs::Tag as IsEmptyImpl<Xs>>::apply(self)
    }
}
