//! Enumerable: values with a successor and a predecessor.

use crate::dispatch::hooks::{PredImpl, SuccImpl};
use crate::dispatch::tag::TagOf;

/// `E` models Enumerable iff its tag implements both `SuccImpl<E>` and
/// `PredImpl<E>`. A type with only one of the two is not Enumerable, though
/// the one hook it has stays callable through the free functions.
pub trait Enumerable: TagOf + Sized {
    type Succ;
    type Pred;

    fn succ(self) -> Self::Succ;
    fn pred(self) -> Self::Pred;

    fn checked_succ(self) -> Option<Self::Succ>;
    fn checked_pred(self) -> Option<Self::Pred>;
}

impl<E> Enumerable for E
where
    E: TagOf,
    E::Tag: SuccImpl<E> + PredImpl<E>,
{
    type Succ = <E::Tag as SuccImpl<E>>::Output;
    type Pred = <E::Tag as PredImpl<E>>::Output;

    #[inline(always)]
    fn succ(self) -> Self::Succ {
        <E::Tag as SuccImpl<E>>::apply(self)
    }

    #[inline(always)]
    fn pred(self) -> Self::Pred {
        <E::Tag as PredImpl<E>>::apply(self)
    }

    #[inline(always)]
    fn checked_succ(self) -> Option<Self::Succ> {
        <E::Tag as SuccImpl<E>>::checked(self)
    }

    #[inline(always)]
    fn checked_pred(self) -> Option<Self::Pred> {
        <E::Tag as PredImpl<E>>::checked(self)
    }
}
