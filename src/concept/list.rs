//! List: sequences that can be built with `nil` and `cons`.

use crate::dispatch::hooks::ListImpl;
use crate::dispatch::tag::TagOf;

/// `Xs` models List iff its tag has a [`ListImpl`] instance.
///
/// `cons` is keyed by element and sequence type (`ConsImpl<X, Xs>`) and
/// requires the instance as a supertrait, so a tag without `ListImpl`
/// cannot provide `cons` either.
pub trait List: TagOf {
    type Nil;

    fn nil() -> Self::Nil;
}

impl<Xs> List for Xs
where
    Xs: TagOf + ?Sized,
    Xs::Tag: ListImpl,
{
    type Nil = <Xs::Tag as ListImpl>::Nil;

    #[inline(always)]
    fn nil() -> Self::Nil {
        <Xs::Tag as ListImpl>::nil()
    }
}
