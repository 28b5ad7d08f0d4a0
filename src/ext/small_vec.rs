//! `SmallVec<A>` as a List, following the `VecDeque` adapter's contract.

use core::marker::PhantomData;

use smallvec::{Array, SmallVec};

use crate::dispatch::hooks::{ConsImpl, HeadImpl, IsEmptyImpl, ListImpl, TailImpl};
use crate::dispatch::tag::TagOf;
use crate::types::TypeOf;

/// Tag for `SmallVec<A>`.
pub struct SmallVecTag<A>(PhantomData<fn() -> A>);

impl<A: Array> TagOf for SmallVec<A> {
    type Tag = SmallVecTag<A>;
}

impl<A: Array> TypeOf for SmallVec<A> {
    type Of = Self;
}

impl<A: Array> ListImpl for SmallVecTag<A> {
    type Nil = SmallVec<A>;

    #[inline(always)]
    fn nil() -> SmallVec<A> {
        SmallVec::new()
    }
}

impl<A: Array> ConsImpl<A::Item, SmallVec<A>> for SmallVecTag<A> {
    type Output = SmallVec<A>;

    fn apply(x: A::Item, mut xs: SmallVec<A>) -> SmallVec<A> {
        xs.insert(0, x);
        xs
    }
}

impl<'a, A: Array> ConsImpl<A::Item, &'a SmallVec<A>> for SmallVecTag<A>
where
    A::Item: Clone,
{
    type Output = SmallVec<A>;

    fn apply(x: A::Item, xs: &'a SmallVec<A>) -> SmallVec<A> {
        core::iter::once(x).chain(xs.iter().cloned()).collect()
    }
}

impl<A: Array> HeadImpl<SmallVec<A>> for SmallVecTag<A> {
    type Output = Option<A::Item>;

    fn apply(xs: SmallVec<A>) -> Option<A::Item> {
        xs.into_iter().next()
    }
}

impl<'a, A: Array> HeadImpl<&'a SmallVec<A>> for SmallVecTag<A> {
    type Output = Option<&'a A::Item>;

    fn apply(xs: &'a SmallVec<A>) -> Option<&'a A::Item> {
        xs.first()
    }
}

impl<A: Array> TailImpl<SmallVec<A>> for SmallVecTag<A> {
    type Output = SmallVec<A>;

    fn apply(mut xs: SmallVec<A>) -> SmallVec<A> {
        if !xs.is_empty() {
            xs.remove(0);
        }
        xs
    }
}

impl<'a, A: Array> TailImpl<&'a SmallVec<A>> for SmallVecTag<A>
where
    A::Item: Clone,
{
    type Output = SmallVec<A>;

    fn apply(xs: &'a SmallVec<A>) -> SmallVec<A> {
        xs.iter().skip(1).cloned().collect()
    }
}

impl<A: Array> IsEmptyImpl<SmallVec<A>> for SmallVecTag<A> {
    type Output = bool;

    fn apply(xs: &SmallVec<A>) -> bool {
        xs.is_empty()
    }
}

impl<'a, A: Array> IsEmptyImpl<&'a SmallVec<A>> for SmallVecTag<A> {
    type Output = bool;

    fn apply(xs: &&'a SmallVec<A>) -> bool {
        xs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cons, head, nil, tail};

    type Small = SmallVec<[u16; 4]>;

    #[test]
    fn test_round_trip() {
        let xs: Small = smallvec::smallvec![5, 6];
        let ys = cons(4, &xs);
        assert_eq!(ys.as_slice(), &[4, 5, 6]);
        assert_eq!(tail(&ys), xs);
        assert_eq!(head(&ys), Some(&4));
    }

    #[test]
    fn test_nil_then_cons() {
        let built = cons(1, cons(2, nil::<SmallVecTag<[u16; 4]>>()));
        assert_eq!(built.as_slice(), &[1, 2]);
    }
}
