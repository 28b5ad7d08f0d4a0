//! `VecDeque<T>` as a List.
//!
//! Hooks are provided for owned deques and for `&VecDeque<T>`. The owned
//! forms reuse the moved buffer; the borrowed forms copy, so the caller's
//! deque is left as it was.
//!
//! `tail` of an empty deque is an empty deque. `head` yields `Option`.

use alloc::collections::VecDeque;
use core::marker::PhantomData;

use crate::dispatch::hooks::{ConsImpl, HeadImpl, IsEmptyImpl, ListImpl, TailImpl};
use crate::dispatch::tag::TagOf;

/// Tag for `VecDeque<T>`; carries the element type so `nil` can name it.
pub struct DequeTag<T>(PhantomData<fn() -> T>);

impl<T> TagOf for VecDeque<T> {
    type Tag = DequeTag<T>;
}

impl<T> ListImpl for DequeTag<T> {
    type Nil = VecDeque<T>;

    #[inline(always)]
    fn nil() -> VecDeque<T> {
        VecDeque::new()
    }
}

impl<T> ConsImpl<T, VecDeque<T>> for DequeTag<T> {
    type Output = VecDeque<T>;

    fn apply(x: T, mut xs: VecDeque<T>) -> VecDeque<T> {
        xs.push_front(x);
        xs
    }
}

impl<'a, T: Clone> ConsImpl<T, &'a VecDeque<T>> for DequeTag<T> {
    type Output = VecDeque<T>;

    fn apply(x: T, xs: &'a VecDeque<T>) -> VecDeque<T> {
        let mut out = VecDeque::with_capacity(xs.len() + 1);
        out.push_back(x);
        out.extend(xs.iter().cloned());
        out
    }
}

impl<T> HeadImpl<VecDeque<T>> for DequeTag<T> {
    type Output = Option<T>;

    fn apply(mut xs: VecDeque<T>) -> Option<T> {
        xs.pop_front()
    }
}

impl<'a, T> HeadImpl<&'a VecDeque<T>> for DequeTag<T> {
    type Output = Option<&'a T>;

    fn apply(xs: &'a VecDeque<T>) -> Option<&'a T> {
        xs.front()
    }
}

impl<T> TailImpl<VecDeque<T>> for DequeTag<T> {
    type Output = VecDeque<T>;

    fn apply(mut xs: VecDeque<T>) -> VecDeque<T> {
        xs.pop_front();
        xs
    }
}

impl<'a, T: Clone> TailImpl<&'a VecDeque<T>> for DequeTag<T> {
    type Output = VecDeque<T>;

    fn apply(xs: &'a VecDeque<T>) -> VecDeque<T> {
        xs.iter().skip(1).cloned().collect()
    }
}

impl<T> IsEmptyImpl<VecDeque<T>> for DequeTag<T> {
    type Output = bool;

    fn apply(xs: &VecDeque<T>) -> bool {
        xs.is_empty()
    }
}

impl<'a, T> IsEmptyImpl<&'a VecDeque<T>> for DequeTag<T> {
    type Output = bool;

    fn apply(xs: &&'a VecDeque<T>) -> bool {
        xs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cons, head, is_empty, models, nil, tail, Iterable, List};

    #[test]
    fn test_borrowed_cons_leaves_input() {
        let xs: VecDeque<u8> = [2, 3].into_iter().collect();
        let ys = cons(1, &xs);
        assert_eq!(xs, [2, 3]);
        assert_eq!(ys, [1, 2, 3]);
        assert_eq!(tail(&ys), xs);
    }

    #[test]
    fn test_owned_round_trip() {
        let xs: VecDeque<char> = "bc".chars().collect();
        assert_eq!(tail(cons('a', xs.clone())), xs);
    }

    #[test]
    fn test_empty_edges() {
        let empty = nil::<DequeTag<i32>>();
        assert!(is_empty(&empty));
        assert_eq!(head(&empty), None);
        assert!(tail(empty).is_empty());
    }

    #[test]
    fn test_concepts() {
        assert!(models!(VecDeque<u8>: Iterable));
        assert!(models!(VecDeque<u8>: List));
        assert!(models!(&'static VecDeque<u8>: Iterable));
    }
}
