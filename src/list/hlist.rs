use crate::dispatch::hooks::{ConsImpl, HeadImpl, IsEmptyImpl, ListImpl, TailImpl};
use crate::dispatch::tag::TagOf;
use crate::primitives::bool::{False, True};
use crate::types::TypeOf;

/// Heterogeneous list with its length known to the type.
pub trait HList: Sized {
    const LEN: usize;
}

/// The empty list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HNil;

/// `H` in front of the list `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HCons<H, T>(pub H, pub T);

impl HList for HNil {
    const LEN: usize = 0;
}

impl<H, T: HList> HList for HCons<H, T> {
    const LEN: usize = 1 + T::LEN;
}

/// Build an `HCons` chain from a comma-separated list of expressions.
#[macro_export]
macro_rules! hlist {
    () => { $crate::list::HNil };
    ($head:expr $(, $rest:expr)* $(,)?) => {
        $crate::list::HCons($head, $crate::hlist!($($rest),*))
    };
}

/// Tag shared by `HNil` and every `HCons`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HListTag;

impl TagOf for HNil {
    type Tag = HListTag;
}

impl<H, T: HList> TagOf for HCons<H, T> {
    type Tag = HListTag;
}

impl TypeOf for HNil {
    type Of = Self;
}

impl<H, T> TypeOf for HCons<H, T> {
    type Of = Self;
}

impl ListImpl for HListTag {
    type Nil = HNil;

    #[inline(always)]
    fn nil() -> HNil {
        HNil
    }
}

impl<X, Xs: HList> ConsImpl<X, Xs> for HListTag {
    type Output = HCons<X, Xs>;

    #[inline(always)]
    fn apply(x: X, xs: Xs) -> HCons<X, Xs> {
        HCons(x, xs)
    }
}

impl<H, T: HList> HeadImpl<HCons<H, T>> for HListTag {
    type Output = H;

    #[inline(always)]
    fn apply(xs: HCons<H, T>) -> H {
        xs.0
    }
}

impl<H, T: HList> TailImpl<HCons<H, T>> for HListTag {
    type Output = T;

    #[inline(always)]
    fn apply(xs: HCons<H, T>) -> T {
        xs.1
    }
}

impl IsEmptyImpl<HNil> for HListTag {
    type Output = True;

    #[inline(always)]
    fn apply(_xs: &HNil) -> True {
        True
    }
}

impl<H, T: HList> IsEmptyImpl<HCons<H, T>> for HListTag {
    type Output = False;

    #[inline(always)]
    fn apply(_xs: &HCons<H, T>) -> False {
        False
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cons, head, is_empty, models, nil, tail, Iterable, List};

    #[test]
    fn test_len_is_static() {
        type Three = HCons<u8, HCons<&'static str, HCons<char, HNil>>>;
        assert_eq!(<Three as HList>::LEN, 3);
        assert_eq!(<HNil as HList>::LEN, 0);
    }

    #[test]
    fn test_tail_of_cons() {
        let xs = hlist!['a', 2_u32];
        assert_eq!(tail(cons(0.5_f64, xs)), xs);
        assert_eq!(head(cons(0.5_f64, xs)), 0.5);
    }

    #[test]
    fn test_is_empty_is_type_level() {
        assert_eq!(is_empty(&nil::<HListTag>()), True);
        assert_eq!(is_empty(&hlist![()]), False);
    }

    #[test]
    fn test_concepts() {
        assert!(models!(HNil: List));
        assert!(!models!(HNil: Iterable));
        assert!(models!(HCons<u8, HNil>: Iterable));
        assert!(models!(HCons<u8, HNil>: List));
    }
}
