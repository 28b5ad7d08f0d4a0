//! Tuples as heterogeneous deques.
//!
//! Every arity shares `TupleTag`. `tail` and `cons` rebuild a fresh tuple of
//! the neighbouring arity; `is_empty` is answered at the type level.
//!
//! ```
//! use tola_concepts::{cons, head, is_empty, nil, tail, True, False};
//! use tola_concepts::ext::TupleTag;
//!
//! let xs = cons('a', cons(2_u8, nil::<TupleTag>()));
//! assert_eq!(xs, ('a', 2_u8));
//! assert_eq!(head(xs), 'a');
//! assert_eq!(tail(xs), (2_u8,));
//! assert_eq!(is_empty(&()), True);
//! assert_eq!(is_empty(&xs), False);
//! ```

use crate::dispatch::hooks::{ConsImpl, HeadImpl, IsEmptyImpl, ListImpl, TailImpl};
use crate::dispatch::tag::TagOf;
use crate::primitives::bool::{False, True};

/// Tag shared by tuples of every arity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TupleTag;

impl ListImpl for TupleTag {
    type Nil = ();

    #[inline(always)]
    fn nil() -> Self::Nil {}
}

impl TagOf for () {
    type Tag = TupleTag;
}

impl IsEmptyImpl<()> for TupleTag {
    type Output = True;

    #[inline(always)]
    fn apply(_xs: &()) -> True {
        True
    }
}

// Non-empty arities: tag, is_empty, head, tail.
macro_rules! impl_tuple_nonempty {
    ($H:ident $(, $T:ident)*) => {
        impl<$H, $($T),*> TagOf for ($H, $($T,)*) {
            type Tag = TupleTag;
        }

        impl<$H, $($T),*> IsEmptyImpl<($H, $($T,)*)> for TupleTag {
            type Output = False;

            #[inline(always)]
            fn apply(_xs: &($H, $($T,)*)) -> False {
                False
            }
        }

        impl<$H, $($T),*> HeadImpl<($H, $($T,)*)> for TupleTag {
            type Output = $H;

            #[inline(always)]
            fn apply(xs: ($H, $($T,)*)) -> $H {
                xs.0
            }
        }

        impl<$H, $($T),*> TailImpl<($H, $($T,)*)> for TupleTag {
            type Output = ($($T,)*);

            #[inline(always)]
            #[allow(non_snake_case)]
            fn apply(xs: ($H, $($T,)*)) -> ($($T,)*) {
                let (_, $($T,)*) = xs;
                ($($T,)*)
            }
        }
    };
}

impl_tuple_nonempty!(A);
impl_tuple_nonempty!(A, B);
impl_tuple_nonempty!(A, B, C);
impl_tuple_nonempty!(A, B, C, D);
impl_tuple_nonempty!(A, B, C, D, E);
impl_tuple_nonempty!(A, B, C, D, E, F);
impl_tuple_nonempty!(A, B, C, D, E, F, G);
impl_tuple_nonempty!(A, B, C, D, E, F, G, H);
impl_tuple_nonempty!(A, B, C, D, E, F, G, H, I);
impl_tuple_nonempty!(A, B, C, D, E, F, G, H, I, J);
impl_tuple_nonempty!(A, B, C, D, E, F, G, H, I, J, K);
impl_tuple_nonempty!(A, B, C, D, E, F, G, H, I, J, K, L);

// cons onto arities 0..=11, so the result never exceeds 12.
macro_rules! impl_tuple_cons {
    ($($T:ident),*) => {
        impl<X, $($T),*> ConsImpl<X, ($($T,)*)> for TupleTag {
            type Output = (X, $($T,)*);

            #[inline(always)]
            #[allow(non_snake_case, clippy::unused_unit)]
            fn apply(x: X, xs: ($($T,)*)) -> (X, $($T,)*) {
                let ($($T,)*) = xs;
                (x, $($T,)*)
            }
        }
    };
}

impl_tuple_cons!();
impl_tuple_cons!(A);
impl_tuple_cons!(A, B);
impl_tuple_cons!(A, B, C);
impl_tuple_cons!(A, B, C, D);
impl_tuple_cons!(A, B, C, D, E);
impl_tuple_cons!(A, B, C, D, E, F);
impl_tuple_cons!(A, B, C, D, E, F, G);
impl_tuple_cons!(A, B, C, D, E, F, G, H);
impl_tuple_cons!(A, B, C, D, E, F, G, H, I);
impl_tuple_cons!(A, B, C, D, E, F, G, H, I, J);
impl_tuple_cons!(A, B, C, D, E, F, G, H, I, J, K);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cons, head, models, nil, tail, Iterable, List};

    #[test]
    fn test_tail_of_cons_is_input() {
        let xs = (1_u8, "b", 'c');
        assert_eq!(tail(cons(0_i64, xs)), xs);
    }

    #[test]
    fn test_rebuild_from_nil() {
        let built = cons(1_u8, cons(2_u16, cons(3_u32, nil::<TupleTag>())));
        assert_eq!(built, (1_u8, 2_u16, 3_u32));
        assert_eq!(head(tail(built)), 2_u16);
    }

    #[test]
    fn test_twelve_is_the_limit() {
        let xs = (0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
        let full = cons(-1, xs);
        assert_eq!(full.11, 10);
        assert_eq!(tail(full), xs);
    }

    #[test]
    fn test_concepts() {
        assert!(models!((): List));
        assert!(!models!((): Iterable));
        assert!(models!((u8,): Iterable));
        assert!(models!((u8, i8, char): List));
    }
}
