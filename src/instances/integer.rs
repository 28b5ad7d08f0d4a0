//! Primitive integers.
//!
//! `succ(x) == x + 1` and `pred(x) == x - 1` with the usual integer
//! semantics: overflow panics in debug builds. The `checked` forms return
//! `None` at `MAX` and `MIN` in every profile.

use crate::dispatch::hooks::{PredImpl, SuccImpl};
use crate::dispatch::tag::TagOf;

/// Tag shared by all primitive integer types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerTag;

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TagOf for $ty {
                type Tag = IntegerTag;
            }

            impl SuccImpl<$ty> for IntegerTag {
                type Output = $ty;

                #[inline(always)]
                fn apply(x: $ty) -> $ty {
                    x + 1
                }

                #[inline(always)]
                fn checked(x: $ty) -> Option<$ty> {
                    x.checked_add(1)
                }
            }

            impl PredImpl<$ty> for IntegerTag {
                type Output = $ty;

                #[inline(always)]
                fn apply(x: $ty) -> $ty {
                    x - 1
                }

                #[inline(always)]
                fn checked(x: $ty) -> Option<$ty> {
                    x.checked_sub(1)
                }
            }
        )*
    };
}

impl_integer!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
);
