//! Peano naturals.
//!
//! `succ` is defined everywhere; `pred` only on `S<N>`. So every non-zero
//! natural is Enumerable and `Z` is not.

use crate::dispatch::hooks::{PredImpl, SuccImpl};
use crate::dispatch::tag::TagOf;
use crate::primitives::peano::{Nat, S, Z};
use crate::types::TypeOf;

/// Tag shared by `Z` and every `S<N>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeanoTag;

impl TagOf for Z {
    type Tag = PeanoTag;
}

impl<N: Nat> TagOf for S<N> {
    type Tag = PeanoTag;
}

impl TypeOf for Z {
    type Of = Self;
}

impl<N> TypeOf for S<N> {
    type Of = Self;
}

impl<N: Nat> SuccImpl<N> for PeanoTag {
    type Output = S<N>;

    #[inline(always)]
    fn apply(n: N) -> S<N> {
        S(n)
    }
}

impl<N: Nat> PredImpl<S<N>> for PeanoTag {
    type Output = N;

    #[inline(always)]
    fn apply(n: S<N>) -> N {
        n.0
    }
}
