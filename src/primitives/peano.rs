//! Peano naturals.
//!
//! `Z` is zero and `S<N>` is the successor of `N`. Both carry their
//! structure in the value (`S(S(Z))`), so succ/pred change the type *and*
//! the value together.

/// Type-level natural with its value-level face.
pub trait Nat: Copy + Default + 'static {
    const VALUE: usize;
}

/// Zero (base case)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Z;

/// Successor (S<N> = N + 1)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct S<N>(pub N);

impl Nat for Z {
    const VALUE: usize = 0;
}

impl<N: Nat> Nat for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

// Generate N0..N16 using proc-macro
macros::peano!(16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_count() {
        assert_eq!(<N0 as Nat>::VALUE, 0);
        assert_eq!(<N3 as Nat>::VALUE, 3);
        assert_eq!(<N16 as Nat>::VALUE, 16);
        assert_eq!(N2, S(S(Z)));
    }
}
