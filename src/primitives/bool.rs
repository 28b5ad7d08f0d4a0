//! Type-level booleans.
//!
//! `True` and `False` are zero-sized values as well as types, so a hook such
//! as `is_empty` on a heterogeneous list can answer with a type the compiler
//! already knows while still reading like a value at the call site.

/// Type-level boolean.
pub trait Bool: Copy + Default + 'static {
    const VALUE: bool;

    /// The runtime face of this boolean.
    #[inline(always)]
    fn value(self) -> bool {
        Self::VALUE
    }
}

/// Type-level True.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct True;

/// Type-level False.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;
}

impl Bool for False {
    const VALUE: bool = false;
}

impl From<True> for bool {
    fn from(_: True) -> bool {
        true
    }
}

impl From<False> for bool {
    fn from(_: False) -> bool {
        false
    }
}

impl PartialEq<bool> for True {
    fn eq(&self, other: &bool) -> bool {
        *other
    }
}

impl PartialEq<bool> for False {
    fn eq(&self, other: &bool) -> bool {
        !*other
    }
}
