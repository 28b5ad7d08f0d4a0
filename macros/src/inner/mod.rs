//! Internal macros used by the tola-concepts crate itself.

pub mod peano;
