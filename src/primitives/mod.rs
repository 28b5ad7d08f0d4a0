//! # Layer 0: Primitives
//!
//! Basic building blocks for the concept system:
//! - `bool.rs`: type-level booleans (True/False) answered by `is_empty`.
//! - `peano.rs`: Peano naturals (Z, S<N>) and the `N0..N16` aliases.

pub mod bool;
pub mod peano;

// Re-export key types at this level
pub use bool::{Bool, True, False};
pub use peano::{Nat, Z, S};
