//! Hook implementations for the crate's own value types and primitives.
//!
//! - `integer.rs`: every primitive integer is Enumerable under `IntegerTag`.
//! - `peano.rs`: Peano naturals under `PeanoTag`; `Z` has no predecessor.

pub mod integer;
pub mod peano;
