//! User-facing derives.

pub mod tagged;
pub mod type_of;
