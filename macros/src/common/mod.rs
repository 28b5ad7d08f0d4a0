//! Shared helpers for derive expansion.

pub mod generics;
