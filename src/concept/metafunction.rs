//! Metafunction: callables with a nested type-level applicator.

use crate::metafunction::wrap::{Metafn, TemplateFn};

/// Marker for values that are metafunctions.
///
/// A metafunction can be called with type tags (see
/// [`Invoke`](crate::Invoke)) and also implements
/// [`Template`](crate::Template), so it can be used wherever a template is
/// expected. References to a metafunction are metafunctions.
pub trait Metafunction {}

impl<F> Metafunction for Metafn<F> {}

impl<F> Metafunction for TemplateFn<F> {}

impl<M: Metafunction + ?Sized> Metafunction for &M {}
