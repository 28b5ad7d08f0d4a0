//! Tags: the key every hook is looked up by.

use crate::primitives::bool::{True, False};
use crate::types::Type;

/// Associates a value type with the tag its operations dispatch on.
///
/// Several representations may share a tag: every tuple arity dispatches
/// on `TupleTag`, every Peano natural on `PeanoTag`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no dispatch tag",
    label = "`{Self}` does not implement `TagOf`",
    note = "derive `Tagged` (optionally with `#[tag(SomeTag)]`) or implement `TagOf` by hand"
)]
pub trait TagOf {
    type Tag;
}

/// The tag of `X`.
pub type Tag<X> = <X as TagOf>::Tag;

impl<X: TagOf + ?Sized> TagOf for &X {
    type Tag = X::Tag;
}

impl<X: TagOf + ?Sized> TagOf for &mut X {
    type Tag = X::Tag;
}

/// Tag shared by every `Type<T>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeTag;

impl<T: ?Sized> TagOf for Type<T> {
    type Tag = TypeTag;
}

/// Tag shared by `True` and `False`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolTag;

impl TagOf for True {
    type Tag = BoolTag;
}

impl TagOf for False {
    type Tag = BoolTag;
}
