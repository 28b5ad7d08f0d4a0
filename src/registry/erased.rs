//! Erased hook tables.
//!
//! Each registered type gets one heap-allocated entry per concept, built
//! from its static hooks. Unregistered types get the shared [`UNSUPPORTED`]
//! entry, whose every method fails with [`DispatchError::Unsupported`].
//! "Is this the default" is then an address comparison against that one
//! static.

use core::any::{type_name, Any, TypeId};
use core::marker::PhantomData;

use super::error::{DispatchError, Hook};
use crate::concept::{Enumerable, List};
use crate::dispatch::hooks::IsEmptyImpl;

/// Boxed result of an erased call.
pub type Erased = Box<dyn Any + Send>;

/// Enumerable hooks behind `dyn Any`.
pub trait ErasedEnumerable: Send + Sync {
    /// Name of the type the entry serves.
    fn type_name(&self) -> &'static str;
    fn succ(&self, x: &dyn Any) -> Result<Erased, DispatchError>;
    fn pred(&self, x: &dyn Any) -> Result<Erased, DispatchError>;
}

/// List hooks behind `dyn Any`.
pub trait ErasedList: Send + Sync {
    fn type_name(&self) -> &'static str;
    /// Empty list; `id` is the type the caller looked up.
    fn nil(&self, id: TypeId) -> Result<Erased, DispatchError>;
    fn is_empty(&self, xs: &dyn Any) -> Result<bool, DispatchError>;
}

// =============================================================================
// Default sentinel
// =============================================================================

/// The shared default entry.
pub struct Unsupported {
    name: &'static str,
}

/// The one default instance every unregistered lookup returns.
pub static UNSUPPORTED: Unsupported = Unsupported { name: "<unsupported>" };


impl ErasedEnumerable for Unsupported {
    fn type_name(&self) -> &'static str {
        self.name
    }

    fn succ(&self, x: &dyn Any) -> Result<Erased, DispatchError> {
        Err(DispatchError::unsupported(Hook::Succ, Any::type_id(x)))
    }

    fn pred(&self, x: &dyn Any) -> Result<Erased, DispatchError> {
        Err(DispatchError::unsupported(Hook::Pred, Any::type_id(x)))
    }
}

impl ErasedList for Unsupported {
    fn type_name(&self) -> &'static str {
        self.name
    }

    fn nil(&self, id: TypeId) -> Result<Erased, DispatchError> {
        Err(DispatchError::unsupported(Hook::Nil, id))
    }

    fn is_empty(&self, xs: &dyn Any) -> Result<bool, DispatchError> {
        Err(DispatchError::unsupported(Hook::IsEmpty, Any::type_id(xs)))
    }
}

// =============================================================================
// Entries built from static hooks
// =============================================================================

pub(crate) struct EnumerableEntry<E> {
    name: &'static str,
    _marker: PhantomData<fn() -> E>,
}

impl<E: 'static> EnumerableEntry<E> {
    pub(crate) fn new() -> Self {
        EnumerableEntry { name: type_name::<E>(), _marker: PhantomData }
    }

    fn downcast<'a>(&self, hook: Hook, x: &'a dyn Any) -> Result<&'a E, DispatchError> {
        x.downcast_ref::<E>()
            .ok_or(DispatchError::TypeMismatch { hook, expected: self.name })
    }
}

impl<E> ErasedEnumerable for EnumerableEntry<E>
where
    E: Enumerable + Clone + 'static,
    E::Succ: Send + 'static,
    E::Pred: Send + 'static,
{
    fn type_name(&self) -> &'static str {
        self.name
    }

    fn succ(&self, x: &dyn Any) -> Result<Erased, DispatchError> {
        let e = self.downcast(Hook::Succ, x)?;
        match e.clone().checked_succ() {
            Some(next) => Ok(Box::new(next)),
            None => Err(DispatchError::Overflow { hook: Hook::Succ, type_name: self.name }),
        }
    }

    fn pred(&self, x: &dyn Any) -> Result<Erased, DispatchError> {
        let e = self.downcast(Hook::Pred, x)?;
        match e.clone().checked_pred() {
            Some(prev) => Ok(Box::new(prev)),
            None => Err(DispatchError::Overflow { hook: Hook::Pred, type_name: self.name }),
        }
    }
}

pub(crate) struct ListEntry<L> {
    name: &'static str,
    _marker: PhantomData<fn() -> L>,
}

impl<L: 'static> ListEntry<L> {
    pub(crate) fn new() -> Self {
        ListEntry { name: type_name::<L>(), _marker: PhantomData }
    }
}

impl<L> ErasedList for ListEntry<L>
where
    L: List + 'static,
    L::Nil: Send + 'static,
    L::Tag: IsEmptyImpl<L>,
    <L::Tag as IsEmptyImpl<L>>::Output: Into<bool>,
{
    fn type_name(&self) -> &'static str {
        self.name
    }

    fn nil(&self, _id: TypeId) -> Result<Erased, DispatchError> {
        Ok(Box::new(L::nil()))
    }

    fn is_empty(&self, xs: &dyn Any) -> Result<bool, DispatchError> {
        let xs = xs
            .downcast_ref::<L>()
            .ok_or(DispatchError::TypeMismatch { hook: Hook::IsEmpty, expected: self.name })?;
        Ok(<L::Tag as IsEmptyImpl<L>>::apply(xs).into())
    }
}
