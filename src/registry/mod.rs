//! Erased dispatch registry (`std` only).
//!
//! The static layer resolves hooks at compile time. This module covers the
//! case where the value's type is only known at run time: hooks are
//! registered per type into a [`Registry`], looked up by [`TypeId`], and
//! called through `dyn Any`.
//!
//! A lookup for an unregistered type returns the shared default entry
//! ([`erased::UNSUPPORTED`]); calling through it yields
//! [`DispatchError::Unsupported`].
//!
//! ```
//! use std::any::Any;
//! use tola_concepts::registry::{Hook, Registry};
//!
//! let registry = Registry::builder()
//!     .enumerable::<i32>()
//!     .list::<()>()
//!     .build();
//!
//! let x: Box<dyn Any> = Box::new(41_i32);
//! let next = registry.succ(x.as_ref()).unwrap();
//! assert_eq!(next.downcast_ref::<i32>(), Some(&42));
//!
//! assert!(registry.supports_type::<i32>(Hook::Succ));
//! assert!(!registry.supports_type::<String>(Hook::Succ));
//! assert!(registry.succ(&String::new()).is_err());
//! ```

pub mod erased;
pub mod error;

use core::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use once_cell::sync::OnceCell;
use tracing::{debug, trace};

use crate::concept::{Enumerable, List};
use crate::dispatch::hooks::IsEmptyImpl;

pub use erased::{Erased, ErasedEnumerable, ErasedList, Unsupported, UNSUPPORTED};
pub use error::{DispatchError, Hook};

static GLOBAL: OnceCell<Registry> = OnceCell::new();

/// Per-type erased hook tables.
#[derive(Default)]
pub struct Registry {
    enumerable: HashMap<TypeId, Box<dyn ErasedEnumerable>>,
    list: HashMap<TypeId, Box<dyn ErasedList>>,
}

impl core::fmt::Debug for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut enumerable: Vec<_> = self.enumerable.values().map(|e| e.type_name()).collect();
        let mut list: Vec<_> = self.list.values().map(|e| e.type_name()).collect();
        enumerable.sort_unstable();
        list.sort_unstable();
        f.debug_struct("Registry")
            .field("enumerable", &enumerable)
            .field("list", &list)
            .finish()
    }
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The installed process-wide registry.
    pub fn global() -> Result<&'static Registry, DispatchError> {
        GLOBAL.get().ok_or(DispatchError::NotInstalled)
    }

    /// Enumerable entry for `id`, or the shared default.
    pub fn enumerable_hooks(&self, id: TypeId) -> &dyn ErasedEnumerable {
        match self.enumerable.get(&id) {
            Some(entry) => entry.as_ref(),
            None => {
                trace!(?id, "no Enumerable entry, using default");
                &UNSUPPORTED
            }
        }
    }

    /// List entry for `id`, or the shared default.
    pub fn list_hooks(&self, id: TypeId) -> &dyn ErasedList {
        match self.list.get(&id) {
            Some(entry) => entry.as_ref(),
            None => {
                trace!(?id, "no List entry, using default");
                &UNSUPPORTED
            }
        }
    }

    /// Whether the Enumerable lookup for `id` lands on the shared default.
    pub fn is_default_enumerable(&self, id: TypeId) -> bool {
        core::ptr::addr_eq(
            self.enumerable_hooks(id) as *const dyn ErasedEnumerable,
            &UNSUPPORTED as *const Unsupported,
        )
    }

    /// Whether the List lookup for `id` lands on the shared default.
    pub fn is_default_list(&self, id: TypeId) -> bool {
        core::ptr::addr_eq(
            self.list_hooks(id) as *const dyn ErasedList,
            &UNSUPPORTED as *const Unsupported,
        )
    }

    pub fn supports(&self, id: TypeId, hook: Hook) -> bool {
        match hook {
            Hook::Succ | Hook::Pred => !self.is_default_enumerable(id),
            Hook::Nil | Hook::IsEmpty => !self.is_default_list(id),
        }
    }

    pub fn supports_type<T: Any>(&self, hook: Hook) -> bool {
        self.supports(TypeId::of::<T>(), hook)
    }

    pub fn succ(&self, x: &dyn Any) -> Result<Erased, DispatchError> {
        self.enumerable_hooks(Any::type_id(x)).succ(x)
    }

    pub fn pred(&self, x: &dyn Any) -> Result<Erased, DispatchError> {
        self.enumerable_hooks(Any::type_id(x)).pred(x)
    }

    /// Empty list of the type identified by `id`.
    pub fn nil(&self, id: TypeId) -> Result<Erased, DispatchError> {
        self.list_hooks(id).nil(id)
    }

    pub fn is_empty(&self, xs: &dyn Any) -> Result<bool, DispatchError> {
        self.list_hooks(Any::type_id(xs)).is_empty(xs)
    }

    /// Number of distinct types with at least one registered entry.
    pub fn len(&self) -> usize {
        let list_only = self
            .list
            .keys()
            .filter(|id| !self.enumerable.contains_key(id))
            .count();
        self.enumerable.len() + list_only
    }

    pub fn is_empty_registry(&self) -> bool {
        self.enumerable.is_empty() && self.list.is_empty()
    }
}

/// Collects entries, then builds or installs a [`Registry`].
///
/// Registering the same type twice keeps the last entry.
#[derive(Default)]
pub struct RegistryBuilder {
    inner: Registry,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the Enumerable hooks of `E`.
    pub fn enumerable<E>(mut self) -> Self
    where
        E: Enumerable + Clone + 'static,
        E::Succ: Send + 'static,
        E::Pred: Send + 'static,
    {
        debug!(type_name = type_name::<E>(), "registering Enumerable hooks");
        self.inner
            .enumerable
            .insert(TypeId::of::<E>(), Box::new(erased::EnumerableEntry::<E>::new()));
        self
    }

    /// Register the List hooks of `L`.
    pub fn list<L>(mut self) -> Self
    where
        L: List + 'static,
        L::Nil: Send + 'static,
        L::Tag: IsEmptyImpl<L>,
        <L::Tag as IsEmptyImpl<L>>::Output: Into<bool>,
    {
        debug!(type_name = type_name::<L>(), "registering List hooks");
        self.inner
            .list
            .insert(TypeId::of::<L>(), Box::new(erased::ListEntry::<L>::new()));
        self
    }

    pub fn build(self) -> Registry {
        self.inner
    }

    /// Install as the process-wide registry. Fails if one is already set.
    pub fn install(self) -> Result<&'static Registry, DispatchError> {
        GLOBAL
            .set(self.build())
            .map_err(|_| DispatchError::AlreadyInstalled)?;
        let installed = Registry::global()?;
        debug!(types = installed.len(), "installed global registry");
        Ok(installed)
    }
}
