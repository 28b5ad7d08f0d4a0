//! # Layer 1: Type tags
//!
//! A [`Type<T>`] is a zero-sized value standing for the type `T`. It lets
//! type-level results travel through ordinary value syntax: they can be
//! returned from functions, compared with `==`, and passed back into
//! metafunctions, while the type itself stays fully known to the compiler.
//!
//! ```
//! use tola_concepts::{type_c, decltype};
//!
//! assert_eq!(type_c::<u8>(), decltype(7_u8));
//! assert_ne!(type_c::<u8>(), type_c::<u16>());
//! ```

use core::any::TypeId;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

pub mod type_of;

pub use type_of::{TypeOf, Decltype, decltype};

/// Zero-sized value encoding the type `T`.
///
/// Covariant in `T`, `Send + Sync` regardless of `T`.
pub struct Type<T: ?Sized>(PhantomData<fn() -> PhantomData<T>>);

impl<T: ?Sized> Type<T> {
    /// The tag for `T`.
    #[inline(always)]
    pub const fn new() -> Self {
        Type(PhantomData)
    }

    /// Fully qualified name of `T`, as reported by the compiler.
    pub fn name(self) -> &'static str {
        core::any::type_name::<T>()
    }
}

/// Tag value for `T` (`type_c<T>`).
#[inline(always)]
pub const fn type_c<T: ?Sized>() -> Type<T> {
    Type::new()
}

// Manual impls so that no bound leaks onto `T`.

impl<T: ?Sized> Clone for Type<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Type<T> {}

impl<T: ?Sized> Default for Type<T> {
    fn default() -> Self {
        Type::new()
    }
}

impl<T: ?Sized> fmt::Debug for Type<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type<{}>", core::any::type_name::<T>())
    }
}

/// Two tags are equal iff they encode the same type.
impl<T: ?Sized + 'static, U: ?Sized + 'static> PartialEq<Type<U>> for Type<T> {
    fn eq(&self, _other: &Type<U>) -> bool {
        TypeId::of::<T>() == TypeId::of::<U>()
    }
}

impl<T: ?Sized + 'static> Eq for Type<T> {}

impl<T: ?Sized + 'static> Hash for Type<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        TypeId::of::<T>().hash(state);
    }
}
