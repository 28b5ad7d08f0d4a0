//! Ready-made templates.

use core::marker::PhantomData;

use super::template::{HasType, Template};
use crate::types::Type;

/// `Identity<T>::Type == T`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

/// Instantiation of [`Identity`].
pub struct Id<T: ?Sized>(PhantomData<Type<T>>);

impl<T: ?Sized> Template<(T,)> for Identity {
    type Apply = Id<T>;
}

impl<T: ?Sized> HasType for Id<T> {
    type Type = T;
}

/// `AddRef<T>::Type == &'static T`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddRef;

/// Instantiation of [`AddRef`].
pub struct Ref<T: ?Sized>(PhantomData<Type<T>>);

impl<T: ?Sized> Template<(T,)> for AddRef {
    type Apply = Ref<T>;
}

impl<T: ?Sized + 'static> HasType for Ref<T> {
    type Type = &'static T;
}

/// Variadic template whose nested type is the argument tuple itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tuple;

/// Instantiation of [`Tuple`].
pub struct Pack<Args>(PhantomData<fn() -> Args>);

impl<Args> Template<Args> for Tuple {
    type Apply = Pack<Args>;
}

impl<Args> HasType for Pack<Args> {
    type Type = Args;
}

crate::define_template!(
    /// `Option<A>` as a template; use with [`template`](crate::template).
    pub OptionT => core::option::Option<A>
);

crate::define_template!(
    /// `Result<A, B>` as a template; use with [`template`](crate::template).
    pub ResultT => core::result::Result<A, B>
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{metafunction, template, type_c};

    #[test]
    fn test_identity_and_add_ref() {
        assert_eq!(metafunction::<Identity>().call((1_i8,)), type_c::<i8>());
        assert_eq!(metafunction::<AddRef>().call((type_c::<u32>(),)), type_c::<&'static u32>());
    }

    #[test]
    fn test_tuple_is_variadic() {
        let t = metafunction::<Tuple>();
        assert_eq!(t.call(()), type_c::<()>());
        assert_eq!(t.call((1_u8, 'x', type_c::<bool>())), type_c::<(u8, char, bool)>());
    }

    #[test]
    fn test_std_templates() {
        assert_eq!(template::<OptionT>().call((type_c::<u8>(),)), type_c::<Option<u8>>());
        assert_eq!(
            template::<ResultT>().call((0_u16, type_c::<()>())),
            type_c::<Result<u16, ()>>()
        );
    }
}
