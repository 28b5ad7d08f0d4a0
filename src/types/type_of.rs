//! Promotion of arguments to type tags (`decltype_`).
//!
//! A metafunction accepts either a [`Type<T>`] or an ordinary value whose
//! type is `T`; both mean "the type `T`". [`TypeOf`] performs that
//! promotion: a tag maps to the type it encodes, any other value maps to its
//! own type, and references are looked through.
//!
//! String and slice references promote to `str` and `[T]`. An unsized type
//! can only stand in the last argument position, the one place a tuple may
//! hold it.
//!
//! Rust has no way to say "every type that is not a `Type<_>`", so ordinary
//! value types opt in. Primitives, tuples, arrays and the common std types
//! are covered here; user types use `#[derive(TypeOf)]`.

use core::marker::PhantomData;

use super::Type;

/// Argument promotion: the type an argument stands for.
pub trait TypeOf {
    type Of: ?Sized;
}

/// The type an argument of type `X` stands for.
pub type Decltype<X> = <X as TypeOf>::Of;

/// Tag of the type a value stands for. Only the static type of `x` is used.
#[inline(always)]
pub fn decltype<X: TypeOf>(_x: X) -> Type<X::Of> {
    Type::new()
}

impl<T: ?Sized> TypeOf for Type<T> {
    type Of = T;
}

impl<X: TypeOf + ?Sized> TypeOf for &X {
    type Of = X::Of;
}

impl<X: TypeOf + ?Sized> TypeOf for &mut X {
    type Of = X::Of;
}

macro_rules! impl_type_of_self {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TypeOf for $ty {
                type Of = Self;
            }
        )*
    };
}

impl_type_of_self!(
    bool, char,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);

impl TypeOf for str {
    type Of = Self;
}

impl<T> TypeOf for [T] {
    type Of = Self;
}

impl<T> TypeOf for Option<T> {
    type Of = Self;
}

impl<T, E> TypeOf for Result<T, E> {
    type Of = Self;
}

impl<T: ?Sized> TypeOf for PhantomData<T> {
    type Of = Self;
}

impl<T, const N: usize> TypeOf for [T; N] {
    type Of = Self;
}

#[cfg(feature = "alloc")]
impl_type_of_self!(alloc::string::String);

#[cfg(feature = "alloc")]
impl<T> TypeOf for alloc::vec::Vec<T> {
    type Of = Self;
}

#[cfg(feature = "alloc")]
impl<T: ?Sized> TypeOf for alloc::boxed::Box<T> {
    type Of = Self;
}

#[cfg(feature = "alloc")]
impl<T> TypeOf for alloc::collections::VecDeque<T> {
    type Of = Self;
}

macro_rules! impl_type_of_tuple {
    ($($T:ident),*) => {
        impl<$($T),*> TypeOf for ($($T,)*) {
            type Of = Self;
        }
    };
}

impl_type_of_tuple!();
impl_type_of_tuple!(A);
impl_type_of_tuple!(A, B);
impl_type_of_tuple!(A, B, C);
impl_type_of_tuple!(A, B, C, D);
impl_type_of_tuple!(A, B, C, D, E);
impl_type_of_tuple!(A, B, C, D, E, F);
impl_type_of_tuple!(A, B, C, D, E, F, G);
impl_type_of_tuple!(A, B, C, D, E, F, G, H);
impl_type_of_tuple!(A, B, C, D, E, F, G, H, I);
impl_type_of_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_type_of_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_type_of_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::type_c;

    #[test]
    fn test_tag_maps_to_encoded_type() {
        assert_eq!(decltype(type_c::<u64>()), type_c::<u64>());
        // A tag for a tag stays a tag for a tag.
        assert_eq!(decltype(type_c::<Type<u8>>()), type_c::<Type<u8>>());
    }

    #[test]
    fn test_value_maps_to_own_type() {
        assert_eq!(decltype(1.5_f32), type_c::<f32>());
        assert_eq!(decltype((1_u8, 'c')), type_c::<(u8, char)>());
        assert_eq!(decltype(Some(3_i16)), type_c::<Option<i16>>());
    }

    #[test]
    fn test_references_are_looked_through() {
        let x = 9_u32;
        assert_eq!(decltype(&x), type_c::<u32>());
        let t = type_c::<i8>();
        assert_eq!(decltype(&t), type_c::<i8>());
    }
}
