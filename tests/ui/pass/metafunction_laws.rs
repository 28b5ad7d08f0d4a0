use core::marker::PhantomData;

use tola_concepts::{
    assert_same_type, constant_check, models, valid_call, Apply, HasType, Invoked, Metafn,
    Metafunction, Template, Type, TypeOf,
};

enum X1 {}
enum X2 {}
enum X3 {}

#[derive(TypeOf)]
struct Y2;

struct F<Args>(PhantomData<Args>);
struct FResult<Args>(PhantomData<Args>);

impl<Args> HasType for F<Args> {
    type Type = FResult<Args>;
}

struct FT;
impl<Args> Template<Args> for FT {
    type Apply = F<Args>;
}

struct Bare<Args>(PhantomData<Args>);
struct NoType;
impl<Args> Template<Args> for NoType {
    type Apply = Bare<Args>;
}

// Calling with k tags is F<T1..Tk>::Type.
assert_same_type!(Invoked<Metafn<FT>, ()>, Type<<F<()> as HasType>::Type>);
assert_same_type!(Invoked<Metafn<FT>, (Type<X1>,)>, Type<FResult<(X1,)>>);
assert_same_type!(Invoked<Metafn<FT>, (Type<X1>, Type<X2>)>, Type<FResult<(X1, X2)>>);
assert_same_type!(
    Invoked<Metafn<FT>, (Type<X1>, Type<X2>, Type<X3>)>,
    Type<FResult<(X1, X2, X3)>>
);

// A value stands for its type.
assert_same_type!(Invoked<Metafn<FT>, (Type<X1>, Y2)>, Invoked<Metafn<FT>, (Type<X1>, Type<Y2>)>);
assert_same_type!(Invoked<Metafn<FT>, (&'static Y2,)>, Type<FResult<(Y2,)>>);

// The nested applicator is the template.
assert_same_type!(Apply<Metafn<FT>, (X1, X2)>, F<(X1, X2)>);

// Trial calls without a nested type are a clean no.
constant_check!(!valid_call!(type Metafn<NoType>, ()));
constant_check!(!valid_call!(type Metafn<NoType>, (Type<X1>,)));
constant_check!(valid_call!(type Metafn<FT>, (Type<X1>, Y2)));

constant_check!(models!(Metafn<FT>: Metafunction));
constant_check!(models!(&'static Metafn<FT>: Metafunction));

fn main() {}
