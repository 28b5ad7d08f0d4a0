//! Metafunction wrapper: `metafunction::<F>()` against the template `F`
//! instantiated directly.

use core::marker::PhantomData;

use tola_concepts::dispatch::same_tag;
use tola_concepts::metafunction::builtin::Identity;
use tola_concepts::{
    assert_same_type, metafunction, models, template, type_c, valid_call, Apply, HasType,
    Invoked, Metafn, Metafunction, Template, TemplateFn, Type, TypeOf,
};

// =============================================================================
// Fixtures
// =============================================================================

enum X1 {}
enum X2 {}
enum X3 {}

#[derive(Debug, Clone, Copy, PartialEq, TypeOf)]
struct Y1;

#[derive(Debug, Clone, Copy, PartialEq, TypeOf)]
struct Y2(#[allow(dead_code)] u64);

/// Variadic template `F<Args...>` with `F<Args...>::Type == FResult<Args>`.
struct F<Args>(PhantomData<Args>);
struct FResult<Args>(PhantomData<Args>);

impl<Args> HasType for F<Args> {
    type Type = FResult<Args>;
}

struct FT;
impl<Args> Template<Args> for FT {
    type Apply = F<Args>;
}

/// Template without a nested type for any arguments.
struct Bare<Args>(PhantomData<Args>);
struct NoType;
impl<Args> Template<Args> for NoType {
    type Apply = Bare<Args>;
}

/// Template accepting exactly one parameter.
struct Unary<T>(PhantomData<T>);
impl<T> HasType for Unary<T> {
    type Type = Vec<T>;
}
struct UnaryT;
impl<T> Template<(T,)> for UnaryT {
    type Apply = Unary<T>;
}

// =============================================================================
// Invoking with type tags
// =============================================================================

#[test]
fn test_nullary_call() {
    let f = metafunction::<FT>();
    assert_eq!(f.call(()), type_c::<<F<()> as HasType>::Type>());
    assert_eq!(f.call(()), type_c::<FResult<()>>());
}

#[test]
fn test_calls_up_to_three_tags() {
    let f = metafunction::<FT>();
    assert_eq!(f.call((type_c::<X1>(),)), type_c::<FResult<(X1,)>>());
    assert_eq!(
        f.call((type_c::<X1>(), type_c::<X2>())),
        type_c::<FResult<(X1, X2)>>()
    );
    assert_eq!(
        f.call((type_c::<X1>(), type_c::<X2>(), type_c::<X3>())),
        type_c::<FResult<(X1, X2, X3)>>()
    );
    assert_ne!(f.call((type_c::<X1>(),)), type_c::<FResult<(X2,)>>());
}

#[test]
fn test_result_type_is_exact() {
    let f = metafunction::<FT>();
    same_tag(f.call((type_c::<X1>(), type_c::<X2>())), type_c::<FResult<(X1, X2)>>());
    assert_same_type!(Invoked<Metafn<FT>, ()>, Type<FResult<()>>);
    assert_same_type!(Invoked<Metafn<FT>, (Type<X1>,)>, Type<FResult<(X1,)>>);
}

// =============================================================================
// Mixed value and tag arguments
// =============================================================================

#[test]
fn test_values_promote_to_their_type() {
    let f = metafunction::<FT>();
    assert_eq!(
        f.call((type_c::<X1>(), Y1)),
        f.call((type_c::<X1>(), type_c::<Y1>()))
    );
    assert_eq!(
        f.call((Y1, type_c::<X2>(), Y2(9))),
        type_c::<FResult<(Y1, X2, Y2)>>()
    );
    assert_eq!(f.call((1_u8, 'c')), type_c::<FResult<(u8, char)>>());
}

#[test]
fn test_references_promote_to_referent_type() {
    let f = metafunction::<FT>();
    let y = Y1;
    assert_eq!(f.call((&y,)), type_c::<FResult<(Y1,)>>());
}

/// Template whose last parameter may be unsized.
struct RefPairT;
impl<A, B: ?Sized + 'static> Template<(A, B)> for RefPairT {
    type Apply = (A, &'static B);
}

#[test]
fn test_string_and_slice_values_promote() {
    let id = metafunction::<Identity>();
    assert!(valid_call!(metafunction::<Identity>(), "hi"));
    assert!(valid_call!(metafunction::<Identity>(), &b"ab"[..]));
    assert_eq!(id.call(("hi",)), type_c::<str>());
    assert_eq!(id.call((&b"ab"[..],)), type_c::<[u8]>());

    let owned = String::from("runtime");
    assert_eq!(id.call((owned.as_str(),)), id.call(("hi",)));
}

#[test]
fn test_unsized_tags_are_arguments() {
    let id = metafunction::<Identity>();
    assert!(valid_call!(metafunction::<Identity>(), type_c::<str>()));
    assert_eq!(id.call((type_c::<str>(),)), type_c::<str>());
    assert_eq!(id.call((type_c::<[char]>(),)), type_c::<[char]>());
    const STR: bool = valid_call!(type Metafn<Identity>, (Type<str>,));
    assert!(STR);
}

#[test]
fn test_unsized_only_in_last_position() {
    let pair = template::<RefPairT>();
    assert_eq!(pair.call((1_u8, "s")), type_c::<(u8, &'static str)>());
    assert_eq!(pair.call((1_u8, type_c::<[u16]>())), type_c::<(u8, &'static [u16])>());
    assert!(!valid_call!(template::<RefPairT>(), "s", 1_u8));
}

// =============================================================================
// Trial calls
// =============================================================================

#[test]
fn test_missing_nested_type_is_a_clean_no() {
    assert!(!valid_call!(metafunction::<NoType>()));
    assert!(!valid_call!(metafunction::<NoType>(), type_c::<X1>()));
    assert!(!valid_call!(metafunction::<NoType>(), Y1, 2_i32));

    const NO: bool = valid_call!(type Metafn<NoType>, (Type<X1>,));
    assert!(!NO);
}

#[test]
fn test_arity_mismatch_is_a_clean_no() {
    assert!(!valid_call!(metafunction::<UnaryT>()));
    assert!(valid_call!(metafunction::<UnaryT>(), Y1));
    assert!(!valid_call!(metafunction::<UnaryT>(), Y1, Y1));
    assert_eq!(metafunction::<UnaryT>().call((Y1,)), type_c::<Vec<Y1>>());
}

#[test]
fn test_valid_calls_answer_yes() {
    assert!(valid_call!(metafunction::<FT>()));
    assert!(valid_call!(metafunction::<FT>(), type_c::<X1>(), Y1, 3_u8));
    const YES: bool = valid_call!(type Metafn<FT>, (Type<X1>, Y1));
    assert!(YES);
}

#[test]
fn test_template_fn_needs_no_nested_type() {
    let t = template::<NoType>();
    assert_eq!(t.call((type_c::<X1>(),)), type_c::<Bare<(X1,)>>());
    assert!(valid_call!(template::<NoType>(), Y1));
    assert!(valid_call!(template::<NoType>()));
}

// =============================================================================
// Membership and composition
// =============================================================================

fn require_metafunction<M: Metafunction>(_: M) {}

#[test]
fn test_wrapper_and_reference_are_metafunctions() {
    const OWNED: bool = models!(Metafn<FT>: Metafunction);
    const BORROWED: bool = models!(&'static Metafn<FT>: Metafunction);
    assert!(OWNED);
    assert!(BORROWED);
    assert!(models!(TemplateFn<FT>: Metafunction));
    assert!(!models!(FT: Metafunction));

    let f = metafunction::<FT>();
    require_metafunction(f);
    require_metafunction(&f);
    require_metafunction(&&f);
}

#[test]
fn test_reference_calls_like_the_wrapper() {
    use tola_concepts::Invoke;

    let f = metafunction::<FT>();
    let r = &f;
    assert_eq!(r.invoke((type_c::<X1>(),)), f.call((type_c::<X1>(),)));
}

#[test]
fn test_nested_applicator_equals_template() {
    assert_same_type!(Apply<Metafn<FT>, ()>, F<()>);
    assert_same_type!(Apply<Metafn<FT>, (X1,)>, F<(X1,)>);
    assert_same_type!(Apply<Metafn<FT>, (X1, X2, X3)>, F<(X1, X2, X3)>);
    assert_same_type!(Apply<TemplateFn<UnaryT>, (X1,)>, Unary<X1>);
}

#[test]
fn test_wrapper_passed_as_template() {
    let lifted_twice = metafunction::<Metafn<FT>>();
    assert_eq!(lifted_twice.call((type_c::<X1>(),)), type_c::<FResult<(X1,)>>());
}

// =============================================================================
// Value independence
// =============================================================================

fn call_with(n: u64) -> Type<FResult<(Y2,)>> {
    metafunction::<FT>().call((Y2(n),))
}

#[test]
fn test_result_ignores_runtime_values() {
    let seed = std::env::args().count() as u64;
    assert_eq!(call_with(seed), call_with(seed.wrapping_mul(31) + 7));
    assert_eq!(call_with(0), call_with(u64::MAX));
}

#[test]
fn test_result_usable_as_constant() {
    const R: Invoked<Metafn<FT>, (Type<X1>, Y1)> = Type::new();

    let y = Y1;
    let f = metafunction::<FT>();
    same_tag(f.call((type_c::<X1>(), y)), R);
    assert_eq!(f.call((type_c::<X1>(), y)), R);
}
