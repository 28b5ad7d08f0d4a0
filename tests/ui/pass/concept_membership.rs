use std::collections::VecDeque;

use tola_concepts::prelude::*;
use tola_concepts::{N2, S, Z};

#[derive(Tagged)]
struct Half;

impl SuccImpl<Half> for Half {
    type Output = Half;

    fn apply(x: Half) -> Half {
        x
    }
}

constant_check!(models!(u32: Enumerable));
constant_check!(models!(N2: Enumerable));
constant_check!(!models!(Z: Enumerable));
constant_check!(!models!(Half: Enumerable), "one hook is not enough");
constant_check!(!is_default!(Half: SuccImpl<Half>));
constant_check!(is_default!(Half: PredImpl<Half>));

constant_check!(models!((u8, char): Iterable));
constant_check!(models!((): List));
constant_check!(models!(HNil: List));
constant_check!(models!(VecDeque<u8>: List));

assert_same_type!(<N2 as Enumerable>::Succ, S<S<S<Z>>>);
assert_same_type!(<(u8, char) as Iterable>::Tail, (char,));

fn main() {}
