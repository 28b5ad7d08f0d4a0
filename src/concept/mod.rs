//! # Concepts
//!
//! A concept is a trait with one blanket impl whose where-clause lists the
//! hooks the concept requires. Consequences:
//!
//! - `T: Enumerable` is usable as an ordinary generic bound.
//! - [`models!`](crate::models) answers membership for concrete types as a
//!   constant, `false` when any hook is missing.
//! - Nobody implements a concept directly; implementing the hooks is enough.
//!
//! | Concept | Requires on `T::Tag` |
//! |---------|----------------------|
//! | [`Enumerable`] | `SuccImpl<T>` + `PredImpl<T>` |
//! | [`Iterable`] | `HeadImpl<T>` + `TailImpl<T>` + `IsEmptyImpl<T>` |
//! | [`List`] | `ListImpl` |
//! | [`Metafunction`] | a nested applicator (see the trait) |

pub mod enumerable;
pub mod iterable;
pub mod list;
pub mod metafunction;

pub use enumerable::Enumerable;
pub use iterable::Iterable;
pub use list::List;
pub use metafunction::Metafunction;
