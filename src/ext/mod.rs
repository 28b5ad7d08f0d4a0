//! # Adapters for foreign containers
//!
//! Hook implementations that make containers this crate does not own take
//! part in List and Iterable dispatch, without touching the containers
//! themselves.
//!
//! | Container | Tag | Feature |
//! |-----------|-----|---------|
//! | tuples `()` .. 12-tuples | `TupleTag` | - |
//! | `VecDeque<T>` | `DequeTag<T>` | `alloc` |
//! | `SmallVec<A>` | `SmallVecTag<A>` | `smallvec` |
//!
//! Every adapter satisfies `tail(cons(x, xs)) == xs`, and `cons` never
//! mutates a sequence the caller can still observe: owned inputs are
//! consumed, borrowed inputs are copied first.

pub mod tuple;

#[cfg(feature = "alloc")]
pub mod vec_deque;

#[cfg(feature = "smallvec")]
pub mod small_vec;

pub use tuple::TupleTag;

#[cfg(feature = "alloc")]
pub use vec_deque::DequeTag;

#[cfg(feature = "smallvec")]
pub use small_vec::SmallVecTag;
