#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

// Feature flags handled:
// - std: default, enables std library and the erased registry
// - alloc: enables the VecDeque adapter in no_std
// - smallvec: enables the SmallVec adapter

//! # tola-concepts
//!
//! **Type-level concepts and tag dispatch for Rust.**
//!
//! ## Architecture
//!
//! Every value type names a *tag* through [`TagOf`]. Each operation
//! (`succ`, `pred`, `head`, `tail`, `is_empty`, `cons`, `nil`) is a hook trait
//! implemented **on the tag**. A *concept* is a trait with a blanket impl that
//! requires all of its hooks, so a type models a concept exactly when its tag
//! provides every required hook.
//!
//! ```text
//! value: VecDeque<u8>  --TagOf-->  DequeTag<u8>  --SuccImpl/TailImpl/...-->  impl
//!                                                  (missing => default sentinel)
//! ```
//!
//! Membership and trial calls are probed with the inherent const fallback
//! pattern: an inherent const guarded by a where-clause shadows a trait const
//! default of `false`. An unsatisfied bound is a clean "no", never an abort.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (True/False), Peano naturals (Z, S<N>, N0..N16)           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Type tags                                               |
//! |  - Type<T>, type_c, TypeOf (value -> tag promotion)               |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Dispatch                                                |
//! |  - TagOf, hook traits, free operations, probes, static checks     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Concepts and metafunctions                              |
//! |  - Enumerable, Iterable, List, Metafunction; Metafn, TemplateFn   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 4: Instances and adapters                                  |
//! |  - integers, Peano, HList, tuples, VecDeque, SmallVec             |
//! |  - erased registry (std)                                          |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_concepts::prelude::*;
//!
//! // The successor hook resolves through the integer tag.
//! assert_eq!(succ(41_i32), 42);
//!
//! // Concept membership is a constant.
//! const _: () = assert!(models!(i32: Enumerable));
//!
//! // Lists: the tuple adapter.
//! let xs = cons(1_u8, ("two", 3.0_f32));
//! assert_eq!(tail(xs), ("two", 3.0_f32));
//! ```

// Allow `::tola_concepts` to work inside the crate itself
extern crate self as tola_concepts;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Type tags
// =============================================================================
pub mod types;

// =============================================================================
// Layer 2: Dispatch
// =============================================================================
pub mod dispatch;

// =============================================================================
// Layer 3: Concepts and metafunctions
// =============================================================================
pub mod concept;
pub mod metafunction;

// =============================================================================
// Layer 4: Instances and adapters
// =============================================================================
pub mod instances;
pub mod list;
pub mod ext;

#[cfg(feature = "std")]
pub mod registry;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::bool::{Bool, True, False};
pub use primitives::peano::{Nat, Z, S};
pub use primitives::peano::{
    N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, N10, N11, N12, N13, N14, N15, N16,
};
pub use types::{Type, TypeOf, Decltype, type_c, decltype};
pub use dispatch::tag::TagOf;
pub use dispatch::hooks::{
    SuccImpl, PredImpl, HeadImpl, TailImpl, IsEmptyImpl, ListImpl, ConsImpl,
};
pub use dispatch::ops::{succ, pred, checked_succ, checked_pred, head, tail, is_empty, cons, nil, equal};
pub use concept::{Enumerable, Iterable, List, Metafunction};
pub use list::{HNil, HCons};
pub use metafunction::{
    Template, HasType, Apply, Invoke, Invoked, Metafn, TemplateFn, metafunction, template,
};

// Re-export proc-macros
pub use macros::{TypeOf, Tagged};

/// Common items for the concept system.
pub mod prelude {
    pub use crate::primitives::bool::{Bool, True, False};
    pub use crate::types::{Type, TypeOf, type_c, decltype};
    pub use crate::dispatch::tag::TagOf;
    pub use crate::dispatch::hooks::{
        SuccImpl, PredImpl, HeadImpl, TailImpl, IsEmptyImpl, ListImpl, ConsImpl,
    };
    pub use crate::dispatch::ops::{succ, pred, checked_succ, checked_pred, head, tail, is_empty, cons, nil, equal};
    pub use crate::concept::{Enumerable, Iterable, List, Metafunction};
    pub use crate::metafunction::{
        Template, HasType, Invoke, Invoked, Metafn, TemplateFn, metafunction, template,
    };
    pub use crate::list::{HNil, HCons};
    pub use macros::{TypeOf, Tagged};
    // Note: models!, is_default!, valid_call!, has_impl!, assert_same_type!,
    // constant_check!, hlist! and define_template! are #[macro_export] so they live at crate root
    pub use crate::{models, is_default, valid_call, has_impl, assert_same_type, constant_check, hlist};
}
