//! # Layer 2: Dispatch
//!
//! Tag-keyed customization points.
//!
//! ## Module Structure
//!
//! ```text
//! dispatch/
//! ├── tag.rs    - TagOf: value type -> tag
//! ├── hooks.rs  - one hook trait per operation, implemented on tags
//! ├── ops.rs    - free functions routing through the hooks
//! ├── probe.rs  - has_impl!, is_default!, models!, valid_call!
//! └── check.rs  - compile-time assertions
//! ```
//!
//! An operation called on a tag without the matching hook is a compile
//! error carrying the hook's own diagnostic. The same missing hook, when
//! *probed* instead of used, is simply `false`:
//!
//! ```
//! use tola_concepts::{is_default, SuccImpl};
//! use tola_concepts::instances::integer::IntegerTag;
//!
//! struct Opaque;
//!
//! assert!(!is_default!(IntegerTag: SuccImpl<u8>));
//! assert!(is_default!(IntegerTag: SuccImpl<Opaque>));
//! ```

pub mod tag;
pub mod hooks;
pub mod ops;
pub mod probe;
pub mod check;

pub use tag::{TagOf, Tag, TypeTag, BoolTag};
pub use hooks::{SuccImpl, PredImpl, HeadImpl, TailImpl, IsEmptyImpl, ListImpl, ConsImpl};
pub use ops::{succ, pred, checked_succ, checked_pred, head, tail, is_empty, cons, nil, equal};
pub use check::{SameAs, same_tag};
