//! Native heterogeneous list.
//!
//! `HNil` and `HCons<H, T>` are the crate's own List/Iterable
//! representation. Foreign containers join the same operations through the
//! adapters in [`ext`](crate::ext).
//!
//! ```
//! use tola_concepts::{cons, head, hlist, nil, tail};
//! use tola_concepts::list::HListTag;
//!
//! let xs = cons(1_u8, cons("two", nil::<HListTag>()));
//! assert_eq!(xs, hlist![1_u8, "two"]);
//! assert_eq!(head(xs), 1);
//! assert_eq!(tail(xs), hlist!["two"]);
//! ```

pub mod hlist;

pub use hlist::{HList, HNil, HCons, HListTag};
