//! # Metafunctions
//!
//! A *template* is a marker type `F` implementing [`Template<Args>`] for the
//! argument tuples it accepts; `Apply<F, Args>` is the instantiation. When
//! the instantiation has a nested result ([`HasType`]), `F` can be lifted
//! into a callable with [`metafunction`]:
//!
//! ```
//! use tola_concepts::{metafunction, type_c, HasType, Template};
//!
//! // A template with a nested result computed per instantiation.
//! struct Boxed<T>(T);
//! impl<T> HasType for Boxed<T> {
//!     type Type = Option<T>;
//! }
//!
//! struct BoxedT;
//! impl<T> Template<(T,)> for BoxedT {
//!     type Apply = Boxed<T>;
//! }
//!
//! let f = metafunction::<BoxedT>();
//! assert_eq!(f.call((type_c::<u8>(),)), type_c::<Option<u8>>());
//! // Ordinary values stand for their type.
//! assert_eq!(f.call((3_u8,)), type_c::<Option<u8>>());
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! metafunction/
//! ├── template.rs - Template, HasType, Apply, define_template!
//! ├── wrap.rs     - Metafn (metafunction), TemplateFn (template), Invoke
//! └── builtin.rs  - ready-made templates
//! ```

pub mod template;
pub mod wrap;
pub mod builtin;

pub use template::{Template, HasType, Apply};
pub use wrap::{Invoke, Invoked, Metafn, TemplateFn, metafunction, template};
