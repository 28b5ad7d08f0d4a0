//! Errors raised by erased dispatch.

use core::any::TypeId;
use core::fmt;

/// Hook names, as reported in errors and capability queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    Succ,
    Pred,
    Nil,
    IsEmpty,
}

impl Hook {
    pub const fn as_str(self) -> &'static str {
        match self {
            Hook::Succ => "succ",
            Hook::Pred => "pred",
            Hook::Nil => "nil",
            Hook::IsEmpty => "is_empty",
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of an erased call or of registry installation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The looked-up type has no registered hook; the shared default answered.
    #[error("`{hook}` is not registered for type {type_id:?}")]
    Unsupported { hook: Hook, type_id: TypeId },

    /// The registered hook has no representable result for this value.
    #[error("`{hook}` overflowed for `{type_name}`")]
    Overflow { hook: Hook, type_name: &'static str },

    /// A registered hook received a value of another type.
    #[error("`{hook}` expected a value of type `{expected}`")]
    TypeMismatch { hook: Hook, expected: &'static str },

    #[error("a global registry is already installed")]
    AlreadyInstalled,

    #[error("no global registry has been installed")]
    NotInstalled,
}

impl DispatchError {
    pub(crate) fn unsupported(hook: Hook, type_id: TypeId) -> Self {
        DispatchError::Unsupported { hook, type_id }
    }
}
