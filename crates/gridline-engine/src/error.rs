//! Errors raised by the attribute and uniform layers.
//!
//! Every variant is fatal to the call that produced it. Name resolution
//! failures against the active program are not errors; they are logged as
//! warnings by the apply paths and the draw continues.

/// Validation failure for an attribute or uniform.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Malformed declaration (empty name, bad component count, wrong element type).
    #[error("configuration error for '{name}': {reason}")]
    Configuration { name: String, reason: String },

    /// Attribute or uniform consumed before any data was assigned.
    #[error("'{name}' used before data was assigned")]
    UninitializedData { name: String },

    /// Value cannot be interpreted as the declared uniform type.
    #[error("type mismatch for uniform '{name}': {reason}")]
    TypeMismatch { name: String, reason: String },

    /// Too few (or, for scalars, too many) components.
    #[error("uniform '{name}' expects {expected} value(s), got {found}")]
    Arity {
        name: String,
        expected: usize,
        found: usize,
    },

    /// A component is NaN.
    #[error("uniform '{name}' contains NaN at index {index}")]
    NaN { name: String, index: usize },
}

impl Error {
    pub(crate) fn configuration(name: &str, reason: impl Into<String>) -> Self {
        Self::Configuration {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn type_mismatch(name: &str, reason: impl Into<String>) -> Self {
        Self::TypeMismatch {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
