//! Shared error types for the crate

use crate::hierarchy::{ClassId, MethodId};
use thiserror::Error;

/// Main error type for reflection operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No native method of the given name exists on the class or its ancestors.
    ///
    /// This is the one recoverable condition in the crate: prototype resolution
    /// catches it and falls back to the method itself. Everywhere else it
    /// propagates.
    #[error("class {class} has no native method named {method}")]
    MissingMethod { class: String, method: String },

    /// A class handle does not resolve in the registry (malformed or
    /// partially-built hierarchy)
    #[error("unknown class handle {0}")]
    UnknownClass(ClassId),

    /// A method handle does not resolve in the registry
    #[error("unknown method handle {0}")]
    UnknownMethod(MethodId),
}

impl Error {
    /// Create a missing-method error for a class/method pair
    pub fn missing_method(class: impl Into<String>, method: impl Into<String>) -> Self {
        Self::MissingMethod {
            class: class.into(),
            method: method.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
