//! Error types for the marks library.
//!
//! This module provides the error hierarchy for all tree operations, using
//! `thiserror` for ergonomic error handling. Every operation reports failures
//! through [`Result`]; no mutation is applied when an error is returned.

use thiserror::Error;

use crate::node::NodeKind;

/// Result type alias for operations that may fail with a marks error.
///
/// # Examples
///
/// ```
/// use marks::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the marks library.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller input was rejected: empty or duplicate name, malformed URL,
    /// cyclic move target, unknown node kind, malformed date.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A path segment, item, or clipboard entry could not be found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// The operation is not supported by this kind of node.
    #[error("cannot {operation} a {kind}")]
    TypeKind {
        /// The operation that was attempted.
        operation: String,
        /// The kind of node it was attempted on.
        kind: NodeKind,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// Serializing output failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for building a [`Error::Validation`].
    pub(crate) fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for building a [`Error::NotFound`].
    pub(crate) fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Check if error indicates something does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use marks::Error;
    ///
    /// let err = Error::NotFound { resource: "item 'Tech'".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is a rejected input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if error is an operation applied to the wrong node kind.
    #[must_use]
    pub fn is_type_kind(&self) -> bool {
        matches!(self, Self::TypeKind { .. })
    }
}
