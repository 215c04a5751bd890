//! Error types for RDF graph operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.

use thiserror::Error;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for namespace binding and serialization.
///
/// Errors fail fast and name the offending input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The string is not usable as an absolute IRI
    #[error("Invalid IRI '{iri}': {reason}")]
    InvalidIri {
        /// The rejected IRI text
        iri: String,
        /// Why it was rejected
        reason: String,
    },

    /// Namespace prefix is not a valid Turtle prefix name
    #[error("Invalid namespace prefix '{prefix}'")]
    InvalidPrefix {
        /// The rejected prefix
        prefix: String,
    },

    /// Requested serialization format is not supported
    #[error("Unknown RDF format: {name}")]
    UnknownFormat {
        /// The requested format name
        name: String,
    },

    /// Writing a serialized graph failed
    #[error("Serialization failed: {message}")]
    Serialization {
        /// Error details
        message: String,
    },
}

impl GraphError {
    /// Create an invalid IRI error.
    pub fn invalid_iri(iri: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidIri {
            iri: iri.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization {
            message: message.to_string(),
        }
    }
}
