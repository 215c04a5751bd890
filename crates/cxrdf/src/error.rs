//! Error types for CX export.
//!
//! All fallible operations return [`Result<T>`]. A failed export yields no
//! graph; callers re-run with corrected input.

use cxrdf_graph::GraphError;
use thiserror::Error;

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Error type for CX → RDF export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// CX input does not have the expected aspect structure
    #[error("Malformed CX in aspect '{aspect}': {message}")]
    Structure {
        /// Aspect being read (or `<document>` for the envelope)
        aspect: String,
        /// What was wrong
        message: String,
    },

    /// Policy name not recognized by the driver
    #[error("Unknown export policy '{name}' (expected one of: aspect, predicate, abstract)")]
    UnknownPolicy {
        /// The requested name
        name: String,
    },

    /// CX text is not valid JSON
    #[error("Invalid CX JSON: {source}")]
    Json {
        /// Parser error
        #[source]
        source: serde_json::Error,
    },

    /// Invalid export configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Error details
        message: String,
    },

    /// Error raised by the graph store
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl ExportError {
    /// Create a structural error for an aspect.
    pub fn structure(aspect: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Structure {
            aspect: aspect.into(),
            message: message.into(),
        }
    }
}
