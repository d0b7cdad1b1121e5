//! Error types for backend operations
//!
//! Conversion itself never fails; these cover the surfaces around it.

use std::fmt;

/// Errors that can occur while loading a source tree or emitting a conversion
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Backend not found in registry
    BackendNotFound(String),
    /// The source tree could not be read
    SourceError(String),
    /// Error while serializing the converted tree
    SerializationError(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::BackendNotFound(name) => write!(f, "Backend '{name}' not found"),
            ConvertError::SourceError(msg) => write!(f, "Invalid source tree: {msg}"),
            ConvertError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::SerializationError(err.to_string())
    }
}
