//! Error types for ingestion

use thiserror::Error;

/// Errors that can occur while loading and normalizing raw records
///
/// Missing optional fields are never errors; they normalize to absent values.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Raw gazetteer file is missing or unreadable
    #[error("Source unavailable: {path}: {reason}")]
    SourceUnavailable {
        /// Path that was read
        path: String,
        /// Underlying failure
        reason: String,
    },

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// A record has an unexpected nesting shape
    #[error("Malformed shape: {0}")]
    MalformedShape(String),

    /// A place record has no id (only raised when ids are required)
    #[error("Place record {index} has no id")]
    MissingPlaceId {
        /// Position of the record in the `@graph` array
        index: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for IngestError {
    fn from(e: serde_json::Error) -> Self {
        IngestError::JsonParse(e.to_string())
    }
}
