//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Loading or normalizing the gazetteer failed
    #[error(transparent)]
    Ingest(#[from] atlas_ingest::IngestError),

    /// Identifier reconciliation failed
    #[error(transparent)]
    Crosswalk(#[from] atlas_crosswalk::CrosswalkError),

    /// Validator setup failed
    #[error(transparent)]
    Validator(#[from] atlas_validator::ValidatorError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested place is not in the corpus
    #[error("Place '{0}' not found")]
    NotFound(String),
}
