//! Validator error types

use thiserror::Error;

/// Errors that can occur when setting up validation
///
/// Data-quality findings are never errors; they are reported as
/// [`ValidationIssue`](crate::ValidationIssue)s.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
