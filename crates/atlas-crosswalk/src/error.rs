//! Crosswalk error types

use thiserror::Error;

/// Errors that can occur during identifier reconciliation
///
/// An id without a counterpart in the other dataset is not an error; it is
/// counted in the [`ReconcileReport`](crate::ReconcileReport).
#[derive(Error, Debug)]
pub enum CrosswalkError {
    /// The ToposText gazetteer does not have the expected shape
    #[error("Malformed gazetteer: {0}")]
    MalformedGazetteer(String),

    /// The reference table could not be read or written
    #[error("Reference table error: {0}")]
    ReferenceTable(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for CrosswalkError {
    fn from(e: csv::Error) -> Self {
        CrosswalkError::ReferenceTable(e.to_string())
    }
}
