//! Classical Atlas Validator
//!
//! Data-quality gate over normalized places.
//!
//! Normalization never fails on missing data, so gaps and contradictions in
//! the source are surfaced here instead:
//! - Locations without ids, names without a romanized form or id
//! - Location types outside the known vocabulary
//! - Attestations whose labels are not registered on their location
//! - Inverted date ranges and partial or inverted bounding boxes
//!
//! # Examples
//!
//! ```no_run
//! use atlas_validator::{ValidationConfig, Validator};
//!
//! # fn example(corpus: &atlas_ingest::Corpus) -> Result<(), atlas_validator::ValidatorError> {
//! let validator = Validator::new(ValidationConfig::strict())?;
//! let report = validator.validate_corpus(corpus);
//!
//! println!("{} of {} places rejected", report.rejected, report.places);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod validator;

pub use config::ValidationConfig;
pub use error::ValidatorError;
pub use validator::{CorpusReport, Severity, ValidationIssue, ValidationResult, ValidationStatus, Validator};
