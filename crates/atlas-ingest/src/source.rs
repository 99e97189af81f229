//! Raw record sources
//!
//! Downloading and decompressing the gazetteer dumps happens elsewhere; this
//! module only reads JSON-LD that is already on disk.

use crate::error::IngestError;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Supplier of parsed gazetteer documents
pub trait RecordSource {
    /// The Pleiades JSON-LD document (top-level `@graph`)
    fn pleiades_document(&self) -> Result<Value, IngestError>;

    /// The ToposText gazetteer document (top-level `features`)
    fn topos_gazetteer(&self) -> Result<Value, IngestError>;
}

/// Gazetteer documents read from local files
#[derive(Debug, Clone)]
pub struct FileSource {
    pleiades_path: PathBuf,
    topos_path: PathBuf,
}

impl FileSource {
    /// Create a source over the two gazetteer files
    pub fn new(pleiades_path: impl Into<PathBuf>, topos_path: impl Into<PathBuf>) -> Self {
        Self {
            pleiades_path: pleiades_path.into(),
            topos_path: topos_path.into(),
        }
    }
}

impl RecordSource for FileSource {
    fn pleiades_document(&self) -> Result<Value, IngestError> {
        load_json(&self.pleiades_path)
    }

    fn topos_gazetteer(&self) -> Result<Value, IngestError> {
        load_json(&self.topos_path)
    }
}

/// Read and parse a JSON file
///
/// A missing or unreadable file is [`IngestError::SourceUnavailable`].
pub fn load_json(path: &Path) -> Result<Value, IngestError> {
    let contents = fs::read_to_string(path).map_err(|e| IngestError::SourceUnavailable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    info!("Read {} bytes from {}", contents.len(), path.display());

    Ok(serde_json::from_str(&contents)?)
}
