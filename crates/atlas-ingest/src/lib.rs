//! Classical Atlas Ingest
//!
//! Normalizes raw Pleiades JSON-LD records into the domain model.
//!
//! # Architecture
//!
//! ```text
//! JSON-LD file → RecordSource → build_corpus → parse_place → Corpus
//!                                                ├─ parse_location
//!                                                └─ parse_name
//! ```
//!
//! Every source key is optional. Missing or falsy values become absent fields;
//! only unreadable sources (and, under [`IngestConfig::strict`], malformed
//! shapes or id-less places) abort ingestion.
//!
//! # Example Usage
//!
//! ```no_run
//! use atlas_ingest::{build_corpus, FileSource, IngestConfig, RecordSource};
//!
//! # fn example() -> Result<(), atlas_ingest::IngestError> {
//! let source = FileSource::new("data/pleiades-places.json", "data/ToposTextGazetteer.jsonld");
//! let document = source.pleiades_document()?;
//! let (corpus, stats) = build_corpus(&document, &IngestConfig::default())?;
//!
//! println!("Loaded {}", stats);
//! if let Some(athens) = corpus.get("579885") {
//!     println!("{} spans {} to {}", athens, athens.earliest_date(), athens.latest_date());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod corpus;
mod error;
mod fields;
mod geometry;
mod location;
mod name;
mod place;
mod source;

pub use config::IngestConfig;
pub use corpus::{build_corpus, Corpus, CorpusStats};
pub use error::IngestError;
pub use location::parse_location;
pub use name::parse_name;
pub use place::parse_place;
pub use fields::Record as RawRecord;
pub use source::{load_json, FileSource, RecordSource};
