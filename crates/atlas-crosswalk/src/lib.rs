//! Classical Atlas Crosswalk
//!
//! Reconciles ToposText place identifiers with Pleiades identifiers.
//!
//! # Architecture
//!
//! ```text
//! ToposText gazetteer → build_crosswalks → CrosswalkPair { forward, reverse }
//!                                               │
//! reference table (CSV) → read_reference_table ─┴→ apply_crosswalk → ReconcileReport
//!                                                   invert_to_id_keyed
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use atlas_crosswalk::{apply_crosswalk, build_crosswalk, read_reference_table_file, Direction};
//! use std::path::Path;
//!
//! # fn example(gazetteer: serde_json::Value) -> Result<(), atlas_crosswalk::CrosswalkError> {
//! let crosswalk = build_crosswalk(&gazetteer, Direction::ToposToPleiades)?;
//! let mut refs = read_reference_table_file(Path::new("data/topos_refs.csv"))?;
//!
//! let report = apply_crosswalk(&mut refs, &crosswalk);
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod crosswalk;
mod error;
mod reconcile;
mod table;

pub use crosswalk::{build_crosswalk, build_crosswalks, Crosswalk, CrosswalkPair, Direction};
pub use error::CrosswalkError;
pub use reconcile::{apply_crosswalk, invert_to_id_keyed, ReconcileReport};
pub use table::{
    read_reference_table, read_reference_table_file, write_reference_table, write_reference_table_file,
    ReferenceTable,
};
