//! ToposText reference tables
//!
//! A reference table maps a document title to the place ids it cites. On disk
//! it is a headerless CSV: the first cell of each row is the title, the rest
//! are ids.

use crate::error::CrosswalkError;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Document title → cited place ids, in citation order
pub type ReferenceTable = BTreeMap<String, Vec<String>>;

/// Read a reference table from CSV
///
/// Rows may have any number of cells. Empty id cells are skipped. A row with
/// an empty title keeps its ids under the `""` key; it is dropped only when it
/// has no ids either. A title that appears twice keeps only its last row.
pub fn read_reference_table<R: Read>(reader: R) -> Result<ReferenceTable, CrosswalkError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut table = ReferenceTable::new();
    for (row, result) in csv_reader.records().enumerate() {
        let record = result?;
        let title = record.get(0).map(str::trim).unwrap_or_default();

        let ids: Vec<String> = record
            .iter()
            .skip(1)
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();

        if title.is_empty() {
            if ids.is_empty() {
                debug!("Skipping empty reference row {}", row);
                continue;
            }
            warn!("Reference row {} has no title; keeping its {} ids under an empty title", row, ids.len());
        }

        if table.insert(title.to_string(), ids).is_some() {
            warn!("Reference title '{}' appears more than once; keeping the last row", title);
        }
    }

    Ok(table)
}

/// Read a reference table from a CSV file
pub fn read_reference_table_file(path: &Path) -> Result<ReferenceTable, CrosswalkError> {
    let file = File::open(path)?;
    read_reference_table(file)
}

/// Write a reference table as CSV, one row per title
pub fn write_reference_table<W: Write>(table: &ReferenceTable, writer: W) -> Result<(), CrosswalkError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(writer);

    for (title, ids) in table {
        let row = std::iter::once(title.as_str()).chain(ids.iter().map(String::as_str));
        csv_writer.write_record(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write a reference table to a CSV file, replacing any existing file
pub fn write_reference_table_file(table: &ReferenceTable, path: &Path) -> Result<(), CrosswalkError> {
    let file = File::create(path)?;
    write_reference_table(table, file)
}
