//! Pocket CSV export reader.
//!
//! Thin wrapper over the `csv` crate: reads a delimited file (or any
//! `io::Read`) into one ordered row map per line, keyed by the header row.
//! Blank lines are skipped. Shape validation happens in the validator,
//! not here.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::types::errors::ValidationError;

/// Reads CSV rows from any reader. Row 1 is treated as the header; each
/// subsequent row becomes a header→value map. Ragged rows are tolerated
/// (short rows simply produce fewer keys) so a malformed line surfaces
/// later as that item's submission failure rather than blocking the batch.
pub fn read_rows<R: Read>(input: R) -> Result<Vec<HashMap<String, String>>, ValidationError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| ValidationError::Malformed(e.to_string()))?
        .clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| ValidationError::Malformed(e.to_string()))?;
        // Lines of nothing but delimiters carry no data either.
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        let mut row = HashMap::with_capacity(headers.len());
        for (header, field) in headers.iter().zip(record.iter()) {
            row.insert(header.to_string(), field.to_string());
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Reads CSV rows from a file on disk.
pub fn read_rows_from_path(path: &Path) -> Result<Vec<HashMap<String, String>>, ValidationError> {
    let file = File::open(path).map_err(|e| ValidationError::Io(e.to_string()))?;
    read_rows(file)
}
