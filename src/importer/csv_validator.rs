//! CSV shape validation for Pocket exports.
//!
//! Confirms the parsed table is non-empty and carries the required columns,
//! then passes every row through unchanged. Field-level checks (empty title,
//! malformed URL) are deliberately deferred to submission time so one bad row
//! cannot block an otherwise-valid batch from loading.

use std::collections::HashMap;

use crate::types::bookmark::{ParsedTable, PocketRecord};
use crate::types::errors::ValidationError;

/// Column names every Pocket CSV export must carry. Extra columns are
/// tolerated and ignored.
pub const REQUIRED_HEADERS: [&str; 5] = ["title", "url", "time_added", "tags", "status"];

/// Validates parsed rows and turns them into a [`ParsedTable`].
///
/// Fails with [`ValidationError::EmptyInput`] for an empty table and
/// [`ValidationError::MissingHeaders`] when any required column is absent
/// from the first row's keys. Row order is preserved.
pub fn validate(rows: &[HashMap<String, String>]) -> Result<ParsedTable, ValidationError> {
    if rows.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let first_row = &rows[0];
    let has_all_headers = REQUIRED_HEADERS
        .iter()
        .all(|header| first_row.contains_key(*header));
    if !has_all_headers {
        return Err(ValidationError::MissingHeaders);
    }

    let records = rows.iter().map(PocketRecord::from_row).collect();
    Ok(ParsedTable::new(records))
}
