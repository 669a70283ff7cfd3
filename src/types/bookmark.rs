use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Remote-status label for an entry the user has already read/archived.
pub const STATUS_ARCHIVE: &str = "archive";

/// Remote-status label for an entry still unread.
pub const STATUS_UNREAD: &str = "unread";

/// Represents a single Pocket bookmark entry from the CSV export.
///
/// Fields are carried exactly as parsed; whether a record is actually
/// submittable (non-empty title, well-formed URL) is checked at submission
/// time, so one bad row never blocks the rest of the batch from loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PocketRecord {
    pub title: String,
    pub url: String,
    pub time_added: String,
    pub tags: String,
    pub status: String,
}

impl PocketRecord {
    /// Builds a record from one parsed CSV row. Missing columns become
    /// empty strings; extra columns are ignored.
    pub fn from_row(row: &HashMap<String, String>) -> Self {
        let field = |name: &str| row.get(name).cloned().unwrap_or_default();
        Self {
            title: field("title"),
            url: field("url"),
            time_added: field("time_added"),
            tags: field("tags"),
            status: field("status"),
        }
    }

    /// Whether the remote entry should also be marked as read after creation.
    pub fn is_archived(&self) -> bool {
        self.status == STATUS_ARCHIVE
    }

    /// The `time_added` column as Unix epoch seconds, if it parses.
    /// Only used for display ordering/formatting by callers.
    pub fn time_added_epoch(&self) -> Option<i64> {
        self.time_added.trim().parse().ok()
    }
}

/// The validated outcome of reading a source file: an ordered sequence of
/// records. Immutable once produced; the records-or-error disjunction is
/// expressed as `Result<ParsedTable, ValidationError>` at the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable {
    records: Vec<PocketRecord>,
}

impl ParsedTable {
    pub(crate) fn new(records: Vec<PocketRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PocketRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<PocketRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
