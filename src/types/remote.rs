use serde::{Deserialize, Serialize};

/// JSON body for `POST /v2/pages.json`.
#[derive(Debug, Serialize)]
pub struct CreatePageRequest<'a> {
    pub url: &'a str,
    pub title: &'a str,
}

/// The created entry returned by the pages endpoint. Only the `id` field
/// matters here; anything else in the body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPage {
    pub id: u64,
}

/// JSON body for `DELETE /v2/unread_entries.json`.
#[derive(Debug, Serialize)]
pub struct MarkReadRequest {
    pub unread_entries: Vec<u64>,
}

/// Result of submitting one record: the remote entry id, plus an optional
/// soft warning when a secondary step failed under the `WarnOnly` policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub page_id: u64,
    pub warning: Option<String>,
}
