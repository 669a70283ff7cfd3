use serde::{Deserialize, Serialize};

/// Production Feedbin API endpoint.
pub const FEEDBIN_API_BASE_URL: &str = "https://api.feedbin.com";

/// What to do when a record's follow-up mark-read call fails even though
/// the create call already succeeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkReadFailurePolicy {
    /// Treat the whole item as failed, terminating the run. The remote
    /// bookmark exists anyway; this mirrors the historical behavior.
    #[default]
    FailItem,
    /// Count the item as imported and attach a warning to the status.
    WarnOnly,
}

/// Importer settings, persisted as JSON at the platform config path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImporterSettings {
    /// Base URL of the remote bookmark service.
    pub api_base_url: String,
    /// Pause between successive submissions, a rate-limiting courtesy
    /// to the remote API.
    pub inter_item_delay_ms: u64,
    /// Per-request timeout for remote calls.
    pub request_timeout_secs: u64,
    pub mark_read_failure_policy: MarkReadFailurePolicy,
}

impl Default for ImporterSettings {
    fn default() -> Self {
        Self {
            api_base_url: FEEDBIN_API_BASE_URL.to_string(),
            inter_item_delay_ms: 500,
            request_timeout_secs: 30,
            mark_read_failure_policy: MarkReadFailurePolicy::default(),
        }
    }
}
