//! Import Driver for pocketbin.
//!
//! Orchestrates the sequential submission loop: one record at a time, in
//! input order, never concurrently. Ordering is a correctness property:
//! remote rate limits and a deterministic "first failing item" depend on it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::importer::status_model::SharedStatus;
use crate::remote::feedbin_client::BookmarkSubmitter;
use crate::types::bookmark::PocketRecord;
use crate::types::credential::Credentials;
use crate::types::status::ImportStatus;

/// Pause between successive submissions when none is configured.
pub const DEFAULT_INTER_ITEM_DELAY: Duration = Duration::from_millis(500);

/// Cooperative cancellation flag, observed before each submission.
/// Cancelling does not abort a call already in flight.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Drives one import run over a fixed set of records.
///
/// Generic over the submitter so tests can run the loop against a scripted
/// double with no network.
pub struct ImportDriver<S> {
    submitter: S,
    status: SharedStatus,
    inter_item_delay: Duration,
    cancel: CancelToken,
}

impl<S: BookmarkSubmitter> ImportDriver<S> {
    pub fn new(submitter: S, status: SharedStatus) -> Self {
        Self {
            submitter,
            status,
            inter_item_delay: DEFAULT_INTER_ITEM_DELAY,
            cancel: CancelToken::new(),
        }
    }

    /// Overrides the inter-item delay (tests use zero).
    pub fn with_inter_item_delay(mut self, delay: Duration) -> Self {
        self.inter_item_delay = delay;
        self
    }

    /// Handle for cancelling the current (or a future) run.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Runs the batch to a terminal phase and returns the final status.
    ///
    /// Credentials presence is the caller's responsibility, enforced through
    /// the credential gate at the call site. Records are processed strictly
    /// in input order with at most one submission in flight; the first
    /// failure terminates the loop and later items are never attempted.
    /// There is no resume: a fresh run always starts from index 0.
    pub async fn run(&self, records: &[PocketRecord], credentials: &Credentials) -> ImportStatus {
        let run_id = Uuid::new_v4();
        self.status.with(|model| model.begin_batch(records.len()));
        info!(%run_id, total = records.len(), "import started");

        for (index, record) in records.iter().enumerate() {
            if self.cancel.is_cancelled() {
                warn!(%run_id, index, "import cancelled");
                self.status
                    .with(|model| model.fail(index, "import cancelled before this item"));
                return self.status.snapshot();
            }

            // Cursor moves before the call resolves so a watcher sees
            // "processing index" during the in-flight window.
            self.status.with(|model| model.begin_item(index));
            debug!(%run_id, index, url = %record.url, "submitting");

            match self.submitter.submit_one(credentials, record).await {
                Ok(outcome) => {
                    if let Some(warning) = &outcome.warning {
                        warn!(%run_id, index, warning = %warning, "item imported with warning");
                    }
                    self.status
                        .with(|model| model.record_success(record.clone(), outcome.warning));
                    info!(
                        %run_id,
                        imported = index + 1,
                        total = records.len(),
                        url = %record.url,
                        "item imported"
                    );
                }
                Err(err) => {
                    let message = err.to_string();
                    warn!(%run_id, index, error = %message, "import failed");
                    self.status.with(|model| model.fail(index, &message));
                    return self.status.snapshot();
                }
            }

            // Rate-limiting courtesy to the remote API, skipped after the
            // final item.
            if index + 1 < records.len() && !self.inter_item_delay.is_zero() {
                tokio::time::sleep(self.inter_item_delay).await;
            }
        }

        self.status.with(|model| model.complete());
        info!(%run_id, total = records.len(), "import completed");
        self.status.snapshot()
    }
}
