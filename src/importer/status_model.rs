//! Import Status Model for pocketbin.
//!
//! Pure data container plus transition operations for [`ImportStatus`], with
//! no I/O. Every mutation is total; `reset` is a no-op when already Idle.
//! [`SharedStatus`] wraps the model in a mutex so presentation code on
//! another thread can snapshot progress while the driver runs.

use std::sync::{Arc, Mutex, PoisonError};

use crate::types::bookmark::PocketRecord;
use crate::types::status::{ImportPhase, ImportStatus, ImportWarning};

/// State machine over [`ImportStatus`]: Idle → Importing → {Completed |
/// Failed} → (reset) → Idle.
#[derive(Debug, Default)]
pub struct ImportStatusModel {
    status: ImportStatus,
}

impl ImportStatusModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new batch: phase Importing, cursor 0, progress cleared.
    pub fn begin_batch(&mut self, total: usize) {
        self.status = ImportStatus {
            phase: ImportPhase::Importing,
            cursor: 0,
            total,
            ..ImportStatus::default()
        };
    }

    /// Marks item `index` as the one currently in flight. Called before the
    /// submission resolves so observers see "processing index" live.
    pub fn begin_item(&mut self, index: usize) {
        self.status.cursor = index;
    }

    /// Appends a successfully submitted record, with an optional soft
    /// warning from a secondary step.
    pub fn record_success(&mut self, record: PocketRecord, warning: Option<String>) {
        if let Some(message) = warning {
            self.status.warnings.push(ImportWarning {
                index: self.status.cursor,
                message,
            });
        }
        self.status.succeeded.push(record);
    }

    /// Terminates the run at the first failing item. Items already in
    /// `succeeded` stay there.
    pub fn fail(&mut self, index: usize, message: &str) {
        self.status.phase = ImportPhase::Failed;
        self.status.cursor = index;
        self.status.last_error = Some(message.to_string());
    }

    /// Marks the run complete; the cursor moves past the last item.
    pub fn complete(&mut self) {
        self.status.phase = ImportPhase::Completed;
        self.status.cursor = self.status.total;
    }

    /// Returns to Idle, discarding all progress. No-op when already Idle.
    pub fn reset(&mut self) {
        if self.status.phase == ImportPhase::Idle {
            return;
        }
        self.status = ImportStatus::default();
    }

    pub fn status(&self) -> &ImportStatus {
        &self.status
    }

    pub fn snapshot(&self) -> ImportStatus {
        self.status.clone()
    }
}

/// Cloneable, mutex-guarded handle to an [`ImportStatusModel`].
///
/// Written exclusively by the driver; read by observers from any thread.
#[derive(Debug, Clone, Default)]
pub struct SharedStatus {
    inner: Arc<Mutex<ImportStatusModel>>,
}

impl SharedStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with the model locked. A poisoned lock is recovered: the
    /// status record stays internally consistent after every mutation, so
    /// the value inside is still usable.
    pub fn with<R>(&self, f: impl FnOnce(&mut ImportStatusModel) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Non-blocking-in-spirit read path for observers: clones the current
    /// status out from under the lock.
    pub fn snapshot(&self) -> ImportStatus {
        self.with(|model| model.snapshot())
    }
}
