use serde::{Deserialize, Serialize};

use crate::types::bookmark::PocketRecord;

/// Lifecycle phase of an import run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportPhase {
    Idle,
    Importing,
    Completed,
    Failed,
}

/// A per-item soft warning attached to an otherwise successful import
/// (e.g. a mark-read failure under the `WarnOnly` policy).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportWarning {
    pub index: usize,
    pub message: String,
}

/// Mutable progress record for one import run.
///
/// Invariants while `Importing`: `succeeded.len() <= cursor + 1 <= total`.
/// In `Completed`, `succeeded.len() == total` and `cursor == total`.
/// In `Failed`, `cursor` identifies the first item that failed and
/// `succeeded` holds exactly the items before it in source order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportStatus {
    pub phase: ImportPhase,
    pub cursor: usize,
    pub total: usize,
    pub succeeded: Vec<PocketRecord>,
    pub last_error: Option<String>,
    pub warnings: Vec<ImportWarning>,
}

impl Default for ImportStatus {
    fn default() -> Self {
        Self {
            phase: ImportPhase::Idle,
            cursor: 0,
            total: 0,
            succeeded: Vec::new(),
            last_error: None,
            warnings: Vec::new(),
        }
    }
}

impl ImportStatus {
    /// Whether a run is currently in progress.
    pub fn is_importing(&self) -> bool {
        self.phase == ImportPhase::Importing
    }

    /// Whether the run reached a terminal phase.
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, ImportPhase::Completed | ImportPhase::Failed)
    }
}
