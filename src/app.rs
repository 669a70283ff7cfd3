//! Import Session for pocketbin.
//!
//! Central struct wiring the credential gate, the shared status record, and
//! the import driver. This is the collaborator surface a presentation layer
//! talks to: start/reset/cancel an import, supply credentials, and snapshot
//! progress at any time.

use std::time::Duration;

use crate::importer::credential_gate::{Authorization, CredentialGate};
use crate::importer::driver::{CancelToken, ImportDriver};
use crate::importer::status_model::SharedStatus;
use crate::remote::feedbin_client::{BookmarkSubmitter, FeedbinClient};
use crate::types::bookmark::PocketRecord;
use crate::types::errors::{CredentialError, SubmitError};
use crate::types::settings::ImporterSettings;
use crate::types::status::ImportStatus;

/// Outcome of a start-import request.
#[derive(Debug)]
pub enum StartOutcome {
    /// The run executed to a terminal phase; the status tells which.
    Ran(ImportStatus),
    /// No credentials were present. The prompt is now pending; call
    /// [`ImportSession::provide_credentials`] and start again.
    CredentialsRequested,
}

/// One import session: holds credentials and status for as long as the
/// session lives, and drives runs over record batches.
///
/// Generic over the submitter so the whole surface can be exercised in
/// tests without a network.
pub struct ImportSession<S> {
    gate: CredentialGate,
    status: SharedStatus,
    driver: ImportDriver<S>,
}

impl<S: BookmarkSubmitter> ImportSession<S> {
    pub fn new(submitter: S, settings: &ImporterSettings) -> Self {
        let status = SharedStatus::new();
        let driver = ImportDriver::new(submitter, status.clone())
            .with_inter_item_delay(Duration::from_millis(settings.inter_item_delay_ms));
        Self {
            gate: CredentialGate::new(),
            status,
            driver,
        }
    }

    /// Begins a run over `records`, gated on credentials being present.
    ///
    /// Taking `&mut self` means at most one run per session can be in
    /// flight; submissions within the run are strictly sequential.
    pub async fn start_import(&mut self, records: &[PocketRecord]) -> StartOutcome {
        match self.gate.authorize() {
            Authorization::Proceed(credentials) => {
                StartOutcome::Ran(self.driver.run(records, &credentials).await)
            }
            Authorization::PromptPending => StartOutcome::CredentialsRequested,
        }
    }

    /// Satisfies a pending credential prompt. On invalid values the prompt
    /// stays open and the error is returned.
    pub fn provide_credentials(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<(), CredentialError> {
        self.gate.submit(email, password)
    }

    /// Whether a credential prompt is currently pending.
    pub fn credential_prompt_pending(&self) -> bool {
        self.gate.is_prompt_visible()
    }

    /// Read-only, non-blocking status snapshot.
    pub fn status(&self) -> ImportStatus {
        self.status.snapshot()
    }

    /// Cloneable status handle for observers on other threads.
    pub fn status_handle(&self) -> SharedStatus {
        self.status.clone()
    }

    /// Returns status to Idle, discarding all progress.
    pub fn reset_import(&mut self) {
        self.status.with(|model| model.reset());
    }

    /// Token for cancelling the current (or a future) run. Cancellation is
    /// observed before each submission, not mid-call.
    pub fn cancel_token(&self) -> CancelToken {
        self.driver.cancel_token()
    }

    /// Drops stored credentials when the session is done with them.
    pub fn clear_credentials(&mut self) {
        self.gate.clear();
    }
}

impl ImportSession<FeedbinClient> {
    /// Convenience constructor wiring a real Feedbin client from settings.
    pub fn with_feedbin(settings: &ImporterSettings) -> Result<Self, SubmitError> {
        let client = FeedbinClient::new(settings)?;
        Ok(Self::new(client, settings))
    }
}
