//! Unit tests for the import session surface.
//!
//! This is the contract a presentation layer sees: starting without
//! credentials opens the prompt and submits nothing; supplying credentials
//! lets the same batch run; reset returns to Idle.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use pocketbin::app::{ImportSession, StartOutcome};
use pocketbin::remote::feedbin_client::BookmarkSubmitter;
use pocketbin::types::bookmark::PocketRecord;
use pocketbin::types::credential::Credentials;
use pocketbin::types::errors::SubmitError;
use pocketbin::types::remote::SubmitOutcome;
use pocketbin::types::settings::ImporterSettings;
use pocketbin::types::status::ImportPhase;

fn record(title: &str) -> PocketRecord {
    PocketRecord {
        title: title.to_string(),
        url: format!("http://{}.example.com", title.to_lowercase()),
        time_added: "1700000000".to_string(),
        tags: String::new(),
        status: "unread".to_string(),
    }
}

fn zero_delay_settings() -> ImporterSettings {
    ImporterSettings {
        inter_item_delay_ms: 0,
        ..ImporterSettings::default()
    }
}

/// Submitter that counts calls and always succeeds.
#[derive(Default)]
struct CountingSubmitter {
    calls: AtomicUsize,
}

#[async_trait]
impl BookmarkSubmitter for CountingSubmitter {
    async fn submit_one(
        &self,
        _credentials: &Credentials,
        _record: &PocketRecord,
    ) -> Result<SubmitOutcome, SubmitError> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(SubmitOutcome {
            page_id: index as u64 + 1,
            warning: None,
        })
    }
}

#[tokio::test]
async fn start_without_credentials_opens_the_prompt_and_submits_nothing() {
    let submitter = Arc::new(CountingSubmitter::default());
    let mut session = ImportSession::new(Arc::clone(&submitter), &zero_delay_settings());

    let outcome = session.start_import(&[record("A"), record("B")]).await;

    assert!(matches!(outcome, StartOutcome::CredentialsRequested));
    assert!(session.credential_prompt_pending());
    assert_eq!(submitter.calls.load(Ordering::SeqCst), 0);
    assert_eq!(session.status().phase, ImportPhase::Idle);
}

#[tokio::test]
async fn same_batch_runs_after_credentials_are_provided() {
    let submitter = Arc::new(CountingSubmitter::default());
    let mut session = ImportSession::new(Arc::clone(&submitter), &zero_delay_settings());
    let records = vec![record("A"), record("B")];

    assert!(matches!(
        session.start_import(&records).await,
        StartOutcome::CredentialsRequested
    ));

    session
        .provide_credentials("user@example.com", "s3cret")
        .unwrap();
    assert!(!session.credential_prompt_pending());

    match session.start_import(&records).await {
        StartOutcome::Ran(status) => {
            assert_eq!(status.phase, ImportPhase::Completed);
            assert_eq!(status.succeeded.len(), 2);
        }
        StartOutcome::CredentialsRequested => panic!("credentials were provided"),
    }
    assert_eq!(submitter.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn invalid_credentials_keep_the_prompt_pending() {
    let submitter = Arc::new(CountingSubmitter::default());
    let mut session = ImportSession::new(Arc::clone(&submitter), &zero_delay_settings());

    session.start_import(&[record("A")]).await;
    assert!(session.provide_credentials("user@example.com", "").is_err());
    assert!(session.credential_prompt_pending());

    // Still gated.
    assert!(matches!(
        session.start_import(&[record("A")]).await,
        StartOutcome::CredentialsRequested
    ));
    assert_eq!(submitter.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn reset_returns_status_to_idle_after_a_run() {
    let submitter = Arc::new(CountingSubmitter::default());
    let mut session = ImportSession::new(Arc::clone(&submitter), &zero_delay_settings());
    session
        .provide_credentials("user@example.com", "s3cret")
        .unwrap();

    session.start_import(&[record("A")]).await;
    assert_eq!(session.status().phase, ImportPhase::Completed);

    session.reset_import();

    let status = session.status();
    assert_eq!(status.phase, ImportPhase::Idle);
    assert_eq!(status.cursor, 0);
    assert_eq!(status.total, 0);
    assert!(status.succeeded.is_empty());
}

#[tokio::test]
async fn status_handle_observes_progress_from_outside() {
    let submitter = Arc::new(CountingSubmitter::default());
    let mut session = ImportSession::new(Arc::clone(&submitter), &zero_delay_settings());
    session
        .provide_credentials("user@example.com", "s3cret")
        .unwrap();

    let handle = session.status_handle();
    session.start_import(&[record("A"), record("B")]).await;

    let seen = handle.snapshot();
    assert_eq!(seen.phase, ImportPhase::Completed);
    assert_eq!(seen.succeeded.len(), 2);
}

#[tokio::test]
async fn cleared_credentials_gate_the_next_run_again() {
    let submitter = Arc::new(CountingSubmitter::default());
    let mut session = ImportSession::new(Arc::clone(&submitter), &zero_delay_settings());
    session
        .provide_credentials("user@example.com", "s3cret")
        .unwrap();

    session.clear_credentials();

    assert!(matches!(
        session.start_import(&[record("A")]).await,
        StartOutcome::CredentialsRequested
    ));
}
