//! Feedbin API client for pocketbin.
//!
//! Wraps the two remote operations (create page, mark-as-read) behind a
//! uniform "submit one item" contract. No retries happen here; all
//! retry/continue decisions belong to the import driver.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::debug;

use crate::types::bookmark::PocketRecord;
use crate::types::credential::Credentials;
use crate::types::errors::SubmitError;
use crate::types::remote::{CreatePageRequest, CreatedPage, MarkReadRequest, SubmitOutcome};
use crate::types::settings::{ImporterSettings, MarkReadFailurePolicy};

/// Trait defining the "submit one item" contract the driver depends on.
#[async_trait]
pub trait BookmarkSubmitter: Send + Sync {
    async fn submit_one(
        &self,
        credentials: &Credentials,
        record: &PocketRecord,
    ) -> Result<SubmitOutcome, SubmitError>;
}

// Shared submitters work too, so callers can keep a handle on the same
// instance the driver owns.
#[async_trait]
impl<T: BookmarkSubmitter + ?Sized> BookmarkSubmitter for std::sync::Arc<T> {
    async fn submit_one(
        &self,
        credentials: &Credentials,
        record: &PocketRecord,
    ) -> Result<SubmitOutcome, SubmitError> {
        (**self).submit_one(credentials, record).await
    }
}

/// Feedbin client backed by reqwest.
pub struct FeedbinClient {
    http: reqwest::Client,
    base_url: String,
    mark_read_policy: MarkReadFailurePolicy,
}

impl FeedbinClient {
    /// Creates a client with the configured base URL, request timeout, and
    /// mark-read failure policy.
    pub fn new(settings: &ImporterSettings) -> Result<Self, SubmitError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| {
                SubmitError::NetworkUnreachable(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            mark_read_policy: settings.mark_read_failure_policy,
        })
    }

    /// `Authorization` header value: Basic-auth encoding of `email:password`.
    pub fn basic_auth_header(credentials: &Credentials) -> String {
        let pair = format!("{}:{}", credentials.email, credentials.password);
        format!("Basic {}", BASE64.encode(pair))
    }

    /// Submission-time eligibility checks: non-empty title and a
    /// syntactically valid absolute http(s) URL. Runs before any network
    /// traffic so an ineligible record costs nothing remotely.
    pub fn validate_record(record: &PocketRecord) -> Result<(), SubmitError> {
        if record.title.trim().is_empty() {
            return Err(SubmitError::InvalidRecord(
                "title must not be empty".to_string(),
            ));
        }
        let url = Url::parse(&record.url)
            .map_err(|e| SubmitError::InvalidRecord(format!("invalid url: {}", e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(SubmitError::InvalidRecord(format!(
                "invalid url scheme: {}",
                url.scheme()
            )));
        }
        Ok(())
    }

    fn transport_error(err: reqwest::Error) -> SubmitError {
        if err.is_timeout() {
            SubmitError::NetworkUnreachable(format!("request timed out: {}", err))
        } else if err.is_decode() {
            SubmitError::RemoteRejected(format!("unexpected response body: {}", err))
        } else {
            SubmitError::NetworkUnreachable(err.to_string())
        }
    }

    fn rejected(operation: &str, status: StatusCode) -> SubmitError {
        SubmitError::RemoteRejected(format!("{} failed: {}", operation, status))
    }

    /// `POST /v2/pages.json` — creates the remote bookmark entry.
    async fn create_page(
        &self,
        credentials: &Credentials,
        record: &PocketRecord,
    ) -> Result<CreatedPage, SubmitError> {
        let response = self
            .http
            .post(format!("{}/v2/pages.json", self.base_url))
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .header(AUTHORIZATION, Self::basic_auth_header(credentials))
            .json(&CreatePageRequest {
                url: &record.url,
                title: &record.title,
            })
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::rejected("create call", response.status()));
        }

        response.json().await.map_err(Self::transport_error)
    }

    /// `DELETE /v2/unread_entries.json` — marks the created entry as read.
    async fn mark_read(&self, credentials: &Credentials, page_id: u64) -> Result<(), SubmitError> {
        let response = self
            .http
            .delete(format!("{}/v2/unread_entries.json", self.base_url))
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .header(AUTHORIZATION, Self::basic_auth_header(credentials))
            .json(&MarkReadRequest {
                unread_entries: vec![page_id],
            })
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::rejected("mark-read call", response.status()));
        }
        Ok(())
    }
}

#[async_trait]
impl BookmarkSubmitter for FeedbinClient {
    /// Creates the remote entry and, for archived records, marks it as read.
    ///
    /// A mark-read failure after a successful create leaves the bookmark
    /// existing remotely; whether that counts as a failed item or a soft
    /// warning is governed by the configured [`MarkReadFailurePolicy`].
    async fn submit_one(
        &self,
        credentials: &Credentials,
        record: &PocketRecord,
    ) -> Result<SubmitOutcome, SubmitError> {
        Self::validate_record(record)?;

        let page = self.create_page(credentials, record).await?;
        debug!(page_id = page.id, url = %record.url, "page created");

        let mut warning = None;
        if record.is_archived() {
            if let Err(err) = self.mark_read(credentials, page.id).await {
                match self.mark_read_policy {
                    MarkReadFailurePolicy::FailItem => return Err(err),
                    MarkReadFailurePolicy::WarnOnly => warning = Some(err.to_string()),
                }
            }
        }

        Ok(SubmitOutcome {
            page_id: page.id,
            warning,
        })
    }
}
