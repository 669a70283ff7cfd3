//! Credential Gate for pocketbin.
//!
//! Holds zero or one [`Credentials`] value and a "prompt visible" flag, and
//! is the sole arbiter of whether an import run may proceed. There is no
//! hidden re-entrancy: when credentials are missing the gate flips the prompt
//! on and the caller is expected to re-invoke the start operation after
//! [`CredentialGate::submit`] succeeds.

use crate::types::credential::Credentials;
use crate::types::errors::CredentialError;

/// Decision returned by [`CredentialGate::authorize`].
#[derive(Debug)]
pub enum Authorization {
    /// Credentials are present; the run may start.
    Proceed(Credentials),
    /// No credentials yet; the prompt has been made visible and the caller
    /// should retry once the user has submitted values.
    PromptPending,
}

/// In-memory credential holder with a one-shot interactive pause.
#[derive(Debug, Default)]
pub struct CredentialGate {
    credentials: Option<Credentials>,
    prompt_visible: bool,
}

impl CredentialGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the credential prompt visible. Side effect only; never blocks.
    pub fn request_credentials(&mut self) {
        self.prompt_visible = true;
    }

    /// Hides the prompt without storing anything (the user dismissed it).
    pub fn close_prompt(&mut self) {
        self.prompt_visible = false;
    }

    /// Validates and stores credentials, hiding the prompt on success.
    ///
    /// The email must be email-shaped and the password non-empty; otherwise
    /// the prompt stays open and [`CredentialError::InvalidCredentials`]
    /// is returned.
    pub fn submit(&mut self, email: &str, password: &str) -> Result<(), CredentialError> {
        if !is_email_shaped(email) {
            return Err(CredentialError::InvalidCredentials(
                "email must look like an address".to_string(),
            ));
        }
        if password.is_empty() {
            return Err(CredentialError::InvalidCredentials(
                "password must not be empty".to_string(),
            ));
        }
        self.credentials = Some(Credentials::new(email, password));
        self.prompt_visible = false;
        Ok(())
    }

    /// Decides whether a run may proceed. When credentials are absent this
    /// requests them as a side effect and reports the pending prompt.
    pub fn authorize(&mut self) -> Authorization {
        match &self.credentials {
            Some(credentials) => Authorization::Proceed(credentials.clone()),
            None => {
                self.request_credentials();
                Authorization::PromptPending
            }
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn is_prompt_visible(&self) -> bool {
        self.prompt_visible
    }

    /// Drops stored credentials (zeroizing them) and hides the prompt.
    pub fn clear(&mut self) {
        self.credentials = None;
        self.prompt_visible = false;
    }
}

/// Minimal email shape check: one `@`, non-empty local part, and a domain
/// with an interior dot. Deeper validation is the remote service's job.
fn is_email_shaped(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
