use std::fmt;

// === ValidationError ===

/// Errors detected while reading or validating the CSV input.
/// All of these occur before any remote call; the batch never starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The parsed table contains no rows.
    EmptyInput,
    /// The header row is missing one or more required column names.
    MissingHeaders,
    /// The CSV library could not parse the input.
    Malformed(String),
    /// The input file could not be read.
    Io(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyInput => write!(f, "Empty CSV file"),
            ValidationError::MissingHeaders => write!(
                f,
                "CSV is missing required headers: title, url, time_added, tags, status"
            ),
            ValidationError::Malformed(msg) => write!(f, "Error parsing CSV: {}", msg),
            ValidationError::Io(msg) => write!(f, "Failed to read CSV file: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

// === CredentialError ===

/// Errors related to credential collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// The supplied email/password pair is not usable.
    InvalidCredentials(String),
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::InvalidCredentials(msg) => {
                write!(f, "Invalid credentials: {}", msg)
            }
        }
    }
}

impl std::error::Error for CredentialError {}

// === SubmitError ===

/// Errors raised while submitting one record to the remote service.
/// Fatal to the current run at that item; prior successes are retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The record itself is not eligible for submission (empty title,
    /// malformed URL). Detected before any network traffic.
    InvalidRecord(String),
    /// The remote service answered with a non-success status.
    /// The message includes the transport status text.
    RemoteRejected(String),
    /// The remote service could not be reached (connect failure, timeout).
    NetworkUnreachable(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::InvalidRecord(msg) => {
                write!(f, "Record not eligible for submission: {}", msg)
            }
            SubmitError::RemoteRejected(msg) => {
                write!(f, "Feedbin rejected the request: {}", msg)
            }
            SubmitError::NetworkUnreachable(msg) => write!(f, "Network unreachable: {}", msg),
        }
    }
}

impl std::error::Error for SubmitError {}

// === SettingsError ===

/// Errors related to importer settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing the settings file.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
