//! Domain error types
//!
//! This module defines the error hierarchy for Registrar. All errors are
//! domain-specific and don't expose third-party types.
//!
//! Two levels exist deliberately: [`RegistrarError`] covers job-level
//! failures that abort a driver, while [`CohortMembershipError`] covers
//! per-row outcomes that are tallied in counters and never propagated.

use thiserror::Error;

/// Main Registrar error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum RegistrarError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A required task-input field is absent or empty; fatal before processing
    #[error("Missing required task input: {0}")]
    MissingInput(String),

    /// A data source failed to produce its rows; fatal for the job
    #[error("Data collection failed: {0}")]
    DataCollection(String),

    /// Report store errors (upload or key generation)
    #[error("Report store error: {0}")]
    ReportStore(String),

    /// Uploaded-file store errors (cohort input files)
    #[error("Upload store error: {0}")]
    UploadStore(String),

    /// Transport-level remote gradebook errors
    #[error("Gradebook error: {0}")]
    Gradebook(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// CSV encode/decode errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Per-row cohort membership failures
///
/// These are counted and recorded in the per-cohort status sets; the job
/// keeps running. Classification of an unresolvable identifier follows a
/// single heuristic: the presence of `@` means the caller was attempting
/// to enter an email address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CohortMembershipError {
    /// No user matches the identifier
    #[error("No user found for identifier: {0}")]
    UserNotFound(String),

    /// The identifier contains `@` but is not a syntactically valid email
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

impl CohortMembershipError {
    /// Classify an identifier that could not be resolved to a user.
    ///
    /// There is no way to know whether the entered string is an invalid
    /// username or an invalid email, so a string containing `@` is treated
    /// as an attempted email address.
    pub fn classify_unresolved(identifier: &str) -> Self {
        if identifier.contains('@') {
            Self::InvalidEmail(identifier.to_string())
        } else {
            Self::UserNotFound(identifier.to_string())
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for RegistrarError {
    fn from(err: std::io::Error) -> Self {
        RegistrarError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for RegistrarError {
    fn from(err: serde_json::Error) -> Self {
        RegistrarError::Serialization(err.to_string())
    }
}

// Conversion from csv::Error
impl From<csv::Error> for RegistrarError {
    fn from(err: csv::Error) -> Self {
        RegistrarError::Csv(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for RegistrarError {
    fn from(err: toml::de::Error) -> Self {
        RegistrarError::Configuration(format!("TOML parse error: {err}"))
    }
}
