//! Error types for the remote logging SDK
//!
//! Configuration errors surface from [`Config::from_env`](crate::Config::from_env).
//! Delivery errors are produced by the HTTP client and discarded by the
//! reporter, so they never reach the host application.

use thiserror::Error;

/// Main error type for remote logging operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// A configuration value could not be parsed
    #[error("Invalid configuration: {key} = {value:?}")]
    InvalidConfig { key: String, value: String },

    /// The base URL (or the path joined onto it) is not a valid URL
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Network-related errors (connection, DNS, timeout, body encoding)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status code
    #[error("Failed to send report: HTTP {0}")]
    SendFailed(reqwest::StatusCode),

    /// JSON serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ReportError {
    pub fn invalid_config(key: impl Into<String>, value: impl Into<String>) -> Self {
        ReportError::InvalidConfig {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, ReportError>;
