//! Utility functions for the remote logging SDK
//!
//! Helpers for ids, timestamps, message defaults and URL assembly.

use chrono::Utc;
use uuid::Uuid;

/// Message sent when an error has nothing to say for itself
pub const EMPTY_MESSAGE_PLACEHOLDER: &str = "Not applicable";

/// Generate a unique id for a failed job record
///
/// Uses UUID v4 for guaranteed uniqueness across distributed systems.
pub fn generate_job_id() -> String {
    Uuid::new_v4().to_string()
}

/// Get current timestamp in RFC3339 format
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339()
}

/// Use the placeholder for empty or whitespace-only messages
pub fn message_or_placeholder(message: &str) -> String {
    if message.trim().is_empty() {
        EMPTY_MESSAGE_PLACEHOLDER.to_string()
    } else {
        message.to_string()
    }
}

/// Assemble `scheme://host/path?query` from its parts
pub fn full_url(scheme: &str, host: &str, path_and_query: &str) -> String {
    format!("{}://{}{}", scheme, host, path_and_query)
}
