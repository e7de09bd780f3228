//! Report payloads
//!
//! [`ExceptionRecord`] is the flat form body sent for every captured error.
//! [`FailedJob`] is an optional helper for callers that want a conventional
//! shape for failed background jobs; the reporter forwards whatever mapping it
//! is handed and does not depend on this type.

use serde::Serialize;

use crate::context::RequestContext;
use crate::error::Result;
use crate::exception::{Code, Reportable};
use crate::utils::{current_timestamp, generate_job_id, message_or_placeholder};

/// Tag identifying the reporting framework on the server side
pub const SOURCE_TYPE: &str = "Laravel";

/// Form fields posted to `projects/error/logs`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExceptionRecord {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub status_code: Code,
    #[serde(rename = "error")]
    pub message: String,
    pub file: String,
    pub line: u32,
    #[serde(rename = "stacktrace")]
    pub stack_trace: String,
    #[serde(rename = "env")]
    pub environment: String,
    #[serde(rename = "url")]
    pub request_url: String,
}

impl ExceptionRecord {
    /// Normalize an error and its request context into a record
    ///
    /// The status code falls back to the generic code without any check that
    /// the latter is an HTTP status.
    pub fn from_exception<E>(exception: &E, context: &RequestContext) -> Self
    where
        E: Reportable + ?Sized,
    {
        let status_code = match exception.status_code() {
            Some(status) => Code::Numeric(i64::from(status)),
            None => exception.code(),
        };

        Self {
            kind: SOURCE_TYPE,
            status_code,
            message: message_or_placeholder(&exception.message()),
            file: exception.file().to_string(),
            line: exception.line(),
            stack_trace: exception.stack_trace(),
            environment: context.environment.clone(),
            request_url: context.url.clone(),
        }
    }
}

/// Conventional failed-job record
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FailedJob {
    pub uuid: String,
    pub connection: String,
    pub queue: String,
    /// Job payload as a JSON document
    pub payload: String,
    /// Failure message followed by its stack trace
    pub exception: String,
    pub failed_at: String,
}

impl FailedJob {
    pub fn new<E>(
        connection: impl Into<String>,
        queue: impl Into<String>,
        payload: &serde_json::Value,
        exception: &E,
    ) -> Result<Self>
    where
        E: Reportable + ?Sized,
    {
        Ok(Self {
            uuid: generate_job_id(),
            connection: connection.into(),
            queue: queue.into(),
            payload: serde_json::to_string(payload)?,
            exception: format!("{}\n{}", exception.message(), exception.stack_trace()),
            failed_at: current_timestamp(),
        })
    }
}
