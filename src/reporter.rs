//! Exception reporting
//!
//! [`ExceptionReporter`] decides whether an error is worth reporting, turns it
//! into an [`ExceptionRecord`] and posts it to the logging server. Delivery is
//! best effort: whatever goes wrong on the wire is dropped here and never
//! reaches the caller.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::client::RemoteClient;
use crate::config::Config;
use crate::context::RequestContext;
use crate::exception::Reportable;
use crate::payload::ExceptionRecord;

/// Endpoint receiving captured errors
pub const LOGS_PATH: &str = "projects/error/logs";

/// Endpoint receiving failed background jobs
pub const FAILED_JOB_PATH: &str = "projects/error/failed-job";

/// Forwards errors and failed jobs to the remote logging server
///
/// Cheap to clone; clones share the configuration and the connection pool.
#[derive(Debug, Clone)]
pub struct ExceptionReporter {
    config: Arc<Config>,
    client: RemoteClient,
}

impl ExceptionReporter {
    /// Build a reporter. Never fails, whatever the URL or token look like.
    pub fn new(config: Config) -> Self {
        Self::from_arc(config.into_arc())
    }

    /// Build a reporter around an already shared configuration
    pub fn from_arc(config: Arc<Config>) -> Self {
        if !config.enabled {
            info!("remote logging disabled");
        } else if config.base_url.is_empty() {
            warn!("remote logging enabled without a base URL; reports will be dropped");
        } else {
            info!(
                base_url = %config.base_url,
                dont_report = config.dont_report.len(),
                "remote logging enabled"
            );
        }

        let client = RemoteClient::new(&config);
        Self { config, client }
    }

    /// Configuration the reporter was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether reports are delivered at all
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Report an error to `projects/error/logs`
    ///
    /// Does nothing when reporting is disabled or the error's kind is
    /// excluded. Without a request context the configured environment is
    /// used and the URL is left empty.
    pub async fn capture_exception<E>(&self, exception: &E, context: Option<&RequestContext>)
    where
        E: Reportable + ?Sized,
    {
        if !self.config.enabled {
            return;
        }

        if self.shouldnt_report(exception) {
            debug!(kinds = ?exception.kinds(), "error kind excluded from remote logging");
            return;
        }

        let record = match context {
            Some(context) => ExceptionRecord::from_exception(exception, context),
            None => {
                let fallback = RequestContext::new(self.config.environment.clone(), String::new());
                ExceptionRecord::from_exception(exception, &fallback)
            }
        };

        self.send_to(LOGS_PATH, &record).await;
    }

    /// Forward a caller-built failed job record to `projects/error/failed-job`
    ///
    /// `data` is sent as-is, field for field.
    pub async fn send_failed_job<T>(&self, data: &T)
    where
        T: Serialize + ?Sized,
    {
        if !self.config.enabled {
            return;
        }

        self.send_to(FAILED_JOB_PATH, data).await;
    }

    /// Whether `exception` passes the exclusion list
    ///
    /// Ignores the enabled flag so callers can filter up front.
    pub fn should_report<E>(&self, exception: &E) -> bool
    where
        E: Reportable + ?Sized,
    {
        !self.shouldnt_report(exception)
    }

    fn shouldnt_report<E>(&self, exception: &E) -> bool
    where
        E: Reportable + ?Sized,
    {
        self.config
            .dont_report
            .iter()
            .any(|kind| exception.is_kind(kind))
    }

    async fn send_to<T>(&self, path: &str, data: &T)
    where
        T: Serialize + ?Sized,
    {
        let _ = self.client.post_form(path, data).await;
    }
}
