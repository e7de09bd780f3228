//! # Remote Logging for Actix
//!
//! Forwards application errors and failed background jobs to a remote
//! logging server over HTTP.
//!
//! - **Filtered**: error kinds listed in `REMOTE_LOGGING_DONT_REPORT` (or any of
//!   their subtypes) are never sent
//! - **Flat**: every error becomes a single form-encoded record
//! - **Fail-safe**: delivery errors are swallowed and never reach your app
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use remote_logging_actix::{CapturedException, Config, ExceptionReporter};
//!
//! # async fn example() -> Result<(), remote_logging_actix::ReportError> {
//! let reporter = ExceptionReporter::new(Config::from_env()?);
//!
//! let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
//! reporter
//!     .capture_exception(&CapturedException::from_error(&err), None)
//!     .await;
//! # Ok(())
//! # }
//! ```
//!
//! In an Actix app, wrap the app with [`RemoteLoggingMiddleware`] to report
//! every error response automatically.
//!
//! ## Configuration
//!
//! - `REMOTE_LOGGING_ENABLED`: set to `false` to turn reporting off
//! - `REMOTE_LOGGING_URL`: base URL of the logging server
//! - `REMOTE_LOGGING_TOKEN`: bearer token
//! - `REMOTE_LOGGING_DONT_REPORT`: comma-separated error kinds to skip
//! - `APP_ENV`: environment name sent with every report
//!
//! ## Endpoints
//!
//! - `POST projects/error/logs`: fields `type`, `status_code`, `error`, `file`,
//!   `line`, `stacktrace`, `env`, `url`
//! - `POST projects/error/failed-job`: the caller's fields, unchanged

pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod exception;
pub mod middleware;
pub mod payload;
pub mod reporter;
pub mod utils;

// Re-export main components for easy access
pub use config::Config;
pub use context::RequestContext;
pub use error::ReportError;
pub use exception::{CapturedException, Code, Reportable};
pub use middleware::RemoteLoggingMiddleware;
pub use payload::{ExceptionRecord, FailedJob};
pub use reporter::ExceptionReporter;

pub mod prelude;
