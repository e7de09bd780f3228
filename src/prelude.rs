//! Convenience re-exports for easy importing
//!
//! Import everything you need with:
//! ```rust
//! use remote_logging_actix::prelude::*;
//! ```

pub use crate::config::Config;
pub use crate::context::RequestContext;
pub use crate::error::ReportError;
pub use crate::exception::{CapturedException, Code, Reportable};
pub use crate::middleware::RemoteLoggingMiddleware;
pub use crate::payload::FailedJob;
pub use crate::reporter::ExceptionReporter;
