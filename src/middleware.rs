//! Actix-Web middleware for remote error logging
//!
//! Hooks the reporter into the request pipeline: any error produced by the
//! wrapped service (returned directly, or carried by an error response) is
//! captured together with the request URL before the response goes out. The
//! response itself is passed through untouched.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures::future::{ok, LocalBoxFuture, Ready};

use crate::config::Config;
use crate::context::RequestContext;
use crate::exception::CapturedException;
use crate::reporter::ExceptionReporter;

/// Kind shared by every error captured from the HTTP pipeline
pub const HTTP_ERROR_KIND: &str = "HttpError";

/// Remote logging middleware for Actix-Web
///
/// Add this middleware to your Actix app via `.wrap()`:
///
/// ```rust,no_run
/// use actix_web::App;
/// use remote_logging_actix::{Config, RemoteLoggingMiddleware};
///
/// let config = Config::new(true, "https://logs.example.com/", "token");
/// let app = App::new().wrap(RemoteLoggingMiddleware::with_config(config));
/// ```
pub struct RemoteLoggingMiddleware {
    reporter: ExceptionReporter,
}

impl RemoteLoggingMiddleware {
    /// Build from environment variables
    pub fn from_env() -> Result<Self, crate::error::ReportError> {
        Ok(Self::with_config(Config::from_env()?))
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_reporter(ExceptionReporter::new(config))
    }

    /// Share an existing reporter (and its connection pool)
    pub fn with_reporter(reporter: ExceptionReporter) -> Self {
        Self { reporter }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RemoteLoggingMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RemoteLoggingMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(RemoteLoggingMiddlewareService {
            service,
            reporter: self.reporter.clone(),
        })
    }
}

/// The actual service that handles each request
pub struct RemoteLoggingMiddlewareService<S> {
    service: S,
    reporter: ExceptionReporter,
}

impl<S, B> Service<ServiceRequest> for RemoteLoggingMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Disabled: no context capture, no extra work per request
        if !self.reporter.is_enabled() {
            return Box::pin(self.service.call(req));
        }

        let environment = self.reporter.config().environment.clone();
        let context = RequestContext::from_service_request(&req, environment);
        let reporter = self.reporter.clone();
        let fut = self.service.call(req);

        Box::pin(async move {
            match fut.await {
                Ok(res) => {
                    let captured = res.response().error().map(capture_http_error);
                    if let Some(exception) = captured {
                        reporter.capture_exception(&exception, Some(&context)).await;
                    }
                    Ok(res)
                }
                Err(err) => {
                    let exception = capture_http_error(&err);
                    reporter.capture_exception(&exception, Some(&context)).await;
                    Err(err)
                }
            }
        })
    }
}

/// Snapshot an Actix error
///
/// Kinds are `HttpError(<status>)` then `HttpError`, so exclusion lists can
/// drop a single status or every HTTP error at once.
pub fn capture_http_error(err: &Error) -> CapturedException {
    let status = err.as_response_error().status_code();
    CapturedException::new(format!("{}({})", HTTP_ERROR_KIND, status.as_u16()), err.to_string())
        .with_ancestor(HTTP_ERROR_KIND)
        .with_status_code(status.as_u16())
        .with_stack_trace(format!("#0 {:?}", err))
}
