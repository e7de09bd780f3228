//! Request context attached to captured errors
//!
//! Environment name and request URL are passed in explicitly. Outside of a
//! request both may be absent, in which case the reporter falls back to the
//! configured environment and an empty URL.

use actix_web::dev::ServiceRequest;
use actix_web::http::Uri;
use actix_web::HttpRequest;

use crate::utils::full_url;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Application environment name (e.g. `production`, `local`)
    pub environment: String,

    /// Full URL of the current request, query string included
    pub url: String,
}

impl RequestContext {
    pub fn new(environment: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            url: url.into(),
        }
    }

    /// Context for an Actix request
    pub fn from_request(req: &HttpRequest, environment: impl Into<String>) -> Self {
        let info = req.connection_info();
        Self::new(environment, full_url(info.scheme(), info.host(), path_and_query(req.uri())))
    }

    /// Context for a request still travelling through the middleware chain
    pub fn from_service_request(req: &ServiceRequest, environment: impl Into<String>) -> Self {
        let info = req.connection_info();
        Self::new(environment, full_url(info.scheme(), info.host(), path_and_query(req.uri())))
    }
}

fn path_and_query(uri: &Uri) -> &str {
    uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/")
}
