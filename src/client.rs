//! HTTP client for the remote logging server
//!
//! Holds one reqwest client configured with the SDK's default headers and
//! posts form-encoded bodies to paths relative to the configured base URL.
//! Building the client never fails; a bad URL or token shows up as an error
//! from [`RemoteClient::post_form`] instead.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::Serialize;
use url::Url;

use crate::config::Config;
use crate::error::{ReportError, Result};

/// Upper bound for a single delivery attempt
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Form-posting client bound to a base URL and bearer token
#[derive(Debug, Clone)]
pub struct RemoteClient {
    client: Client,
    base_url: String,
    token: String,
}

impl RemoteClient {
    pub fn new(config: &Config) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "remote logging client fell back to defaults");
                Client::new()
            });

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Resolve `path` against the base URL
    ///
    /// Follows RFC 3986 reference resolution, so a base of
    /// `https://host/api/` yields `https://host/api/<path>` while
    /// `https://host/api` yields `https://host/<path>`.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let base = Url::parse(&self.base_url)?;
        Ok(base.join(path)?)
    }

    /// POST `data` as `application/x-www-form-urlencoded` to `path`
    ///
    /// # Returns
    /// * `Ok(())` - the server answered with a 2xx status
    /// * `Err(ReportError)` - invalid URL, network failure, encoding failure or non-2xx status
    pub async fn post_form<T>(&self, path: &str, data: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.endpoint(path)?;

        let response = self
            .client
            .post(endpoint)
            .bearer_auth(&self.token)
            .form(data)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ReportError::SendFailed(response.status()));
        }

        Ok(())
    }
}
