//! Configuration management for the remote logging SDK
//!
//! Values are read once, when the reporter is built, and never change
//! afterwards. Only an explicit false flag disables reporting; a missing URL
//! or token is not validated here and simply makes every delivery fail
//! silently later on.

use std::sync::Arc;

use crate::error::{ReportError, Result};

pub const ENV_ENABLED: &str = "REMOTE_LOGGING_ENABLED";
pub const ENV_URL: &str = "REMOTE_LOGGING_URL";
pub const ENV_TOKEN: &str = "REMOTE_LOGGING_TOKEN";
pub const ENV_DONT_REPORT: &str = "REMOTE_LOGGING_DONT_REPORT";
pub const ENV_APP_ENV: &str = "APP_ENV";

/// Environment name used when `APP_ENV` is not set
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Configuration for the remote logging SDK
///
/// Loaded from environment variables:
/// - `REMOTE_LOGGING_ENABLED`: reporting switch (`true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`)
/// - `REMOTE_LOGGING_URL`: base URL of the logging server (e.g., https://logs.example.com/api/)
/// - `REMOTE_LOGGING_TOKEN`: bearer token sent with every request
/// - `REMOTE_LOGGING_DONT_REPORT`: comma-separated error kinds that are never reported
/// - `APP_ENV`: application environment name (defaults to `production`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether reports are delivered at all
    pub enabled: bool,

    /// Base URL that endpoint paths are resolved against
    pub base_url: String,

    /// Bearer token for the `Authorization` header
    pub token: String,

    /// Error kinds excluded from reporting, in configuration order
    pub dont_report: Vec<String>,

    /// Application environment name, used when no request context is given
    pub environment: String,
}

impl Config {
    /// Create configuration with explicit values (useful for testing)
    pub fn new(enabled: bool, base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            enabled,
            base_url: base_url.into(),
            token: token.into(),
            dont_report: Vec::new(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }

    /// Replace the list of excluded error kinds
    pub fn with_dont_report<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dont_report = kinds.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Keys are the same names `from_env` reads. Only a malformed
    /// `REMOTE_LOGGING_ENABLED` value is rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let enabled = match lookup(ENV_ENABLED).filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => parse_flag(&raw).ok_or_else(|| ReportError::invalid_config(ENV_ENABLED, raw))?,
            None => true,
        };

        let dont_report = lookup(ENV_DONT_REPORT)
            .map(|raw| parse_list(&raw))
            .unwrap_or_default();

        let environment = lookup(ENV_APP_ENV)
            .map(|env| env.trim().to_string())
            .filter(|env| !env.is_empty())
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        Ok(Self {
            enabled,
            base_url: lookup(ENV_URL).unwrap_or_default(),
            token: lookup(ENV_TOKEN).unwrap_or_default(),
            dont_report,
            environment,
        })
    }

    /// Wrap config in Arc for thread-safe sharing
    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

/// Parse a boolean switch
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|kind| !kind.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_full_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_ENABLED, "true"),
            (ENV_URL, "https://logs.example.com/api/"),
            (ENV_TOKEN, "secret"),
            (ENV_DONT_REPORT, "ValidationError, NotFound ,,"),
            (ENV_APP_ENV, "staging"),
        ]))
        .unwrap();

        assert!(config.enabled);
        assert_eq!(config.base_url, "https://logs.example.com/api/");
        assert_eq!(config.token, "secret");
        assert_eq!(config.dont_report, vec!["ValidationError", "NotFound"]);
        assert_eq!(config.environment, "staging");
    }

    #[test]
    fn test_config_unset_flag_stays_enabled() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert!(config.enabled);
        assert!(config.base_url.is_empty());
        assert!(config.token.is_empty());
        assert!(config.dont_report.is_empty());
        assert_eq!(config.environment, DEFAULT_ENVIRONMENT);
    }

    #[test]
    fn test_config_explicit_false_disables() {
        for raw in ["false", "0", "No", "OFF"] {
            let config = Config::from_lookup(lookup_from(&[(ENV_ENABLED, raw)])).unwrap();
            assert!(!config.enabled, "{raw:?} should disable reporting");
        }
    }

    #[test]
    fn test_config_blank_flag_counts_as_unset() {
        for raw in ["", "   "] {
            let config = Config::from_lookup(lookup_from(&[(ENV_ENABLED, raw)])).unwrap();
            assert!(config.enabled, "{raw:?} should leave reporting on");
        }
    }

    #[test]
    fn test_config_invalid_flag_is_error() {
        let err = Config::from_lookup(lookup_from(&[(ENV_ENABLED, "maybe")])).unwrap_err();
        assert!(matches!(err, ReportError::InvalidConfig { ref key, .. } if key == ENV_ENABLED));
    }

    #[test]
    fn test_config_builder_helpers() {
        let config = Config::new(true, "http://localhost:9999", "key")
            .with_dont_report(["ValidationError"])
            .with_environment("local");

        assert_eq!(config.dont_report, vec!["ValidationError".to_string()]);
        assert_eq!(config.environment, "local");

        let arc_config = config.into_arc();
        assert!(arc_config.enabled);
    }
}
