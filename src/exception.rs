//! Reportable errors
//!
//! The reporter does not care about concrete error types. Anything that can
//! describe itself through [`Reportable`] can be captured. Type identity is
//! expressed as a list of kind tags: the error's own kind first, followed by
//! the kinds it specializes. Exclusion matches against any of them, which is
//! how "this error or any subtype of it" is expressed without runtime type
//! information.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

use serde::Serialize;

/// Error code sent as `status_code`; integer or free-form text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Code {
    Numeric(i64),
    Text(String),
}

impl Default for Code {
    fn default() -> Self {
        Code::Numeric(0)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Code::Numeric(n) => write!(f, "{n}"),
            Code::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for Code {
    fn from(n: i32) -> Self {
        Code::Numeric(i64::from(n))
    }
}

impl From<i64> for Code {
    fn from(n: i64) -> Self {
        Code::Numeric(n)
    }
}

impl From<&str> for Code {
    fn from(s: &str) -> Self {
        Code::Text(s.to_string())
    }
}

impl From<String> for Code {
    fn from(s: String) -> Self {
        Code::Text(s)
    }
}

/// An error value the reporter knows how to normalize
pub trait Reportable {
    /// Human-readable message, possibly empty
    fn message(&self) -> Cow<'_, str>;

    /// Explicit HTTP-style status code, when the error type carries one
    fn status_code(&self) -> Option<u16> {
        None
    }

    /// Generic error code, used when there is no status code
    fn code(&self) -> Code {
        Code::default()
    }

    /// Source file the error originated from
    fn file(&self) -> &str;

    /// Source line the error originated from
    fn line(&self) -> u32;

    /// Formatted stack trace
    fn stack_trace(&self) -> String;

    /// The error's own kind followed by every kind it specializes
    fn kinds(&self) -> Vec<&str>;

    /// Whether this error is `kind` or a subtype of it
    fn is_kind(&self, kind: &str) -> bool {
        self.kinds().into_iter().any(|k| k == kind)
    }
}

/// Owned snapshot of an error, ready to be reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedException {
    kinds: Vec<String>,
    message: String,
    status_code: Option<u16>,
    code: Code,
    file: String,
    line: u32,
    stack_trace: String,
}

impl CapturedException {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kinds: vec![kind.into()],
            message: message.into(),
            status_code: None,
            code: Code::default(),
            file: String::new(),
            line: 0,
            stack_trace: String::new(),
        }
    }

    /// Snapshot any standard error, using its Rust type name as the kind
    ///
    /// The location is the caller's and the stack trace lists the `source()`
    /// chain, one frame per cause. `std::any::type_name` output is not stable
    /// across compiler versions and reads `dyn core::error::Error` for trait
    /// objects, so exclusion lists should not rely on it; use
    /// [`from_error_as`](Self::from_error_as) when the kind must match.
    #[track_caller]
    pub fn from_error<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::from_error_as(std::any::type_name::<E>(), error)
    }

    /// Snapshot any standard error under an explicit kind
    #[track_caller]
    pub fn from_error_as<E>(kind: impl Into<String>, error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let location = Location::caller();
        Self::new(kind, error.to_string())
            .with_location(location.file(), location.line())
            .with_stack_trace(format_source_chain(error))
    }

    /// Declare a kind this error specializes
    pub fn with_ancestor(mut self, kind: impl Into<String>) -> Self {
        self.kinds.push(kind.into());
        self
    }

    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn with_code(mut self, code: impl Into<Code>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_location(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = file.into();
        self.line = line;
        self
    }

    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.stack_trace = stack_trace.into();
        self
    }
}

impl Reportable for CapturedException {
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.message)
    }

    fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    fn code(&self) -> Code {
        self.code.clone()
    }

    fn file(&self) -> &str {
        &self.file
    }

    fn line(&self) -> u32 {
        self.line
    }

    fn stack_trace(&self) -> String {
        self.stack_trace.clone()
    }

    fn kinds(&self) -> Vec<&str> {
        self.kinds.iter().map(String::as_str).collect()
    }
}

/// Render an error's cause chain as `#0 ...`, `#1 ...` frames
fn format_source_chain<E>(error: &E) -> String
where
    E: std::error::Error + ?Sized,
{
    let mut frames = vec![format!("#0 {error}")];
    let mut source = error.source();
    while let Some(cause) = source {
        frames.push(format!("#{} {cause}", frames.len()));
        source = cause.source();
    }
    frames.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("disk full")
        }
    }

    impl std::error::Error for Inner {}

    #[derive(Debug)]
    struct Outer(Inner);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("could not save upload")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_kinds_include_ancestors() {
        let err = CapturedException::new("EmailTaken", "taken").with_ancestor("ValidationError");

        assert_eq!(err.kinds(), vec!["EmailTaken", "ValidationError"]);
        assert!(err.is_kind("EmailTaken"));
        assert!(err.is_kind("ValidationError"));
        assert!(!err.is_kind("NotFound"));
    }

    #[test]
    fn test_defaults() {
        let err = CapturedException::new("Boom", "");

        assert_eq!(err.status_code(), None);
        assert_eq!(err.code(), Code::Numeric(0));
        assert_eq!(err.line(), 0);
        assert!(err.file().is_empty());
    }

    #[test]
    fn test_from_error_captures_chain_and_location() {
        let err = CapturedException::from_error(&Outer(Inner));
        let line = line!() - 1;

        assert!(err.kinds()[0].ends_with("Outer"));
        assert_eq!(err.message(), "could not save upload");
        assert!(err.file().ends_with("exception.rs"));
        assert_eq!(err.line(), line);
        assert_eq!(err.stack_trace(), "#0 could not save upload\n#1 disk full");
    }

    #[test]
    fn test_from_error_as_uses_given_kind() {
        let boxed: Box<dyn std::error::Error> = Box::new(Outer(Inner));
        let err = CapturedException::from_error_as("UploadError", &*boxed)
            .with_ancestor("StorageError");
        let line = line!() - 2;

        assert_eq!(err.kinds(), vec!["UploadError", "StorageError"]);
        assert!(err.is_kind("StorageError"));
        assert_eq!(err.line(), line);
        assert_eq!(err.stack_trace(), "#0 could not save upload\n#1 disk full");
    }

    #[test]
    fn test_code_display_and_serialize() {
        assert_eq!(Code::from(500).to_string(), "500");
        assert_eq!(Code::from("HY000").to_string(), "HY000");
        assert_eq!(serde_json::to_string(&Code::Numeric(42)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&Code::from("E1")).unwrap(), "\"E1\"");
    }
}
