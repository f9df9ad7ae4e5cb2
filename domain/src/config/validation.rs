//! Structured configuration issues.
//!
//! Config loading never fails on a bad value silently: each problem is
//! reported as a [`ConfigIssue`] with a severity, and the caller decides
//! whether to abort (any [`Severity::Error`]) or just warn.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A model name or display name is blank.
    EmptyModelName { field: String },
    /// A model endpoint is blank or not an http(s) URL.
    InvalidEndpoint { field: String, value: String },
    /// Default temperature is outside the accepted range.
    TemperatureOutOfRange { value: String },
    /// Timeout of zero seconds.
    ZeroTimeout,
    /// The credential key name is blank.
    EmptyCredentialKey,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
