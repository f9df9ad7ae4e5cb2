//! Model transport port
//!
//! Defines the interface for sending one prompt to one model.

use async_trait::async_trait;
use jargon_domain::{Credential, ExplainRequest, ModelResult, ModelSpec, ResultStatus};
use std::time::Instant;
use thiserror::Error;

/// Errors that can occur during a single model call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("HTTP {status}: {message}")]
    Unauthorized { status: u16, message: String },

    #[error("HTTP 429: {0}")]
    RateLimited(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Transport not available: {0}")]
    Unsupported(String),
}

impl TransportError {
    /// Classify a non-success HTTP status
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => TransportError::Unauthorized { status, message },
            429 => TransportError::RateLimited(message),
            _ => TransportError::Http { status, message },
        }
    }

    /// Result category this error is reported as
    pub fn status(&self) -> ResultStatus {
        match self {
            TransportError::Unauthorized { .. } => ResultStatus::AuthError,
            TransportError::RateLimited(_) => ResultStatus::RateLimited,
            TransportError::Timeout => ResultStatus::Timeout,
            TransportError::Http { .. }
            | TransportError::Connection(_)
            | TransportError::MalformedResponse(_)
            | TransportError::Unsupported(_) => ResultStatus::TransportError,
        }
    }
}

/// Capability to send the explain prompt to one model.
///
/// Implementations (adapters) live in the infrastructure layer, one per
/// [`Transport`](jargon_domain::Transport) kind.
#[async_trait]
pub trait ModelTransport: Send + Sync {
    /// Send the request and return the explanation text
    async fn complete(
        &self,
        spec: &ModelSpec,
        request: &ExplainRequest,
        credential: &Credential,
    ) -> Result<String, TransportError>;

    /// Send the request and capture any failure as a [`ModelResult`].
    ///
    /// Never fails: errors become a result with the matching status, and the
    /// call's latency is always recorded.
    async fn send_prompt(
        &self,
        spec: &ModelSpec,
        request: &ExplainRequest,
        credential: &Credential,
    ) -> ModelResult {
        let started = Instant::now();
        let result = match self.complete(spec, request, credential).await {
            Ok(text) => ModelResult::ok(spec, text),
            Err(e) => ModelResult::failure(spec, e.status(), e.to_string()),
        };
        result.with_latency_ms(started.elapsed().as_millis() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jargon_domain::{ModelId, Temperature, Term};

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            TransportError::from_status(401, "bad token").status(),
            ResultStatus::AuthError
        );
        assert_eq!(
            TransportError::from_status(403, "forbidden").status(),
            ResultStatus::AuthError
        );
        assert_eq!(
            TransportError::from_status(429, "slow down").status(),
            ResultStatus::RateLimited
        );
        assert_eq!(
            TransportError::from_status(500, "oops").status(),
            ResultStatus::TransportError
        );
        assert_eq!(
            TransportError::from_status(404, "unknown model").status(),
            ResultStatus::TransportError
        );
        assert_eq!(TransportError::Timeout.status(), ResultStatus::Timeout);
        assert_eq!(
            TransportError::MalformedResponse("no choices".into()).status(),
            ResultStatus::TransportError
        );
    }

    struct Failing(TransportError);

    #[async_trait]
    impl ModelTransport for Failing {
        async fn complete(
            &self,
            _spec: &ModelSpec,
            _request: &ExplainRequest,
            _credential: &Credential,
        ) -> Result<String, TransportError> {
            Err(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_send_prompt_captures_failure() {
        let spec = ModelSpec::default_for(ModelId::Mistral);
        let request = ExplainRequest::new(Term::new("dns").unwrap(), Temperature::default());
        let credential = Credential::new("token").unwrap();

        let result = Failing(TransportError::from_status(429, "quota"))
            .send_prompt(&spec, &request, &credential)
            .await;

        assert_eq!(result.model_id, ModelId::Mistral);
        assert_eq!(result.status, ResultStatus::RateLimited);
        assert!(result.text.is_none());
        assert!(result.latency_ms.is_some());
        assert_eq!(result.detail.as_deref(), Some("HTTP 429: quota"));
    }
}
