//! Per-model results and the aggregated response.
//!
//! - [`ModelResult`] - one model's outcome for one submission
//! - [`AggregatedResponse`] - all results in display order

use crate::core::model::{ModelId, ModelSpec};
use crate::core::temperature::Temperature;
use crate::core::term::Term;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome category of a single model call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    Ok,
    /// HTTP 401 or 403
    AuthError,
    /// HTTP 429
    RateLimited,
    /// Network failure, unexpected status, or unusable response body
    TransportError,
    Timeout,
}

impl ResultStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, ResultStatus::Ok)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResultStatus::Ok => "ok",
            ResultStatus::AuthError => "authorization failed",
            ResultStatus::RateLimited => "rate limited",
            ResultStatus::TransportError => "transport error",
            ResultStatus::Timeout => "timed out",
        }
    }
}

impl std::fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One model's answer (or failure) for one submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelResult {
    pub model_id: ModelId,
    pub display_name: String,
    pub status: ResultStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    /// Failure reason for non-Ok results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ModelResult {
    /// Creates a successful result.
    pub fn ok(spec: &ModelSpec, text: impl Into<String>) -> Self {
        Self {
            model_id: spec.id,
            display_name: spec.display_name.clone(),
            status: ResultStatus::Ok,
            text: Some(text.into()),
            latency_ms: None,
            detail: None,
        }
    }

    /// Creates a failed result.
    ///
    /// # Arguments
    /// * `status` - Failure category (must not be [`ResultStatus::Ok`])
    /// * `detail` - Description of why the call failed
    pub fn failure(spec: &ModelSpec, status: ResultStatus, detail: impl Into<String>) -> Self {
        debug_assert!(!status.is_ok(), "failure() called with Ok status");
        Self {
            model_id: spec.id,
            display_name: spec.display_name.clone(),
            status,
            text: None,
            latency_ms: None,
            detail: Some(detail.into()),
        }
    }

    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        self.latency_ms = Some(latency_ms);
        self
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    /// Text for a failed column: `this model failed: <reason>`
    pub fn failure_message(&self) -> Option<String> {
        if self.is_ok() {
            return None;
        }
        Some(match &self.detail {
            Some(detail) => format!("this model failed: {} ({})", self.status, detail),
            None => format!("this model failed: {}", self.status),
        })
    }
}

/// All model results for one submission, in catalog order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedResponse {
    pub term: Term,
    pub temperature: Temperature,
    pub results: Vec<ModelResult>,
    pub generated_at: DateTime<Utc>,
}

impl AggregatedResponse {
    pub fn successful(&self) -> impl Iterator<Item = &ModelResult> {
        self.results.iter().filter(|r| r.is_ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &ModelResult> {
        self.results.iter().filter(|r| !r.is_ok())
    }

    pub fn get(&self, id: ModelId) -> Option<&ModelResult> {
        self.results.iter().find(|r| r.model_id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message() {
        let spec = ModelSpec::default_for(ModelId::Grok);
        let result = ModelResult::failure(&spec, ResultStatus::RateLimited, "HTTP 429");
        assert_eq!(
            result.failure_message().unwrap(),
            "this model failed: rate limited (HTTP 429)"
        );
        assert!(ModelResult::ok(&spec, "hi").failure_message().is_none());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&ResultStatus::RateLimited).unwrap();
        assert_eq!(json, "\"rate_limited\"");
    }

    #[test]
    fn test_ok_result_skips_empty_fields() {
        let spec = ModelSpec::default_for(ModelId::Gpt);
        let json = serde_json::to_value(ModelResult::ok(&spec, "text").with_latency_ms(12)).unwrap();
        assert_eq!(json["model_id"], "gpt");
        assert_eq!(json["latency_ms"], 12);
        assert!(json.get("detail").is_none());
    }
}
