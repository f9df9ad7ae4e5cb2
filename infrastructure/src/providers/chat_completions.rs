//! Structured chat-completions client against an inference base endpoint

use super::TransportAdapter;
use super::wire::{ChatRequest, post_chat};
use async_trait::async_trait;
use jargon_application::{ModelTransport, TransportError};
use jargon_domain::{Credential, ExplainRequest, ModelSpec, Transport};
use std::time::Duration;
use tracing::debug;

const COMPLETIONS_PATH: &str = "chat/completions";

/// Posts to `<spec.endpoint>/chat/completions`; the model is chosen by the
/// `model` field of the body, so several models can share one endpoint
pub struct ChatCompletionsTransport {
    client: reqwest::Client,
}

impl ChatCompletionsTransport {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: super::build_client(timeout)?,
        })
    }

    fn completions_url(endpoint: &str) -> String {
        format!("{}/{}", endpoint.trim_end_matches('/'), COMPLETIONS_PATH)
    }
}

#[async_trait]
impl ModelTransport for ChatCompletionsTransport {
    async fn complete(
        &self,
        spec: &ModelSpec,
        request: &ExplainRequest,
        credential: &Credential,
    ) -> Result<String, TransportError> {
        let url = Self::completions_url(&spec.endpoint);
        debug!(model = %spec.id, %url, wire_model = %spec.model, "Chat completions request");
        let body = ChatRequest::build(spec, request);
        post_chat(&self.client, &url, credential, &body).await
    }
}

impl TransportAdapter for ChatCompletionsTransport {
    fn kind(&self) -> Transport {
        Transport::ChatCompletionsClient
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::stub_server::{OK_BODY, serve_once};
    use jargon_domain::{ModelId, ResultStatus, Temperature, Term};

    fn spec_at(id: ModelId, url: &str) -> ModelSpec {
        let mut spec = ModelSpec::default_for(id);
        spec.endpoint = format!("{}/inference/", url);
        spec
    }

    fn request() -> ExplainRequest {
        ExplainRequest::new(Term::new("kubernetes").unwrap(), Temperature::new(0.9).unwrap())
    }

    #[test]
    fn test_completions_url() {
        assert_eq!(
            ChatCompletionsTransport::completions_url("https://models.github.ai/inference"),
            "https://models.github.ai/inference/chat/completions"
        );
        assert_eq!(
            ChatCompletionsTransport::completions_url("https://models.github.ai/inference/"),
            "https://models.github.ai/inference/chat/completions"
        );
    }

    #[tokio::test]
    async fn sends_model_and_sampling_settings() {
        let (url, server) = serve_once(200, OK_BODY).await;
        let transport = ChatCompletionsTransport::new(Duration::from_secs(5)).unwrap();

        let text = transport
            .complete(
                &spec_at(ModelId::Grok, &url),
                &request(),
                &Credential::new("ghp_test").unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(text, "Think of it as a bouncer.");

        let captured = server.await.unwrap();
        assert_eq!(
            captured.request_line(),
            "POST /inference/chat/completions HTTP/1.1"
        );
        assert_eq!(captured.header("authorization"), Some("Bearer ghp_test"));
        let json = captured.json();
        assert_eq!(json["model"], "xai/grok-3");
        assert_eq!(json["temperature"].as_f64().unwrap() as f32, 0.9);
        assert_eq!(json["top_p"], 1.0);
        assert_eq!(json["max_tokens"], 500);
    }

    #[tokio::test]
    async fn rate_limit_maps_to_rate_limited() {
        let (url, _server) = serve_once(
            429,
            r#"{"error":{"code":"RateLimitReached","message":"Please wait 42 seconds"}}"#,
        )
        .await;
        let transport = ChatCompletionsTransport::new(Duration::from_secs(5)).unwrap();

        let result = transport
            .send_prompt(
                &spec_at(ModelId::Mistral, &url),
                &request(),
                &Credential::new("ghp_test").unwrap(),
            )
            .await;
        assert_eq!(result.status, ResultStatus::RateLimited);
        assert!(result.text.is_none());
        assert!(result.detail.as_deref().unwrap().contains("42 seconds"));
    }

    #[tokio::test]
    async fn missing_choices_is_transport_error() {
        let (url, _server) = serve_once(200, r#"{"choices":[]}"#).await;
        let transport = ChatCompletionsTransport::new(Duration::from_secs(5)).unwrap();

        let err = transport
            .complete(
                &spec_at(ModelId::Mistral, &url),
                &request(),
                &Credential::new("ghp_test").unwrap(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::MalformedResponse(_)));
    }
}
