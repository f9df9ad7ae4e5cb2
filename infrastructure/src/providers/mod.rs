//! Model transports
//!
//! One adapter per [`Transport`] kind, plus a router that picks the adapter
//! for each [`ModelSpec`](jargon_domain::ModelSpec).

pub mod chat_completions;
pub mod rest_json;
pub mod routing;
mod wire;

#[cfg(test)]
pub(crate) mod stub_server;

use jargon_application::ModelTransport;
use jargon_domain::Transport;
use std::sync::Arc;
use std::time::Duration;

pub use chat_completions::ChatCompletionsTransport;
pub use rest_json::RestJsonTransport;
pub use routing::TransportRouter;
pub(crate) use wire::error_message;

const USER_AGENT: &str = concat!("jargon-buster/", env!("CARGO_PKG_VERSION"));

/// A [`ModelTransport`] that serves one transport kind
pub trait TransportAdapter: ModelTransport {
    fn kind(&self) -> Transport;
}

/// Pooled HTTP client shared by every request of one adapter
pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

/// Router with both built-in adapters
pub fn default_router(timeout: Duration) -> Result<TransportRouter, reqwest::Error> {
    let adapters: Vec<Arc<dyn TransportAdapter>> = vec![
        Arc::new(RestJsonTransport::new(timeout)?),
        Arc::new(ChatCompletionsTransport::new(timeout)?),
    ];
    Ok(TransportRouter::new(adapters))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::stub_server::{OK_BODY, serve_once};
    use jargon_application::{CheckModelsUseCase, Connectivity, ModelDispatcher};
    use jargon_domain::{CONNECTIVITY_MAX_TOKENS, Credential, ModelCatalog, ModelId, ModelSpec};

    fn spec_at(id: ModelId, url: &str) -> ModelSpec {
        let mut spec = ModelSpec::default_for(id);
        spec.endpoint = match spec.transport {
            Transport::RestJson => format!("{}/openai/deployments/gpt-4.1/chat/completions", url),
            Transport::ChatCompletionsClient => url.to_string(),
        };
        spec
    }

    #[tokio::test]
    async fn check_models_reports_each_endpoint() {
        let (gpt_url, gpt_server) = serve_once(200, OK_BODY).await;
        let (mistral_url, mistral_server) =
            serve_once(404, r#"{"error":{"message":"Unknown model"}}"#).await;
        let (grok_url, grok_server) =
            serve_once(401, r#"{"error":{"message":"Bad credentials"}}"#).await;

        let catalog = ModelCatalog::new(vec![
            spec_at(ModelId::Gpt, &gpt_url),
            spec_at(ModelId::Mistral, &mistral_url),
            spec_at(ModelId::Grok, &grok_url),
        ])
        .unwrap();
        let router = Arc::new(default_router(Duration::from_secs(5)).unwrap());
        let dispatcher = ModelDispatcher::new(router, Arc::new(catalog));

        let reports = CheckModelsUseCase::new(dispatcher, Credential::new("ghp_test").unwrap())
            .execute()
            .await;

        assert_eq!(reports.len(), 3);
        assert!(reports[0].connectivity.is_reachable());
        assert_eq!(reports[1].connectivity, Connectivity::WrongRoute { status: 404 });
        assert_eq!(reports[2].connectivity, Connectivity::Unauthorized { status: 401 });

        for server in [gpt_server, mistral_server, grok_server] {
            let captured = server.await.unwrap();
            let body = captured.json();
            assert_eq!(body["max_tokens"], CONNECTIVITY_MAX_TOKENS);
            assert_eq!(body["temperature"], 0.0);
            assert_eq!(captured.header("authorization"), Some("Bearer ghp_test"));
        }
    }
}
