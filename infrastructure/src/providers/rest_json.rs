//! REST transport: plain JSON POST to a fully qualified chat-completions URL

use super::TransportAdapter;
use super::wire::{ChatRequest, post_chat};
use async_trait::async_trait;
use jargon_application::{ModelTransport, TransportError};
use jargon_domain::{Credential, ExplainRequest, ModelSpec, Transport};
use std::time::Duration;
use tracing::debug;

/// Posts to `spec.endpoint` as-is
pub struct RestJsonTransport {
    client: reqwest::Client,
}

impl RestJsonTransport {
    /// Build with a pooled client; `timeout` bounds each request
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: super::build_client(timeout)?,
        })
    }
}

#[async_trait]
impl ModelTransport for RestJsonTransport {
    async fn complete(
        &self,
        spec: &ModelSpec,
        request: &ExplainRequest,
        credential: &Credential,
    ) -> Result<String, TransportError> {
        debug!(model = %spec.id, url = %spec.endpoint, "REST request");
        let body = ChatRequest::build(spec, request);
        post_chat(&self.client, &spec.endpoint, credential, &body).await
    }
}

impl TransportAdapter for RestJsonTransport {
    fn kind(&self) -> Transport {
        Transport::RestJson
    }
}
