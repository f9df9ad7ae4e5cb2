use super::TransportAdapter;
use async_trait::async_trait;
use jargon_application::{ModelTransport, TransportError};
use jargon_domain::{Credential, ExplainRequest, ModelSpec};
use std::sync::Arc;

/// Sends each model's request through the adapter matching its
/// [`Transport`](jargon_domain::Transport)
pub struct TransportRouter {
    adapters: Vec<Arc<dyn TransportAdapter>>,
}

impl TransportRouter {
    pub fn new(adapters: Vec<Arc<dyn TransportAdapter>>) -> Self {
        Self { adapters }
    }

    fn resolve_adapter(&self, spec: &ModelSpec) -> Result<&dyn TransportAdapter, TransportError> {
        self.adapters
            .iter()
            .find(|a| a.kind() == spec.transport)
            .map(|a| a.as_ref())
            .ok_or_else(|| {
                TransportError::Unsupported(format!(
                    "no adapter for {} (model {})",
                    spec.transport.as_str(),
                    spec.id
                ))
            })
    }
}

#[async_trait]
impl ModelTransport for TransportRouter {
    async fn complete(
        &self,
        spec: &ModelSpec,
        request: &ExplainRequest,
        credential: &Credential,
    ) -> Result<String, TransportError> {
        self.resolve_adapter(spec)?
            .complete(spec, request, credential)
            .await
    }
}
