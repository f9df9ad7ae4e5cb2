//! Model dispatch
//!
//! Sends one request to every configured model concurrently and collects
//! exactly one result per model.

use crate::config::DispatchParams;
use crate::ports::model_transport::ModelTransport;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use jargon_domain::{
    AggregatedResponse, Credential, ExplainRequest, ModelCatalog, ModelResult, ResultStatus,
    aggregate,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Fans one request out to every model in the catalog
pub struct ModelDispatcher<T: ModelTransport + 'static> {
    transport: Arc<T>,
    catalog: Arc<ModelCatalog>,
    params: DispatchParams,
}

impl<T: ModelTransport + 'static> ModelDispatcher<T> {
    pub fn new(transport: Arc<T>, catalog: Arc<ModelCatalog>) -> Self {
        Self {
            transport,
            catalog,
            params: DispatchParams::default(),
        }
    }

    pub fn with_params(mut self, params: DispatchParams) -> Self {
        self.params = params;
        self
    }

    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    pub fn params(&self) -> &DispatchParams {
        &self.params
    }

    pub(crate) fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    /// Dispatch with default (no-op) progress
    pub async fn dispatch_all(
        &self,
        request: &ExplainRequest,
        credential: &Credential,
    ) -> AggregatedResponse {
        self.dispatch_all_with_progress(request, credential, &NoProgress)
            .await
    }

    /// Query all models in parallel and wait for every one of them.
    ///
    /// Each call is bounded by the configured timeout; a slow or failing model
    /// only affects its own entry.
    pub async fn dispatch_all_with_progress(
        &self,
        request: &ExplainRequest,
        credential: &Credential,
        progress: &dyn ProgressNotifier,
    ) -> AggregatedResponse {
        info!(
            term = %request.term,
            temperature = %request.temperature,
            "Dispatching to {} models",
            self.catalog.len()
        );
        progress.on_dispatch_start(&request.term, self.catalog.len());

        let mut join_set = JoinSet::new();

        for spec in self.catalog.specs() {
            let transport = Arc::clone(&self.transport);
            let spec = spec.clone();
            let request = request.clone();
            let credential = credential.clone();
            let timeout = self.params.timeout;

            join_set.spawn(async move {
                let started = Instant::now();
                match tokio::time::timeout(
                    timeout,
                    transport.send_prompt(&spec, &request, &credential),
                )
                .await
                {
                    Ok(result) => result,
                    Err(_) => ModelResult::failure(
                        &spec,
                        ResultStatus::Timeout,
                        format!("no response within {:.1}s", timeout.as_secs_f64()),
                    )
                    .with_latency_ms(started.elapsed().as_millis() as u64),
                }
            });
        }

        let mut results = Vec::with_capacity(self.catalog.len());

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(result) => {
                    if result.is_ok() {
                        debug!(
                            model = %result.model_id,
                            latency_ms = ?result.latency_ms,
                            "Model responded successfully"
                        );
                    } else {
                        warn!(
                            model = %result.model_id,
                            status = %result.status,
                            "Model failed: {}",
                            result.detail.as_deref().unwrap_or("unknown")
                        );
                    }
                    progress.on_model_complete(&result);
                    results.push(result);
                }
                Err(e) => {
                    warn!("Dispatch task join error: {}", e);
                }
            }
        }

        let response = aggregate(
            &self.catalog,
            request.term.clone(),
            request.temperature,
            results,
        );
        progress.on_dispatch_complete(&response);
        response
    }
}
