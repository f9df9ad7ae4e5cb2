//! Check Models use case
//!
//! Sends a minimal completion to every configured model and reports whether
//! each one answers, without explaining anything.

use super::dispatch::ModelDispatcher;
use super::resolve_credential::{CredentialError, CredentialResolver};
use crate::ports::model_transport::{ModelTransport, TransportError};
use jargon_domain::{Credential, ExplainRequest, ModelId};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// How one model answered the connectivity request
#[derive(Debug, Clone, PartialEq)]
pub enum Connectivity {
    /// Completed; carries the model's reply
    Reachable { reply: String },
    /// 401 or 403: the token lacks access
    Unauthorized { status: u16 },
    /// 404 or 405: the endpoint exists but the route or deployment is wrong
    WrongRoute { status: u16 },
    /// Anything else, including timeouts and unreadable replies
    Failed { detail: String },
}

impl Connectivity {
    pub fn from_outcome(outcome: Result<String, TransportError>) -> Self {
        match outcome {
            Ok(reply) => Connectivity::Reachable { reply },
            Err(TransportError::Unauthorized { status, .. }) => {
                Connectivity::Unauthorized { status }
            }
            Err(TransportError::Http { status, .. }) if matches!(status, 404 | 405) => {
                Connectivity::WrongRoute { status }
            }
            Err(e) => Connectivity::Failed {
                detail: e.to_string(),
            },
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Connectivity::Reachable { .. })
    }
}

/// Connectivity of one model
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectivityReport {
    pub model_id: ModelId,
    pub display_name: String,
    pub connectivity: Connectivity,
    pub latency_ms: u64,
}

/// Use case for checking that every configured model answers
pub struct CheckModelsUseCase<T: ModelTransport + 'static> {
    dispatcher: ModelDispatcher<T>,
    credential: Credential,
}

impl<T: ModelTransport + 'static> CheckModelsUseCase<T> {
    pub fn new(dispatcher: ModelDispatcher<T>, credential: Credential) -> Self {
        Self {
            dispatcher,
            credential,
        }
    }

    /// Resolve the credential up front; fails before any model is contacted
    pub fn from_resolver(
        dispatcher: ModelDispatcher<T>,
        resolver: &CredentialResolver,
    ) -> Result<Self, CredentialError> {
        let credential = resolver.resolve()?;
        Ok(Self::new(dispatcher, credential))
    }

    /// Check every model concurrently; reports come back in display order
    pub async fn execute(&self) -> Vec<ConnectivityReport> {
        let request = ExplainRequest::connectivity_check();
        let timeout = self.dispatcher.params().timeout;
        let mut join_set = JoinSet::new();

        for spec in self.dispatcher.catalog().specs() {
            let transport = Arc::clone(self.dispatcher.transport());
            let spec = spec.clone();
            let request = request.clone();
            let credential = self.credential.clone();

            join_set.spawn(async move {
                let started = Instant::now();
                let outcome =
                    tokio::time::timeout(timeout, transport.complete(&spec, &request, &credential))
                        .await
                        .unwrap_or(Err(TransportError::Timeout));
                ConnectivityReport {
                    model_id: spec.id,
                    display_name: spec.display_name,
                    connectivity: Connectivity::from_outcome(outcome),
                    latency_ms: started.elapsed().as_millis() as u64,
                }
            });
        }

        let mut reports = Vec::with_capacity(self.dispatcher.catalog().len());
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(report) => {
                    debug!(model = %report.model_id, connectivity = ?report.connectivity, "Checked model");
                    reports.push(report);
                }
                Err(e) => warn!("Connectivity task join error: {}", e),
            }
        }

        // A panicked task still gets a line
        for spec in self.dispatcher.catalog().specs() {
            if !reports.iter().any(|r| r.model_id == spec.id) {
                reports.push(ConnectivityReport {
                    model_id: spec.id,
                    display_name: spec.display_name.clone(),
                    connectivity: Connectivity::Failed {
                        detail: "check did not complete".to_string(),
                    },
                    latency_ms: 0,
                });
            }
        }
        reports.sort_by_key(|r| r.model_id);
        reports
    }
}
