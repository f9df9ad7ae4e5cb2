//! Explain Term use case
//!
//! Orchestrates one submission: validation, classification, fan-out, and
//! aggregation.

use super::dispatch::ModelDispatcher;
use super::resolve_credential::{CredentialError, CredentialResolver};
use crate::ports::model_transport::ModelTransport;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use jargon_domain::{
    AggregatedResponse, Credential, DomainError, ExplainRequest, REJECTION_GUIDANCE, Temperature,
    Term, TermClassifier, classify,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while handling a submission
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExplainError {
    #[error("Invalid input: {0}")]
    Validation(#[from] DomainError),
}

/// Input for the ExplainTerm use case
#[derive(Debug, Clone)]
pub struct ExplainTermInput {
    /// Text as typed, possibly with the override prefix
    pub raw_term: String,
    pub temperature: f32,
}

impl ExplainTermInput {
    pub fn new(raw_term: impl Into<String>) -> Self {
        Self {
            raw_term: raw_term.into(),
            temperature: Temperature::DEFAULT,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// What happened to a valid submission
#[derive(Debug, Clone)]
pub enum ExplainOutcome {
    /// The term was dispatched; one result per model
    Explained(AggregatedResponse),
    /// The term did not look like IT jargon; nothing was sent
    Rejected { term: Term, guidance: &'static str },
}

/// Use case for explaining one term with every configured model
pub struct ExplainTermUseCase<T: ModelTransport + 'static> {
    dispatcher: ModelDispatcher<T>,
    classifier: Arc<dyn TermClassifier>,
    credential: Credential,
}

impl<T: ModelTransport + 'static> ExplainTermUseCase<T> {
    pub fn new(
        dispatcher: ModelDispatcher<T>,
        classifier: Arc<dyn TermClassifier>,
        credential: Credential,
    ) -> Self {
        Self {
            dispatcher,
            classifier,
            credential,
        }
    }

    /// Resolve the credential up front; fails before any model is contacted
    pub fn from_resolver(
        dispatcher: ModelDispatcher<T>,
        classifier: Arc<dyn TermClassifier>,
        resolver: &CredentialResolver,
    ) -> Result<Self, CredentialError> {
        let credential = resolver.resolve()?;
        Ok(Self::new(dispatcher, classifier, credential))
    }

    pub fn dispatcher(&self) -> &ModelDispatcher<T> {
        &self.dispatcher
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: ExplainTermInput) -> Result<ExplainOutcome, ExplainError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: ExplainTermInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<ExplainOutcome, ExplainError> {
        let temperature = Temperature::new(input.temperature)?;
        let classification = classify(&input.raw_term, self.classifier.as_ref())?;

        if !classification.accepted {
            info!(term = %classification.term, "Term rejected by classifier");
            return Ok(ExplainOutcome::Rejected {
                term: classification.term,
                guidance: REJECTION_GUIDANCE,
            });
        }

        if classification.overridden {
            info!(term = %classification.term, "Classification overridden");
        }

        let request = ExplainRequest::from_classification(classification, temperature);
        let response = self
            .dispatcher
            .dispatch_all_with_progress(&request, &self.credential, progress)
            .await;

        Ok(ExplainOutcome::Explained(response))
    }
}
