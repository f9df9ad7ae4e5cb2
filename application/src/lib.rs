//! Application layer for jargon-buster
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DispatchParams;
pub use ports::{
    model_transport::{ModelTransport, TransportError},
    progress::{NoProgress, ProgressNotifier},
    secret_source::SecretSource,
};
pub use use_cases::check_models::{CheckModelsUseCase, Connectivity, ConnectivityReport};
pub use use_cases::dispatch::ModelDispatcher;
pub use use_cases::explain_term::{
    ExplainError, ExplainOutcome, ExplainTermInput, ExplainTermUseCase,
};
pub use use_cases::resolve_credential::{
    CredentialError, CredentialResolver, DEFAULT_CREDENTIAL_KEY,
};
