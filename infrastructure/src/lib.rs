//! Infrastructure layer for jargon-buster
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: HTTP model transports, secret sources,
//! configuration file loading, and the model catalog client.

pub mod catalog;
pub mod config;
pub mod providers;
pub mod secrets;

// Re-export commonly used types
pub use catalog::{CatalogEntry, CatalogError, GitHubModelCatalog};
pub use config::{
    ConfigLoader, FileCatalogConfig, FileClassifierConfig, FileConfig, FileCredentialsConfig,
    FileDispatchConfig, FileModelsConfig, FileOutputConfig, FileReplConfig,
};
pub use providers::{
    ChatCompletionsTransport, RestJsonTransport, TransportAdapter, TransportRouter,
    default_router,
};
pub use secrets::{DotenvFileSource, EnvSecretSource, TomlSecretsFile, credential_resolver};
