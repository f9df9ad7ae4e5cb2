//! Domain layer for jargon-buster
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Term classification**: decide whether input is an IT term before any
//!   model is contacted, with a `TERM:` override
//! - **Model catalog**: the fixed, ordered set of explainer backends
//! - **Aggregation**: exactly one result per configured model, in display
//!   order, whatever happened to each call

pub mod classifier;
pub mod config;
pub mod core;
pub mod explain;
pub mod prompt;

// Re-export commonly used types
pub use classifier::{
    Classification, KeywordClassifier, OVERRIDE_PREFIX, REJECTION_GUIDANCE, TermClassifier,
    classify,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    credential::Credential,
    error::DomainError,
    model::{ModelCatalog, ModelId, ModelSpec, Transport},
    temperature::Temperature,
    term::Term,
};
pub use explain::{
    aggregate::aggregate,
    request::{CONNECTIVITY_MAX_TOKENS, ExplainRequest, RequestPurpose},
    result::{AggregatedResponse, ModelResult, ResultStatus},
};
pub use prompt::PromptTemplate;
