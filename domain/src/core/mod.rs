//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ModelSpec`] - how each explainer backend is reached
//! - [`term::Term`] - a validated term to explain
//! - [`temperature::Temperature`] - the shared sampling temperature
//! - [`credential::Credential`] - the shared bearer token
//! - [`error::DomainError`] - domain-level errors

pub mod credential;
pub mod error;
pub mod model;
pub mod temperature;
pub mod term;
