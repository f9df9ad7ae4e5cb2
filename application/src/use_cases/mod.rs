//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod check_models;
pub mod dispatch;
pub mod explain_term;
pub mod resolve_credential;
