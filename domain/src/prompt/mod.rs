//! Prompt domain
//!
//! Templates for the system and user prompts sent to each model.

mod template;

pub use template::PromptTemplate;
