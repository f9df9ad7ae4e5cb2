//! Prompt templates shared by every model

use crate::core::term::Term;

/// Templates for the explainer prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt sent to every model
    pub fn explainer_system() -> &'static str {
        "You are an IT jargon explainer. Keep responses beginner-friendly."
    }

    /// User prompt asking for an explanation of `term`
    pub fn explain_term(term: &Term) -> String {
        format!(
            "Explain the IT jargon term '{}' in simple language with a real-world analogy.",
            term
        )
    }

    /// System prompt for a connectivity check
    pub fn connectivity_system() -> &'static str {
        "Say only OK if you are alive."
    }

    /// User prompt for a connectivity check
    pub fn connectivity_check() -> &'static str {
        "Say 'Connection OK' if you can read this."
    }
}
