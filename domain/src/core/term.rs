//! Term value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// An IT term to be explained (Value Object)
///
/// Always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Term {
    content: String,
}

impl Term {
    /// Create a new term, trimming surrounding whitespace
    pub fn new(content: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = content.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyTerm);
        }
        Ok(Self {
            content: trimmed.to_string(),
        })
    }

    /// Get the term content
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Placeholder term carried by connectivity checks
    pub fn connectivity_check() -> Self {
        Self {
            content: "connectivity check".to_string(),
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Term {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Term::new(value)
    }
}

impl From<Term> for String {
    fn from(term: Term) -> Self {
        term.content
    }
}
