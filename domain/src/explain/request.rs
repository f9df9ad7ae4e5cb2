//! Explain request value object

use crate::classifier::Classification;
use crate::core::temperature::Temperature;
use crate::core::term::Term;
use serde::Serialize;

/// Token cap for connectivity checks; the reply only needs to say OK
pub const CONNECTIVITY_MAX_TOKENS: u32 = 10;

/// What a request asks the model to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestPurpose {
    /// Explain the term
    #[default]
    Explain,
    /// Minimal round trip to confirm the model answers
    ConnectivityCheck,
}

/// One user submission, ready for dispatch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplainRequest {
    pub term: Term,
    pub temperature: Temperature,
    pub override_classification: bool,
    #[serde(skip)]
    pub purpose: RequestPurpose,
}

impl ExplainRequest {
    pub fn new(term: Term, temperature: Temperature) -> Self {
        Self {
            term,
            temperature,
            override_classification: false,
            purpose: RequestPurpose::Explain,
        }
    }

    /// Build from an accepted classification
    pub fn from_classification(classification: Classification, temperature: Temperature) -> Self {
        Self {
            term: classification.term,
            temperature,
            override_classification: classification.overridden,
            purpose: RequestPurpose::Explain,
        }
    }

    /// Fixed "say OK" request sent at temperature 0
    pub fn connectivity_check() -> Self {
        Self {
            term: Term::connectivity_check(),
            temperature: Temperature::ZERO,
            override_classification: true,
            purpose: RequestPurpose::ConnectivityCheck,
        }
    }

    pub fn is_connectivity_check(&self) -> bool {
        self.purpose == RequestPurpose::ConnectivityCheck
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connectivity_check_request() {
        let request = ExplainRequest::connectivity_check();
        assert!(request.is_connectivity_check());
        assert_eq!(request.temperature.value(), 0.0);
        assert!(!ExplainRequest::new(Term::new("dns").unwrap(), Temperature::default())
            .is_connectivity_check());
    }
}
