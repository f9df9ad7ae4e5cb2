//! Term classification: is this input an IT term worth sending to the models?
//!
//! Classification runs before any network call. Input that starts with
//! [`OVERRIDE_PREFIX`] skips the policy entirely; everything else is judged by
//! a [`TermClassifier`] implementation (by default [`KeywordClassifier`]).
//!
//! ```
//! use jargon_domain::classifier::{classify, KeywordClassifier};
//!
//! let policy = KeywordClassifier::default();
//! let c = classify("TERM:quantum key distribution", &policy).unwrap();
//! assert!(c.accepted && c.overridden);
//! assert_eq!(c.term.as_str(), "quantum key distribution");
//! ```

pub mod keywords;

pub use keywords::{DEFAULT_IT_KEYWORDS, KeywordClassifier};

use crate::core::error::DomainError;
use crate::core::term::Term;
use serde::Serialize;

/// Literal, case-sensitive marker that forces acceptance
pub const OVERRIDE_PREFIX: &str = "TERM:";

/// Message shown when a term is rejected
pub const REJECTION_GUIDANCE: &str = "The term entered is not considered a known IT term. \
Try again, or override with TERM:. For example: TERM:FTP";

/// Policy deciding whether free text names an IT/security concept.
///
/// Implementations must be pure: the same input always gives the same answer.
pub trait TermClassifier: Send + Sync {
    fn is_it_term(&self, term: &str) -> bool;
}

/// Result of classifying raw user input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub term: Term,
    pub accepted: bool,
    /// The override prefix was used
    pub overridden: bool,
}

/// Classify raw input.
///
/// Returns [`DomainError::EmptyTerm`] when nothing is left after removing the
/// prefix and whitespace; that is a validation failure, not a rejection.
pub fn classify(raw: &str, policy: &dyn TermClassifier) -> Result<Classification, DomainError> {
    let input = raw.trim_start();
    if let Some(rest) = input.strip_prefix(OVERRIDE_PREFIX) {
        return Ok(Classification {
            term: Term::new(rest)?,
            accepted: true,
            overridden: true,
        });
    }

    let term = Term::new(input)?;
    let accepted = policy.is_it_term(term.as_str());
    Ok(Classification {
        term,
        accepted,
        overridden: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RejectAll;

    impl TermClassifier for RejectAll {
        fn is_it_term(&self, _term: &str) -> bool {
            false
        }
    }

    #[test]
    fn test_firewall_accepted() {
        let c = classify("firewall", &KeywordClassifier::default()).unwrap();
        assert!(c.accepted);
        assert!(!c.overridden);
        assert_eq!(c.term.as_str(), "firewall");
    }

    #[test]
    fn test_banana_rejected() {
        let c = classify("banana", &KeywordClassifier::default()).unwrap();
        assert!(!c.accepted);
    }

    #[test]
    fn test_override_bypasses_policy() {
        let c = classify("TERM:quantum key distribution", &RejectAll).unwrap();
        assert!(c.accepted);
        assert!(c.overridden);
        assert_eq!(c.term.as_str(), "quantum key distribution");
    }

    #[test]
    fn test_override_accepts_any_remainder() {
        for rest in ["banana", "  FTP ", "x", "TERM:nested", "日本語"] {
            let raw = format!("{}{}", OVERRIDE_PREFIX, rest);
            let c = classify(&raw, &RejectAll).unwrap();
            assert!(c.accepted, "override failed for {raw:?}");
            assert_eq!(c.term.as_str(), rest.trim());
        }
    }

    #[test]
    fn test_override_is_case_sensitive() {
        let c = classify("term:banana", &KeywordClassifier::default()).unwrap();
        assert!(!c.overridden);
        assert!(!c.accepted);
    }

    #[test]
    fn test_leading_whitespace_before_prefix() {
        let c = classify("  TERM:banana", &RejectAll).unwrap();
        assert!(c.overridden);
        assert_eq!(c.term.as_str(), "banana");
    }

    #[test]
    fn test_empty_after_override_is_validation_error() {
        assert_eq!(classify("TERM:", &RejectAll), Err(DomainError::EmptyTerm));
        assert_eq!(classify("TERM:   ", &RejectAll), Err(DomainError::EmptyTerm));
    }

    #[test]
    fn test_empty_input_is_validation_error() {
        let policy = KeywordClassifier::default();
        assert_eq!(classify("", &policy), Err(DomainError::EmptyTerm));
        assert_eq!(classify(" \n\t", &policy), Err(DomainError::EmptyTerm));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let policy = KeywordClassifier::default();
        for input in ["firewall", "banana", "what is dns", "kids", "Docker swarm"] {
            let first = classify(input, &policy).unwrap().accepted;
            for _ in 0..10 {
                assert_eq!(classify(input, &policy).unwrap().accepted, first);
            }
        }
    }
}
