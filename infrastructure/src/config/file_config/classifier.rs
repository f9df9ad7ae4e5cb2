//! Classifier configuration from TOML (`[classifier]` section)

use jargon_domain::KeywordClassifier;
use serde::{Deserialize, Serialize};

/// Raw classifier configuration from TOML
///
/// # Example
///
/// ```toml
/// [classifier]
/// extra_keywords = ["terraform", "zero trust"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClassifierConfig {
    /// Keywords accepted in addition to the built-in list
    pub extra_keywords: Vec<String>,
}

impl FileClassifierConfig {
    pub fn to_classifier(&self) -> KeywordClassifier {
        KeywordClassifier::default().with_extra(self.extra_keywords.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jargon_domain::TermClassifier;

    #[test]
    fn test_extra_keywords_accepted() {
        let config = FileClassifierConfig {
            extra_keywords: vec!["terraform".to_string()],
        };
        let classifier = config.to_classifier();
        assert!(classifier.is_it_term("Terraform"));
        assert!(classifier.is_it_term("firewall"));
    }
}
