//! Curated keyword policy

use super::TermClassifier;

/// Terms recognized without an override
pub const DEFAULT_IT_KEYWORDS: &[&str] = &[
    "firewall", "router", "switch", "vpn", "ids", "ips", "siem", "soar", "mfa",
    "sso", "oidc", "saml", "ssl", "tls", "dns", "dhcp", "http", "https", "api",
    "sdk", "json", "xml", "html", "css", "javascript", "python", "java", "c++",
    "docker", "kubernetes", "vmware", "hypervisor", "cloud", "aws", "azure",
    "gcp", "linux", "windows", "unix", "kernel", "sql", "nosql", "mongodb",
    "postgresql", "mysql", "ssh", "ftp", "smtp", "imap", "oauth", "rest",
];

/// Accepts a term when one of its words is a known keyword.
///
/// Matching is case-insensitive and word-based, so `"kids"` does not match
/// `ids`. A word also matches the plural of a keyword (`firewalls`,
/// `switches`). Multi-word keywords match as a phrase.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    single: Vec<String>,
    phrases: Vec<Vec<String>>,
}

impl KeywordClassifier {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut single = Vec::new();
        let mut phrases = Vec::new();
        for keyword in keywords {
            let words = tokenize(keyword.as_ref());
            match words.len() {
                0 => {}
                1 => single.extend(words),
                _ => phrases.push(words),
            }
        }
        single.sort();
        single.dedup();
        Self { single, phrases }
    }

    /// Add keywords on top of the current list
    pub fn with_extra<I, S>(self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: Vec<String> = self.single;
        keywords.extend(self.phrases.into_iter().map(|p| p.join(" ")));
        keywords.extend(extra.into_iter().map(|s| s.as_ref().to_string()));
        Self::new(keywords)
    }

    fn matches_word(&self, word: &str) -> bool {
        if self.single.binary_search_by(|k| k.as_str().cmp(word)).is_ok() {
            return true;
        }
        [word.strip_suffix("es"), word.strip_suffix('s')]
            .into_iter()
            .flatten()
            .any(|stem| {
                !stem.is_empty() && self.single.binary_search_by(|k| k.as_str().cmp(stem)).is_ok()
            })
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_IT_KEYWORDS.iter().copied())
    }
}

impl TermClassifier for KeywordClassifier {
    fn is_it_term(&self, term: &str) -> bool {
        let words = tokenize(term);
        if words.iter().any(|w| self.matches_word(w)) {
            return true;
        }
        self.phrases
            .iter()
            .any(|phrase| words.windows(phrase.len()).any(|window| window == phrase.as_slice()))
    }
}

/// Lowercase words, split on whitespace and punctuation other than `+ # .`
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || matches!(c, '+' | '#' | '.')))
        .map(|w| w.trim_matches('.').to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_terms() {
        let classifier = KeywordClassifier::default();
        assert!(classifier.is_it_term("firewall"));
        assert!(classifier.is_it_term("Kubernetes"));
        assert!(classifier.is_it_term("what is a VPN?"));
        assert!(classifier.is_it_term("C++"));
        assert!(classifier.is_it_term("REST API"));
    }

    #[test]
    fn test_plurals() {
        let classifier = KeywordClassifier::default();
        assert!(classifier.is_it_term("firewalls"));
        assert!(classifier.is_it_term("switches"));
        assert!(classifier.is_it_term("APIs"));
    }

    #[test]
    fn test_unknown_terms() {
        let classifier = KeywordClassifier::default();
        assert!(!classifier.is_it_term("banana"));
        assert!(!classifier.is_it_term("kids"));
        assert!(!classifier.is_it_term("interest rates"));
    }

    #[test]
    fn test_sentence_punctuation() {
        let classifier = KeywordClassifier::default();
        assert!(classifier.is_it_term("dns."));
        assert!(classifier.is_it_term("(ssh)"));
    }

    #[test]
    fn test_extra_keywords_and_phrases() {
        let classifier = KeywordClassifier::default().with_extra(["zero trust", "edr"]);
        assert!(classifier.is_it_term("EDR"));
        assert!(classifier.is_it_term("Zero Trust architecture"));
        assert!(!classifier.is_it_term("zero"));
        assert!(classifier.is_it_term("firewall"));
    }
}
