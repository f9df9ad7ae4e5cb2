//! Secret source port
//!
//! A read-only key-value store that may hold the bearer token.

/// One place a secret may be read from (environment, local file, hosted store)
///
/// Sources only read. An unreadable or missing backing store is reported as
/// an absent value.
pub trait SecretSource: Send + Sync {
    /// Short name used in logs and error messages
    fn name(&self) -> &str;

    /// Look up `key`; `None` when absent
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory source for tests
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StaticSecretSource {
    name: String,
    entries: Vec<(String, String)>,
}

#[cfg(test)]
impl StaticSecretSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }
}

#[cfg(test)]
impl SecretSource for StaticSecretSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}
