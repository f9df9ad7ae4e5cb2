//! Resolve Credential use case
//!
//! Finds the bearer token by asking each configured secret source in order.

use crate::ports::secret_source::SecretSource;
use jargon_domain::Credential;
use thiserror::Error;
use tracing::debug;

/// Name of the secret holding the bearer token, unless configured otherwise
pub const DEFAULT_CREDENTIAL_KEY: &str = "GITHUB_API_KEY";

/// Errors that can occur while resolving the credential
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error(
        "Missing {key}. Set it in the environment or a .env file (local), or in the secrets file (hosted). Searched: {searched}"
    )]
    MissingCredential { key: String, searched: String },
}

/// Looks up the bearer token; the first non-empty value wins
pub struct CredentialResolver {
    key: String,
    sources: Vec<Box<dyn SecretSource>>,
}

impl CredentialResolver {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            sources: Vec::new(),
        }
    }

    /// Append a source; sources are consulted in the order they were added
    pub fn with_source(mut self, source: impl SecretSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub fn resolve(&self) -> Result<Credential, CredentialError> {
        for source in &self.sources {
            match source.get(&self.key).and_then(|value| Credential::new(value)) {
                Some(credential) => {
                    debug!(source = source.name(), key = %self.key, "Credential found");
                    return Ok(credential);
                }
                None => {
                    debug!(source = source.name(), key = %self.key, "Credential not set");
                }
            }
        }

        Err(CredentialError::MissingCredential {
            key: self.key.clone(),
            searched: if self.sources.is_empty() {
                "no sources configured".to_string()
            } else {
                self.source_names().join(", ")
            },
        })
    }
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::new(DEFAULT_CREDENTIAL_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::secret_source::StaticSecretSource;

    #[test]
    fn first_source_wins() {
        let resolver = CredentialResolver::default()
            .with_source(StaticSecretSource::new("env").with("GITHUB_API_KEY", "from-env"))
            .with_source(StaticSecretSource::new("hosted").with("GITHUB_API_KEY", "from-hosted"));

        assert_eq!(resolver.resolve().unwrap().expose(), "from-env");
    }

    #[test]
    fn falls_back_to_later_source() {
        let resolver = CredentialResolver::default()
            .with_source(StaticSecretSource::new("env"))
            .with_source(StaticSecretSource::new("hosted").with("GITHUB_API_KEY", "from-hosted"));

        assert_eq!(resolver.resolve().unwrap().expose(), "from-hosted");
    }

    #[test]
    fn blank_values_are_skipped() {
        let resolver = CredentialResolver::default()
            .with_source(StaticSecretSource::new("env").with("GITHUB_API_KEY", "   "))
            .with_source(StaticSecretSource::new("hosted").with("GITHUB_API_KEY", "real"));

        assert_eq!(resolver.resolve().unwrap().expose(), "real");
    }

    #[test]
    fn missing_everywhere_is_missing_credential() {
        let resolver = CredentialResolver::new("MY_KEY")
            .with_source(StaticSecretSource::new("env").with("OTHER", "x"))
            .with_source(StaticSecretSource::new("secrets.toml"));

        let err = resolver.resolve().unwrap_err();
        assert_eq!(
            err,
            CredentialError::MissingCredential {
                key: "MY_KEY".to_string(),
                searched: "env, secrets.toml".to_string(),
            }
        );
        assert!(err.to_string().starts_with("Missing MY_KEY."));
    }

    #[test]
    fn no_sources_is_missing_credential() {
        assert!(CredentialResolver::default().resolve().is_err());
    }
}
