//! Credential lookup configuration from TOML (`[credentials]` section)

use jargon_application::DEFAULT_CREDENTIAL_KEY;
use jargon_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Default location of the local secret file
pub const DEFAULT_ENV_FILE: &str = ".env";
/// Default location of the hosted secrets file
pub const DEFAULT_SECRETS_FILE: &str = ".streamlit/secrets.toml";

/// Where the bearer token is looked up
///
/// # Example
///
/// ```toml
/// [credentials]
/// key = "GITHUB_API_KEY"
/// env_file = ".env"
/// secrets_file = ".streamlit/secrets.toml"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCredentialsConfig {
    /// Name of the secret holding the token
    pub key: String,
    /// `KEY=value` file consulted after the process environment
    pub env_file: String,
    /// Hosted secrets file consulted last
    pub secrets_file: String,
}

impl Default for FileCredentialsConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_CREDENTIAL_KEY.to_string(),
            env_file: DEFAULT_ENV_FILE.to_string(),
            secrets_file: DEFAULT_SECRETS_FILE.to_string(),
        }
    }
}

impl FileCredentialsConfig {
    /// Key name to look up, with issues for a blank value.
    ///
    /// A blank key falls back to the default.
    pub fn parse_key(&self) -> (String, Vec<ConfigIssue>) {
        let key = self.key.trim();
        if key.is_empty() {
            return (
                DEFAULT_CREDENTIAL_KEY.to_string(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::EmptyCredentialKey,
                    format!(
                        "credentials.key: cannot be empty, using '{}'",
                        DEFAULT_CREDENTIAL_KEY
                    ),
                )],
            );
        }
        (key.to_string(), Vec::new())
    }
}
