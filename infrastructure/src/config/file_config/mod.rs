//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod catalog;
mod classifier;
mod credentials;
mod dispatch;
mod models;
mod output;
mod repl;

pub use catalog::{DEFAULT_CATALOG_URL, FileCatalogConfig};
pub use classifier::FileClassifierConfig;
pub use credentials::{DEFAULT_ENV_FILE, DEFAULT_SECRETS_FILE, FileCredentialsConfig};
pub use dispatch::FileDispatchConfig;
pub use models::{FileModelOverride, FileModelsConfig};
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use jargon_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Where the bearer token comes from
    pub credentials: FileCredentialsConfig,
    /// Timeout and default temperature
    pub dispatch: FileDispatchConfig,
    /// Keyword list additions
    pub classifier: FileClassifierConfig,
    /// Per-model overrides
    pub models: FileModelsConfig,
    /// Catalog listing endpoint
    pub catalog: FileCatalogConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Interactive loop settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Model names and endpoints
    /// 2. Dispatch timeout and default temperature
    /// 3. Credential key and catalog URL
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Models
        issues.extend(self.models.to_catalog().1);

        // 2. Dispatch
        issues.extend(self.dispatch.to_dispatch_params().1);
        issues.extend(self.dispatch.parse_default_temperature().1);

        // 3. Credentials and catalog
        issues.extend(self.credentials.parse_key().1);
        let url = self.catalog.url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidEndpoint {
                    field: "catalog.url".to_string(),
                    value: url.to_string(),
                },
                format!("catalog.url: '{}' is not an http(s) URL", url),
            ));
        }

        issues
    }
}
