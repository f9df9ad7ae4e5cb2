//! Catalog listing configuration from TOML (`[catalog]` section)

use serde::{Deserialize, Serialize};

/// Default GitHub Models catalog URL
pub const DEFAULT_CATALOG_URL: &str = "https://models.github.ai/models";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    pub url: String,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CATALOG_URL.to_string(),
        }
    }
}
