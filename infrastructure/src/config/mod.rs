//! Configuration file loading for jargon-buster
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `JARGON_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./jargon.toml` or `./.jargon.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/jargon-buster/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_CATALOG_URL, DEFAULT_ENV_FILE, DEFAULT_SECRETS_FILE, FileCatalogConfig,
    FileClassifierConfig, FileConfig, FileCredentialsConfig, FileDispatchConfig,
    FileModelOverride, FileModelsConfig, FileOutputConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
