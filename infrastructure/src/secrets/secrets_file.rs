//! Hosted secret store: a TOML file of top-level key/value pairs

use jargon_application::SecretSource;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Reads secrets from a TOML file such as `.streamlit/secrets.toml`.
///
/// Only string values are returned. A `[section]` value can be reached with
/// a dotted key (`section.key`).
#[derive(Debug)]
pub struct TomlSecretsFile {
    path: PathBuf,
    name: String,
}

impl TomlSecretsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    fn read_table(&self) -> Option<toml::Table> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| debug!(path = %self.path.display(), error = %e, "Secrets file not readable"))
            .ok()?;
        content
            .parse::<toml::Table>()
            .map_err(|e| warn!(path = %self.path.display(), error = %e, "Secrets file is not valid TOML"))
            .ok()
    }
}

impl SecretSource for TomlSecretsFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &str) -> Option<String> {
        let table = self.read_table()?;
        if let Some(value) = table.get(key) {
            return value.as_str().map(str::to_string);
        }

        let mut parts = key.split('.');
        let mut current = table.get(parts.next()?)?;
        for part in parts {
            current = current.as_table()?.get(part)?;
        }
        current.as_str().map(str::to_string)
    }
}
