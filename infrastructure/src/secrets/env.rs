//! Secret sources for local runs: the process environment and `.env` files

use jargon_application::SecretSource;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Reads from the process environment
#[derive(Debug, Default)]
pub struct EnvSecretSource;

impl SecretSource for EnvSecretSource {
    fn name(&self) -> &str {
        "environment"
    }

    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Reads `KEY=value` lines from a dotenv file without touching the process
/// environment.
///
/// The file is read on each lookup; a missing file yields nothing. Later
/// assignments override earlier ones.
#[derive(Debug)]
pub struct DotenvFileSource {
    path: PathBuf,
    name: String,
}

impl DotenvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl SecretSource for DotenvFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &str) -> Option<String> {
        let entries = match dotenvy::from_path_iter(&self.path) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "Dotenv file not readable");
                return None;
            }
        };

        let mut found = None;
        for entry in entries {
            match entry {
                Ok((k, v)) if k == key => found = Some(v),
                Ok(_) => {}
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "Skipping malformed dotenv line");
                }
            }
        }
        found
    }
}
