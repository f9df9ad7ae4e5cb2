//! Interactive loop configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw interactive loop configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show a progress bar while models are answering
    pub show_progress: bool,
    /// Line-editor history file; defaults to the platform data dir
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl FileReplConfig {
    /// Resolve the history file, expanding a leading `~/`.
    ///
    /// Returns `None` when no data dir is known and nothing is configured.
    pub fn history_path(&self) -> Option<PathBuf> {
        match self.history_file.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => Some(match path.strip_prefix("~/") {
                Some(rest) => dirs::home_dir()
                    .map(|home| home.join(rest))
                    .unwrap_or_else(|| PathBuf::from(path)),
                None => PathBuf::from(path),
            }),
            _ => dirs::data_dir().map(|d| d.join("jargon-buster").join("history.txt")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_history_path() {
        let config = FileReplConfig {
            history_file: Some("/tmp/jargon-history".to_string()),
            ..Default::default()
        };
        assert_eq!(config.history_path(), Some(PathBuf::from("/tmp/jargon-history")));
    }

    #[test]
    fn test_home_relative_history_path() {
        let config = FileReplConfig {
            history_file: Some("~/jargon/history".to_string()),
            ..Default::default()
        };
        let path = config.history_path().unwrap();
        assert!(path.ends_with("jargon/history"));
        assert!(!path.to_string_lossy().starts_with('~') || dirs::home_dir().is_none());
    }
}
