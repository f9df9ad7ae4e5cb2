//! Presentation-level configuration
//!
//! Settings for output formatting and the interactive prompt, already
//! resolved from config files and CLI flags.

use jargon_domain::{OutputFormat, Temperature};
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

impl OutputConfig {
    /// Apply the color setting process-wide
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

/// Interactive prompt configuration
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show progress while models are answering
    pub show_progress: bool,
    /// Line history file; `None` keeps history in memory only
    pub history_file: Option<PathBuf>,
    /// Temperature until changed with `/temp`
    pub temperature: Temperature,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
            temperature: Temperature::default(),
        }
    }
}
