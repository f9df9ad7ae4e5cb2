//! Presentation layer for jargon-buster
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive prompt.

pub mod cli;
pub mod config;
pub mod interactive;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use interactive::JargonRepl;
pub use output::console::ConsoleFormatter;
pub use progress::progress_notifier;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
