//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for explanations
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One column per model, side by side
    Columns,
    /// One section per model, top to bottom
    Stacked,
    /// JSON output
    Json,
}

impl From<OutputFormat> for jargon_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Columns => jargon_domain::OutputFormat::Columns,
            OutputFormat::Stacked => jargon_domain::OutputFormat::Stacked,
            OutputFormat::Json => jargon_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for jargon-buster
#[derive(Parser, Debug)]
#[command(name = "jargon-buster")]
#[command(author, version, about = "Explain IT jargon with three LLMs side by side")]
#[command(long_about = r#"
Jargon Buster asks three language models to explain an IT or security term
in plain language and shows their answers side by side.

Terms are checked against a list of known IT keywords first. Prefix a term
with TERM: to skip the check, for example TERM:FTP.

The bearer token is read from GITHUB_API_KEY in the environment, a .env file,
or .streamlit/secrets.toml (in that order).

Configuration files are loaded from (in priority order):
1. JARGON_* environment variables
2. --config <path>     Explicit config file
3. ./jargon.toml       Project-level config
4. <config dir>/jargon-buster/config.toml   Global config, where <config dir>
   is $XDG_CONFIG_HOME (Linux), ~/Library/Application Support (macOS)
   or %APPDATA% (Windows)

Example:
  jargon-buster firewall
  jargon-buster -t 0.8 -o stacked "zero trust"
  jargon-buster "TERM:quantum key distribution"
  jargon-buster --interactive
  jargon-buster --check-models
"#)]
pub struct Cli {
    /// The term to explain (omit for interactive mode)
    pub term: Option<String>,

    /// Start the interactive prompt
    #[arg(short, long)]
    pub interactive: bool,

    /// Sampling temperature shared by all models (0.0 to 1.0)
    #[arg(short, long, value_name = "TEMP")]
    pub temperature: Option<f32>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Per-model timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// List the models available to your token and exit
    #[arg(long)]
    pub list_models: bool,

    /// Send a tiny request to each configured model, report reachability and exit
    #[arg(long, conflicts_with = "list_models")]
    pub check_models: bool,
}

impl Cli {
    /// Interactive when asked for, or when no term was given
    pub fn is_interactive(&self) -> bool {
        self.interactive || self.term.is_none()
    }
}
