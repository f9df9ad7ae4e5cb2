//! Output format value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// How aggregated responses are displayed
///
/// This is a domain concept shared by config files and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One column per model, side by side (default)
    #[default]
    Columns,
    /// One section per model, top to bottom
    Stacked,
    /// JSON output
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Columns => "columns",
            OutputFormat::Stacked => "stacked",
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "columns" => Ok(OutputFormat::Columns),
            "stacked" => Ok(OutputFormat::Stacked),
            "json" => Ok(OutputFormat::Json),
            other => Err(DomainError::UnknownOutputFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_columns() {
        assert_eq!(OutputFormat::default(), OutputFormat::Columns);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Stacked).unwrap();
        assert_eq!(json, "\"stacked\"");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(" JSON ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::Stacked.to_string(), "stacked");
        assert!("table".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
