//! Dispatch configuration from TOML (`[dispatch]` section)

use jargon_application::DispatchParams;
use jargon_domain::{ConfigIssue, ConfigIssueCode, Temperature};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw dispatch configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDispatchConfig {
    /// Per-model request ceiling in seconds
    pub timeout_seconds: u64,
    /// Temperature used when none is given on the command line
    pub default_temperature: f32,
}

impl Default for FileDispatchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DispatchParams::default().timeout.as_secs(),
            default_temperature: Temperature::DEFAULT,
        }
    }
}

impl FileDispatchConfig {
    /// Convert to [`DispatchParams`]; a zero timeout keeps the default.
    pub fn to_dispatch_params(&self) -> (DispatchParams, Vec<ConfigIssue>) {
        if self.timeout_seconds == 0 {
            return (
                DispatchParams::default(),
                vec![ConfigIssue::error(
                    ConfigIssueCode::ZeroTimeout,
                    "dispatch.timeout_seconds: must be greater than zero",
                )],
            );
        }
        (
            DispatchParams::default().with_timeout(Duration::from_secs(self.timeout_seconds)),
            Vec::new(),
        )
    }

    /// Validated default temperature; out-of-range values keep the built-in default.
    pub fn parse_default_temperature(&self) -> (Temperature, Vec<ConfigIssue>) {
        match Temperature::new(self.default_temperature) {
            Ok(t) => (t, Vec::new()),
            Err(e) => (
                Temperature::default(),
                vec![ConfigIssue::error(
                    ConfigIssueCode::TemperatureOutOfRange {
                        value: self.default_temperature.to_string(),
                    },
                    format!("dispatch.default_temperature: {}", e),
                )],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileDispatchConfig::default();
        assert_eq!(config.timeout_seconds, 30);
        let (params, issues) = config.to_dispatch_params();
        assert!(issues.is_empty());
        assert_eq!(params.timeout, Duration::from_secs(30));
        assert_eq!(config.parse_default_temperature().0.value(), 0.4);
    }

    #[test]
    fn test_zero_timeout_is_error() {
        let config = FileDispatchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let (params, issues) = config.to_dispatch_params();
        assert_eq!(params.timeout, Duration::from_secs(30));
        assert_eq!(issues[0].code, ConfigIssueCode::ZeroTimeout);
    }

    #[test]
    fn test_temperature_out_of_range() {
        let config = FileDispatchConfig {
            default_temperature: 1.7,
            ..Default::default()
        };
        let (temperature, issues) = config.parse_default_temperature();
        assert_eq!(temperature.value(), 0.4);
        assert!(issues[0].is_error());
    }
}
