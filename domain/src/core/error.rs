//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// All variants are validation failures: they are raised before any model
/// is contacted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Term cannot be empty")]
    EmptyTerm,

    #[error("Temperature must be between {min} and {max}, got {value}")]
    TemperatureOutOfRange { value: f32, min: f32, max: f32 },

    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("No models configured")]
    NoModels,

    #[error("Unknown output format: {0}")]
    UnknownOutputFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_display() {
        assert_eq!(DomainError::EmptyTerm.to_string(), "Term cannot be empty");
    }

    #[test]
    fn test_temperature_display() {
        let error = DomainError::TemperatureOutOfRange {
            value: 1.5,
            min: 0.0,
            max: 1.0,
        };
        assert_eq!(
            error.to_string(),
            "Temperature must be between 0 and 1, got 1.5"
        );
    }
}
