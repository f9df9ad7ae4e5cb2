//! Sampling temperature value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Sampling temperature shared by every model call (Value Object)
///
/// Bounded to `[0.0, 1.0]`: the narrowest range accepted by all configured
/// providers.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Temperature(f32);

impl Temperature {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 1.0;
    pub const DEFAULT: f32 = 0.4;
    pub const ZERO: Temperature = Temperature(0.0);

    /// Create a temperature, rejecting NaN and out-of-range values
    pub fn new(value: f32) -> Result<Self, DomainError> {
        if value.is_nan() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::TemperatureOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl std::fmt::Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl TryFrom<f32> for Temperature {
    type Error = DomainError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Temperature::new(value)
    }
}

impl From<Temperature> for f32 {
    fn from(t: Temperature) -> Self {
        t.0
    }
}
