//! Dispatch parameters - fan-out control.
//!
//! [`DispatchParams`] groups the static parameters that control how
//! [`ModelDispatcher`](crate::use_cases::dispatch::ModelDispatcher) calls each
//! model. These are application-layer concerns, not domain policy.

use std::time::Duration;

/// Default upper bound on a single model call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fan-out control parameters.
#[derive(Debug, Clone)]
pub struct DispatchParams {
    /// Maximum wait for one model before its result is recorded as `Timeout`.
    pub timeout: Duration,
}

impl Default for DispatchParams {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl DispatchParams {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        assert_eq!(DispatchParams::default().timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_with_timeout() {
        let params = DispatchParams::default().with_timeout(Duration::from_secs(5));
        assert_eq!(params.timeout, Duration::from_secs(5));
    }
}
