//! Progress notification port
//!
//! Defines the interface for reporting progress while models are consulted.

use jargon_domain::{AggregatedResponse, ModelResult, Term};

/// Callback for progress updates during dispatch
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called once before any model is contacted
    fn on_dispatch_start(&self, term: &Term, total_models: usize);

    /// Called as each model finishes, in completion order
    fn on_model_complete(&self, result: &ModelResult);

    /// Called after every model has finished or timed out
    fn on_dispatch_complete(&self, _response: &AggregatedResponse) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_dispatch_start(&self, _term: &Term, _total_models: usize) {}
    fn on_model_complete(&self, _result: &ModelResult) {}
}
