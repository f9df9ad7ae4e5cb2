//! Application-level configuration.
//!
//! - [`DispatchParams`] - per-call timeout for the model fan-out

pub mod dispatch_params;

pub use dispatch_params::DispatchParams;
