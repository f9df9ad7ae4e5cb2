//! Explanation requests, per-model results and their aggregation.

pub mod aggregate;
pub mod request;
pub mod result;
