//! Response aggregation

use super::result::{AggregatedResponse, ModelResult, ResultStatus};
use crate::core::model::ModelCatalog;
use crate::core::temperature::Temperature;
use crate::core::term::Term;
use chrono::Utc;

/// Detail recorded for a model whose dispatch produced nothing
pub const MISSING_RESULT_DETAIL: &str = "no result returned";

/// Arrange results into catalog order, one entry per configured model.
///
/// Models without a result get a synthetic `TransportError` entry. Results for
/// models outside the catalog, and duplicates after the first, are dropped.
pub fn aggregate(
    catalog: &ModelCatalog,
    term: Term,
    temperature: Temperature,
    results: Vec<ModelResult>,
) -> AggregatedResponse {
    let mut pending = results;
    let ordered = catalog
        .specs()
        .iter()
        .map(|spec| match pending.iter().position(|r| r.model_id == spec.id) {
            Some(idx) => pending.swap_remove(idx),
            None => ModelResult::failure(spec, ResultStatus::TransportError, MISSING_RESULT_DETAIL),
        })
        .collect();

    AggregatedResponse {
        term,
        temperature,
        results: ordered,
        generated_at: Utc::now(),
    }
}
