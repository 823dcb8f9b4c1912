use log::debug;
use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;

use super::{Operation, Outcome, RectangleRequest, Response, evaluate};
use crate::error::ValidationError;
use crate::geometry::DimensionPolicy;

/// Result slot of one batch entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BatchResult {
    Answered(Response),
    Failed { error: String, status: u16 },
}

impl BatchResult {
    pub fn is_failure(&self) -> bool {
        matches!(self, BatchResult::Failed { .. })
    }
}

/// Results for one batch file, in entry order
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub file: String,
    pub results: Vec<BatchResult>,
}

impl BatchReport {
    pub fn failures(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }
}

/// Evaluate `{ "operation", "r1", "r2" }` entries in parallel.
///
/// Output order matches input order. A bad entry fills its own slot with an
/// error and leaves the others untouched.
pub fn evaluate_batch(entries: &[Value], policy: DimensionPolicy) -> Vec<BatchResult> {
    entries
        .par_iter()
        .map(|entry| match evaluate_entry(entry, policy) {
            Ok(response) => BatchResult::Answered(response),
            Err(e) => {
                debug!("Rejected batch entry: {}", e);
                BatchResult::Failed {
                    status: Outcome::of_error(&e).status_code(),
                    error: e.to_string(),
                }
            }
        })
        .collect()
}

fn evaluate_entry(entry: &Value, policy: DimensionPolicy) -> Result<Response, ValidationError> {
    let operation: Operation = entry
        .get("operation")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .parse()?;
    let request = RectangleRequest::from_value(entry)?;

    evaluate(operation, &request, policy)
}
