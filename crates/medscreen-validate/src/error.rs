//! Validation error types.

use polars::error::PolarsError;
use thiserror::Error;

/// A record-level or batch-level validation failure.
///
/// Record-level variants carry the offending record rendered as
/// `label=value` pairs. The first failure aborts the whole batch; there is
/// no partial-success mode.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("result sheet is missing required column '{column}'")]
    MissingColumn { column: String },
    #[error("record [{record}]: required field '{field}' is empty")]
    MissingField { record: String, field: String },
    #[error("record [{record}]: field '{field}' value '{value}' is not an integer")]
    NotAnInteger {
        record: String,
        field: String,
        value: String,
    },
    #[error("building canonical result frame: {0}")]
    Frame(#[from] PolarsError),
}
