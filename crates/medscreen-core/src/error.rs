//! Pipeline error types.

use medscreen_validate::ValidationError;
use polars::error::PolarsError;
use thiserror::Error;

/// A fatal pipeline failure. The whole batch aborts; no partial report is
/// produced.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("column '{column}' holds a value that cannot be read as a number")]
    Coercion {
        column: String,
        #[source]
        source: PolarsError,
    },
    #[error("expected column '{0}' is missing")]
    MissingColumn(String),
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
