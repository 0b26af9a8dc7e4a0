use polars::prelude::DataFrame;

use crate::error::{PipelineError, Result};

/// Fail early with a named column instead of a polars schema error deep in a
/// lazy plan.
pub(crate) fn ensure_columns(df: &DataFrame, columns: &[&str]) -> Result<()> {
    for column in columns {
        if df.column(column).is_err() {
            return Err(PipelineError::MissingColumn((*column).to_string()));
        }
    }
    Ok(())
}
