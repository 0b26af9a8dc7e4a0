//! Outlier classification.

use polars::prelude::{
    DataFrame, DataType, IntoLazy, JoinArgs, JoinType, col, lit, when,
};
use tracing::debug;

use medscreen_model::labels::{ANALYSIS, ANALYSIS_LABEL, PATIENT_CODE, SIMPLE_FLAG, VALUE};

use crate::error::{PipelineError, Result};
use crate::util::ensure_columns;
use crate::IS_OUTLIER;

/// Join validated results to normalized reference definitions and keep the
/// rows that fall outside their expected range.
///
/// - The value column is strict-cast to Float64 first; any value the
///   vocabulary did not normalize and that is not numeric makes the whole
///   batch fail with [`PipelineError::Coercion`].
/// - The join on analysis id is inner: results referencing an unknown
///   analysis are silently dropped.
/// - Boolean analyses are outliers iff the value equals 1; ranged analyses
///   iff the value lies outside `[min_value, max_value]`.
pub fn flag_outliers(results: &DataFrame, definitions: &DataFrame) -> Result<DataFrame> {
    ensure_columns(results, &[PATIENT_CODE, ANALYSIS, VALUE])?;
    ensure_columns(definitions, &["id", "name", "is_simple", "min_value", "max_value"])?;

    let numeric = results
        .clone()
        .lazy()
        .with_columns([col(VALUE).strict_cast(DataType::Float64)])
        .collect()
        .map_err(|source| PipelineError::Coercion {
            column: VALUE.to_string(),
            source,
        })?;

    // Join keys as text on both sides: analysis references arrive as text
    // and definition ids as integers, and a dtype mismatch would be an
    // error rather than a drop.
    let keyed_definitions = definitions
        .clone()
        .lazy()
        .with_columns([col("id").cast(DataType::String)]);

    let outliers = numeric
        .lazy()
        .join(
            keyed_definitions,
            [col(ANALYSIS).cast(DataType::String)],
            [col("id")],
            JoinArgs::new(JoinType::Inner),
        )
        .with_columns([when(col("is_simple").eq(lit(SIMPLE_FLAG)))
            .then(col(VALUE).eq(lit(1.0)))
            .otherwise(
                col(VALUE)
                    .lt(col("min_value"))
                    .or(col(VALUE).gt(col("max_value"))),
            )
            .alias(IS_OUTLIER)])
        .filter(col(IS_OUTLIER))
        .select([
            col(PATIENT_CODE),
            col(ANALYSIS),
            col(VALUE),
            col("name").alias(ANALYSIS_LABEL),
            col("min_value"),
            col("max_value"),
            col("is_simple"),
        ])
        .collect()?;

    debug!(
        results = results.height(),
        outliers = outliers.height(),
        "classified result batch"
    );
    Ok(outliers)
}
