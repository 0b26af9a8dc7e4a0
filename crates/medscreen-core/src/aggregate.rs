//! Per-patient aggregation and conclusion assignment.

use polars::prelude::{
    DataFrame, IntoLazy, JoinArgs, JoinType, NULL, col, lit, when,
};
use tracing::debug;

use medscreen_model::Conclusion;
use medscreen_model::labels::{
    ANALYSIS, ANALYSIS_LABEL, ANALYSIS_NAME, CONCLUSION, PATIENT_CODE, PATIENT_NAME,
    PATIENT_PHONE, SIMPLE_FLAG, VALUE,
};

use crate::error::Result;
use crate::util::ensure_columns;
use crate::OUTLIER_COUNT;

/// Aggregate outliers per patient and attach conclusions.
///
/// Patients with fewer than `min_outliers` outlier rows are dropped, then
/// each surviving row gets its conclusion, first match wins:
///
/// 1. boolean analysis -> `Positive`
/// 2. value above `max_value` -> `Elevated`
/// 3. value below `min_value` -> `Decreased`
/// 4. otherwise null (unreachable for rows the classifier kept, but the
///    policy is total)
///
/// The final join to the patient table is inner: outliers for unknown
/// patients are silently dropped. No ordering is imposed on the output.
pub fn merge_with_patients(
    outliers: &DataFrame,
    patients: &DataFrame,
    min_outliers: u32,
) -> Result<DataFrame> {
    ensure_columns(
        outliers,
        &[PATIENT_CODE, ANALYSIS, VALUE, ANALYSIS_LABEL, "min_value", "max_value", "is_simple"],
    )?;
    ensure_columns(patients, &["id", "name", "phone"])?;

    let retained_counts = outliers
        .clone()
        .lazy()
        .group_by([col(PATIENT_CODE)])
        .agg([col(ANALYSIS).count().alias(OUTLIER_COUNT)])
        .filter(col(OUTLIER_COUNT).gt_eq(lit(i64::from(min_outliers))));

    let concluded = outliers
        .clone()
        .lazy()
        .join(
            retained_counts,
            [col(PATIENT_CODE)],
            [col(PATIENT_CODE)],
            JoinArgs::new(JoinType::Inner),
        )
        .with_columns([when(col("is_simple").eq(lit(SIMPLE_FLAG)))
            .then(lit(Conclusion::Positive.as_str()))
            .when(col(VALUE).gt(col("max_value")))
            .then(lit(Conclusion::Elevated.as_str()))
            .when(col(VALUE).lt(col("min_value")))
            .then(lit(Conclusion::Decreased.as_str()))
            .otherwise(lit(NULL))
            .alias(CONCLUSION)]);

    let report = concluded
        .join(
            patients.clone().lazy(),
            [col(PATIENT_CODE)],
            [col("id")],
            JoinArgs::new(JoinType::Inner),
        )
        .select([
            col("name").alias(PATIENT_NAME),
            col("phone").alias(PATIENT_PHONE),
            col(ANALYSIS).alias(ANALYSIS_NAME),
            col(ANALYSIS_LABEL),
            col(VALUE),
            col(CONCLUSION),
            col("is_simple"),
        ])
        .collect()?;

    debug!(
        outliers = outliers.height(),
        report_rows = report.height(),
        "aggregated outliers per patient"
    );
    Ok(report)
}
