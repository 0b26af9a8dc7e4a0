//! End-to-end screening pipeline.

use polars::prelude::DataFrame;
use tracing::info;

use medscreen_model::{RawTable, Vocabulary};
use medscreen_validate::validate_results;

use crate::aggregate::merge_with_patients;
use crate::classify::flag_outliers;
use crate::error::Result;
use crate::reference::normalize_references;

/// Default minimum outlier count for a patient to appear in the report.
pub const DEFAULT_MIN_OUTLIERS: u32 = 2;

/// Pipeline output: the report frame plus the counts a caller wants for its
/// run summary.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub report: DataFrame,
    pub results_in: usize,
    pub outliers: usize,
    pub patients_retained: usize,
}

/// Run the whole screening pipeline over in-memory tables.
///
/// Stages run strictly forward; the first fatal error aborts the run and no
/// partial report is returned. The same inputs always produce the same
/// report, so re-invoking after a failure is safe.
pub fn run_pipeline(
    definitions: &DataFrame,
    patients: &DataFrame,
    results: &RawTable,
    vocab: &Vocabulary,
    min_outliers: u32,
) -> Result<PipelineReport> {
    let references = normalize_references(definitions)?;
    info!(definitions = references.height(), "reference table normalized");

    let validated = validate_results(results, vocab)?;
    info!(records = validated.height(), "result batch validated");

    let outliers = flag_outliers(&validated, &references)?;
    info!(outliers = outliers.height(), "outliers flagged");

    let report = merge_with_patients(&outliers, patients, min_outliers)?;
    let patients_retained = report
        .column(medscreen_model::labels::PATIENT_PHONE)?
        .n_unique()?;
    info!(
        rows = report.height(),
        patients = patients_retained,
        min_outliers,
        "report assembled"
    );

    Ok(PipelineReport {
        results_in: validated.height(),
        outliers: outliers.height(),
        patients_retained,
        report,
    })
}
