//! The run command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use polars::prelude::SortMultipleOptions;
use tracing::info;

use medscreen_core::run_pipeline;
use medscreen_ingest::{
    CsvTableReader, CsvTableWriter, TableReader, TableWriter, load_vocabulary,
};
use medscreen_model::labels::{
    ANALYSIS_LABEL, ANALYSIS_NAME, CONCLUSION, PATIENT_NAME, PATIENT_PHONE,
};

use crate::config::RunConfig;

/// Counts and paths for the run summary.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub results_in: usize,
    pub outliers: usize,
    pub patients_retained: usize,
    pub report_rows: usize,
    pub report_path: PathBuf,
}

/// Load the inputs, run the pipeline, write the report.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let reader = CsvTableReader {
        reference_path: config.reference_path.clone(),
        patients_path: config.patients_path.clone(),
        results_path: config.results_path.clone(),
    };
    let writer = CsvTableWriter {
        report_path: config.report_path.clone(),
    };
    run_with(&reader, &writer, config)
}

/// Run against injected table adapters.
pub fn run_with(
    reader: &dyn TableReader,
    writer: &dyn TableWriter,
    config: &RunConfig,
) -> Result<RunSummary> {
    let vocab = load_vocabulary(&config.vocabulary_path)?;
    let definitions = reader.read_reference()?;
    let patients = reader.read_patients()?;
    let results = reader.read_results()?;
    info!(
        definitions = definitions.height(),
        patients = patients.height(),
        results = results.rows.len(),
        "inputs loaded"
    );

    let out = run_pipeline(
        &definitions,
        &patients,
        &results,
        &vocab,
        config.min_outliers,
    )
    .context("screening pipeline failed")?;

    // Final report projection: phone, name, analysis id, analysis label,
    // conclusion. The value and the boolean flag stay internal. The sort is
    // ours, purely for stable file diffs.
    let mut report = out
        .report
        .select([
            PATIENT_PHONE,
            PATIENT_NAME,
            ANALYSIS_NAME,
            ANALYSIS_LABEL,
            CONCLUSION,
        ])?
        .sort([PATIENT_NAME, ANALYSIS_NAME], SortMultipleOptions::default())?;
    writer.write_report(&mut report)?;
    info!(path = %config.report_path.display(), rows = report.height(), "report written");

    Ok(RunSummary {
        results_in: out.results_in,
        outliers: out.outliers,
        patients_retained: out.patients_retained,
        report_rows: report.height(),
        report_path: config.report_path.clone(),
    })
}
