//! Typed frame readers and the report writer.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use polars::prelude::{
    CsvReadOptions, CsvWriter, DataFrame, DataType, Schema, SerReader, SerWriter,
};
use tracing::debug;

use medscreen_model::labels::{PATIENT_COLUMNS, REFERENCE_COLUMNS};

fn read_with_schema(path: &Path, schema: Schema) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_schema_overwrite(Some(Arc::new(schema)))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("open csv: {}", path.display()))?
        .finish()
        .with_context(|| format!("read csv: {}", path.display()))?;
    Ok(df)
}

fn require_columns(df: &DataFrame, columns: &[&str], path: &Path) -> Result<()> {
    for column in columns {
        if df.column(column).is_err() {
            bail!("{}: missing column '{column}'", path.display());
        }
    }
    Ok(())
}

/// Read the analysis-definition reference table.
///
/// Bounds are read as floats and ids as integers; `is_simple` stays textual
/// ("Y" or anything else) for the core to interpret.
pub fn read_reference_frame(path: &Path) -> Result<DataFrame> {
    let mut schema = Schema::with_capacity(5);
    schema.with_column("id".into(), DataType::Int64);
    schema.with_column("name".into(), DataType::String);
    schema.with_column("is_simple".into(), DataType::String);
    schema.with_column("min_value".into(), DataType::Float64);
    schema.with_column("max_value".into(), DataType::Float64);
    let df = read_with_schema(path, schema)?;
    require_columns(&df, &REFERENCE_COLUMNS, path)?;
    debug!(path = %path.display(), rows = df.height(), "read reference table");
    Ok(df)
}

/// Read the patient reference table.
pub fn read_patient_frame(path: &Path) -> Result<DataFrame> {
    let mut schema = Schema::with_capacity(3);
    schema.with_column("id".into(), DataType::Int64);
    schema.with_column("name".into(), DataType::String);
    schema.with_column("phone".into(), DataType::String);
    let df = read_with_schema(path, schema)?;
    require_columns(&df, &PATIENT_COLUMNS, path)?;
    debug!(path = %path.display(), rows = df.height(), "read patient table");
    Ok(df)
}

/// Write a report frame as CSV.
pub fn write_report_csv(path: &Path, report: &mut DataFrame) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create report: {}", path.display()))?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(report)
        .with_context(|| format!("write report: {}", path.display()))?;
    debug!(path = %path.display(), rows = report.height(), "wrote report");
    Ok(())
}
