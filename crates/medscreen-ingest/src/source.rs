//! Capability traits at the storage boundary.
//!
//! The pipeline only needs three tables in and one table out. Callers inject
//! an implementation; the core never sees a path or a connection. The CSV
//! adapters below are the stock implementation; a database-backed one would
//! implement the same traits.

use std::path::PathBuf;

use anyhow::Result;
use polars::prelude::DataFrame;

use medscreen_model::RawTable;

use crate::csv_table::read_csv_table;
use crate::frames::{read_patient_frame, read_reference_frame, write_report_csv};

/// Supplies the three input tables of a pipeline run.
pub trait TableReader {
    /// The analysis-definition reference table.
    fn read_reference(&self) -> Result<DataFrame>;
    /// The patient reference table.
    fn read_patients(&self) -> Result<DataFrame>;
    /// The raw result sheet, untyped.
    fn read_results(&self) -> Result<RawTable>;
}

/// Accepts the final report table.
pub trait TableWriter {
    fn write_report(&self, report: &mut DataFrame) -> Result<()>;
}

/// CSV-backed [`TableReader`].
#[derive(Debug, Clone)]
pub struct CsvTableReader {
    pub reference_path: PathBuf,
    pub patients_path: PathBuf,
    pub results_path: PathBuf,
}

impl TableReader for CsvTableReader {
    fn read_reference(&self) -> Result<DataFrame> {
        read_reference_frame(&self.reference_path)
    }

    fn read_patients(&self) -> Result<DataFrame> {
        read_patient_frame(&self.patients_path)
    }

    fn read_results(&self) -> Result<RawTable> {
        read_csv_table(&self.results_path)
    }
}

/// CSV-backed [`TableWriter`].
#[derive(Debug, Clone)]
pub struct CsvTableWriter {
    pub report_path: PathBuf,
}

impl TableWriter for CsvTableWriter {
    fn write_report(&self, report: &mut DataFrame) -> Result<()> {
        write_report_csv(&self.report_path, report)
    }
}
