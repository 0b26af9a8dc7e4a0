//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use medscreen_core::DEFAULT_MIN_OUTLIERS;

#[derive(Parser)]
#[command(
    name = "medscreen",
    version,
    about = "Screen medical test results for out-of-range values",
    long_about = "Validate a batch of medical test results against reference \
                  ranges, flag outliers, aggregate them per patient and write \
                  a conclusion report."
)]
pub struct Cli {
    /// Folder containing the reference, patient and result CSV files.
    ///
    /// Falls back to the MEDSCREEN_DATA_DIR environment variable.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Result sheet path (default: <DATA_DIR>/medicine.csv, env MEDSCREEN_RESULTS).
    #[arg(long = "results", value_name = "PATH")]
    pub results: Option<PathBuf>,

    /// Vocabulary document path (default: <DATA_DIR>/enum_values.json,
    /// env MEDSCREEN_VOCABULARY).
    #[arg(long = "vocabulary", value_name = "PATH")]
    pub vocabulary: Option<PathBuf>,

    /// Report output path (default: <DATA_DIR>/result.csv).
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Minimum outlier count for a patient to appear in the report.
    #[arg(long = "min-outliers", value_name = "N", default_value_t = DEFAULT_MIN_OUTLIERS)]
    pub min_outliers: u32,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
