//! Run configuration.
//!
//! All paths and knobs are resolved once here, from CLI flags with
//! environment fallbacks, and threaded through the run as one value. Inner
//! components never read the environment.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, bail};

/// Environment fallback for the data folder.
pub const ENV_DATA_DIR: &str = "MEDSCREEN_DATA_DIR";
/// Environment fallback for the result sheet path.
pub const ENV_RESULTS: &str = "MEDSCREEN_RESULTS";
/// Environment fallback for the vocabulary document path.
pub const ENV_VOCABULARY: &str = "MEDSCREEN_VOCABULARY";

/// Default file names inside the data folder.
const REFERENCE_FILE: &str = "med_an_name.csv";
const PATIENTS_FILE: &str = "med_name.csv";
const RESULTS_FILE: &str = "medicine.csv";
const VOCABULARY_FILE: &str = "enum_values.json";
const REPORT_FILE: &str = "result.csv";

/// Fully resolved configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub reference_path: PathBuf,
    pub patients_path: PathBuf,
    pub results_path: PathBuf,
    pub vocabulary_path: PathBuf,
    pub report_path: PathBuf,
    pub min_outliers: u32,
}

impl RunConfig {
    /// Resolve the configuration from explicit options and the environment.
    pub fn resolve(
        data_dir: Option<PathBuf>,
        results: Option<PathBuf>,
        vocabulary: Option<PathBuf>,
        report: Option<PathBuf>,
        min_outliers: u32,
    ) -> Result<Self> {
        let data_dir = match data_dir.or_else(|| env_path(ENV_DATA_DIR)) {
            Some(dir) => dir,
            None => bail!("no data folder given (pass DATA_DIR or set {ENV_DATA_DIR})"),
        };

        Ok(Self {
            reference_path: data_dir.join(REFERENCE_FILE),
            patients_path: data_dir.join(PATIENTS_FILE),
            results_path: results
                .or_else(|| env_path(ENV_RESULTS))
                .unwrap_or_else(|| data_dir.join(RESULTS_FILE)),
            vocabulary_path: vocabulary
                .or_else(|| env_path(ENV_VOCABULARY))
                .unwrap_or_else(|| data_dir.join(VOCABULARY_FILE)),
            report_path: report.unwrap_or_else(|| data_dir.join(REPORT_FILE)),
            min_outliers,
        })
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key).filter(|v| !v.is_empty()).map(PathBuf::from)
}
