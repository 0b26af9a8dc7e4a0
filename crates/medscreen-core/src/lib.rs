//! Screening core: reference normalization, outlier classification and
//! per-patient aggregation.
//!
//! Everything here is a deterministic function over immutable in-memory
//! frames. Data flows strictly forward:
//!
//! ```text
//! raw records -> validate -> classify (against normalized references)
//!             -> aggregate per patient -> report rows
//! ```
//!
//! File and database mechanics live in collaborating crates; this crate
//! never touches a path or a connection.

pub mod aggregate;
pub mod classify;
pub mod error;
pub mod pipeline;
pub mod reference;
mod util;

pub use aggregate::merge_with_patients;
pub use classify::flag_outliers;
pub use error::{PipelineError, Result};
pub use pipeline::{DEFAULT_MIN_OUTLIERS, PipelineReport, run_pipeline};
pub use reference::normalize_references;

/// Internal column carrying the classification verdict.
pub const IS_OUTLIER: &str = "is_outlier";
/// Internal column carrying the per-patient outlier count.
pub const OUTLIER_COUNT: &str = "outlier_count";
