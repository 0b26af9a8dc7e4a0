//! Validation and value normalization for incoming result records.
//!
//! Two pieces live here:
//!
//! - **normalizer**: maps vocabulary terms ("positive"/"negative" spellings)
//!   to the canonical numeric 1/0, passing everything else through
//! - **records**: the per-record schema for the result sheet, applied
//!   fail-fast over a whole batch
//!
//! The batch aborts on the first failing record; every error carries the
//! rendered record content so the caller can report exactly what was wrong.

pub mod error;
pub mod normalizer;
pub mod records;

pub use error::ValidationError;
pub use normalizer::normalize_value;
pub use records::{validate_record, validate_results};
