//! Data model for the medical result screening pipeline.
//!
//! This crate defines the shapes shared across the workspace:
//!
//! - **records**: analysis definitions, patients, validated result records
//! - **labels**: the external column labels used as join keys end to end
//! - **table**: the raw string table handed from ingest to validation
//! - **vocabulary**: the positive/negative value vocabulary

pub mod labels;
pub mod records;
pub mod table;
pub mod vocabulary;

pub use records::{AnalysisDefinition, Conclusion, Patient, ResultRecord, ResultValue};
pub use table::RawTable;
pub use vocabulary::Vocabulary;
