//! External column labels.
//!
//! Incoming result sheets and the final report are keyed by the lab's own
//! (Russian) column labels. The validator accepts records under these labels
//! and re-emits them under the same labels, so every downstream join keys on
//! the external names rather than internal ones.

/// Result sheet: patient code column.
pub const PATIENT_CODE: &str = "Код пациента";
/// Result sheet: analysis identifier column.
pub const ANALYSIS: &str = "Анализ";
/// Result sheet: measured value column.
pub const VALUE: &str = "Значение";

/// Report: patient name column.
pub const PATIENT_NAME: &str = "Имя";
/// Report: patient phone column.
pub const PATIENT_PHONE: &str = "Телефон";
/// Report: analysis identifier column (renamed from [`ANALYSIS`]).
pub const ANALYSIS_NAME: &str = "Название анализа";
/// Report: analysis display label column.
pub const ANALYSIS_LABEL: &str = "Расшифровка анализа";
/// Report: conclusion column.
pub const CONCLUSION: &str = "Заключение";

/// Reference table: columns expected in the analysis-definition table.
pub const REFERENCE_COLUMNS: [&str; 5] = ["id", "name", "is_simple", "min_value", "max_value"];

/// Patient table: columns expected in the patient table.
pub const PATIENT_COLUMNS: [&str; 3] = ["id", "name", "phone"];

/// Marker value in `is_simple` for boolean (positive/negative) analyses.
pub const SIMPLE_FLAG: &str = "Y";
