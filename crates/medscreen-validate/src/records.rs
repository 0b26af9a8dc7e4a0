//! Per-record schema validation for the result sheet.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::debug;

use medscreen_model::labels::{ANALYSIS, PATIENT_CODE, VALUE};
use medscreen_model::{RawTable, ResultRecord, Vocabulary};

use crate::error::ValidationError;
use crate::normalizer::normalize_value;

/// Required columns of the result sheet, by external label.
const REQUIRED: [&str; 3] = [PATIENT_CODE, ANALYSIS, VALUE];

/// Validate one raw record against the result schema.
///
/// `row` is indexed by `table.headers`; short rows read as empty cells.
pub fn validate_record(
    table: &RawTable,
    row: &[String],
    vocab: &Vocabulary,
) -> Result<ResultRecord, ValidationError> {
    let rendered = render_record(table, row);

    let patient_raw = required_cell(table, row, PATIENT_CODE, &rendered)?;
    let patient_code =
        parse_integer(patient_raw).ok_or_else(|| ValidationError::NotAnInteger {
            record: rendered.clone(),
            field: PATIENT_CODE.to_string(),
            value: patient_raw.to_string(),
        })?;

    let analysis = required_cell(table, row, ANALYSIS, &rendered)?.to_string();
    let value_raw = required_cell(table, row, VALUE, &rendered)?;

    Ok(ResultRecord {
        patient_code,
        analysis,
        value: normalize_value(value_raw, vocab),
    })
}

/// Validate a whole batch of raw result records, fail-fast.
///
/// The canonical output frame keeps the external column labels so downstream
/// joins key on the same names the source sheet used. The value column stays
/// textual; the classifier performs the strict numeric cast.
pub fn validate_results(
    table: &RawTable,
    vocab: &Vocabulary,
) -> Result<DataFrame, ValidationError> {
    for column in REQUIRED {
        if table.column_index(column).is_none() {
            return Err(ValidationError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    let mut patient_codes: Vec<i64> = Vec::with_capacity(table.rows.len());
    let mut analyses: Vec<String> = Vec::with_capacity(table.rows.len());
    let mut values: Vec<String> = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let record = validate_record(table, row, vocab)?;
        patient_codes.push(record.patient_code);
        analyses.push(record.analysis);
        values.push(record.value.as_cell());
    }
    debug!(records = patient_codes.len(), "validated result batch");

    let columns: Vec<Column> = vec![
        Series::new(PATIENT_CODE.into(), patient_codes).into(),
        Series::new(ANALYSIS.into(), analyses).into(),
        Series::new(VALUE.into(), values).into(),
    ];
    Ok(DataFrame::new(columns)?)
}

fn required_cell<'a>(
    table: &RawTable,
    row: &'a [String],
    column: &str,
    rendered: &str,
) -> Result<&'a str, ValidationError> {
    // Column presence was checked at batch entry.
    let index = table
        .column_index(column)
        .ok_or_else(|| ValidationError::MissingColumn {
            column: column.to_string(),
        })?;
    let cell = row.get(index).map(String::as_str).unwrap_or("").trim();
    if cell.is_empty() {
        return Err(ValidationError::MissingField {
            record: rendered.to_string(),
            field: column.to_string(),
        });
    }
    Ok(cell)
}

/// Accept plain integers and integral floats ("12", "12.0"), reject the rest.
fn parse_integer(raw: &str) -> Option<i64> {
    if let Ok(v) = raw.parse::<i64>() {
        return Some(v);
    }
    match raw.parse::<f64>() {
        Ok(v) if v.fract() == 0.0 => Some(v as i64),
        _ => None,
    }
}

fn render_record(table: &RawTable, row: &[String]) -> String {
    table
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| format!("{header}={}", table.cell(row, i)))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::{parse_integer, validate_results};
    use medscreen_model::labels::{ANALYSIS, PATIENT_CODE, VALUE};
    use medscreen_model::{RawTable, Vocabulary};

    fn sheet(rows: Vec<Vec<&str>>) -> RawTable {
        RawTable::new(
            vec![
                PATIENT_CODE.to_string(),
                ANALYSIS.to_string(),
                VALUE.to_string(),
            ],
            rows.into_iter()
                .map(|row| row.into_iter().map(str::to_string).collect())
                .collect(),
        )
    }

    fn vocab() -> Vocabulary {
        Vocabulary {
            negative: vec!["отр.".to_string()],
            positive: vec!["пол.".to_string()],
        }
    }

    #[test]
    fn valid_batch_keeps_external_labels() {
        let table = sheet(vec![vec!["7", "1", "пол."], vec!["8", "2", "13.5"]]);
        let df = validate_results(&table, &vocab()).unwrap();
        assert_eq!(
            df.get_column_names()
                .iter()
                .map(|n| n.as_str())
                .collect::<Vec<_>>(),
            vec![PATIENT_CODE, ANALYSIS, VALUE]
        );
        let codes = df.column(PATIENT_CODE).unwrap().i64().unwrap();
        assert_eq!(codes.get(0), Some(7));
        let values = df.column(VALUE).unwrap().str().unwrap();
        assert_eq!(values.get(0), Some("1")); // vocabulary hit
        assert_eq!(values.get(1), Some("13.5")); // pass-through
    }

    #[test]
    fn first_bad_record_aborts_batch() {
        let table = sheet(vec![vec!["7", "1", "пол."], vec!["x", "2", "5"]]);
        let err = validate_results(&table, &vocab()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("not an integer"), "{message}");
        // The offending record's content rides along.
        assert!(message.contains("Анализ=2"), "{message}");
    }

    #[test]
    fn empty_required_field_is_an_error() {
        let table = sheet(vec![vec!["7", "", "5"]]);
        let err = validate_results(&table, &vocab()).unwrap_err();
        assert!(err.to_string().contains("Анализ"));
    }

    #[test]
    fn missing_column_is_an_error() {
        let table = RawTable::new(
            vec![PATIENT_CODE.to_string(), ANALYSIS.to_string()],
            vec![vec!["7".to_string(), "1".to_string()]],
        );
        let err = validate_results(&table, &vocab()).unwrap_err();
        assert!(err.to_string().contains(VALUE));
    }

    #[test]
    fn integer_parsing_accepts_integral_floats() {
        assert_eq!(parse_integer("12"), Some(12));
        assert_eq!(parse_integer("12.0"), Some(12));
        assert_eq!(parse_integer("12.5"), None);
        assert_eq!(parse_integer("abc"), None);
    }
}
