//! Raw CSV table reading.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use medscreen_model::RawTable;

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file into a raw string table.
///
/// The first row is taken as the header row. Headers and cells are trimmed
/// and BOM-stripped; fully empty rows are skipped. No type inference happens
/// here, that is the validator's job.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Ok(RawTable::default());
    }

    let headers: Vec<String> = rows.remove(0).iter().map(|h| normalize_header(h)).collect();
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read raw csv table"
    );
    Ok(RawTable::new(headers, rows))
}
