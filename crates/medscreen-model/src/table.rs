/// A raw string table as read from a source file, before validation.
///
/// Cells are untyped text; the validator is responsible for coercion. The
/// ingest layer guarantees headers and cells are trimmed and BOM-free, and
/// that fully empty rows have been dropped.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Index of a column by its header, if present.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Cell content at (row, column), empty string when the row is short.
    pub fn cell<'a>(&'a self, row: &'a [String], index: usize) -> &'a str {
        row.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
