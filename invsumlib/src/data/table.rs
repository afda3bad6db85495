//! In-memory inventory table.
//!
//! Cells are kept exactly as read: no type inference happens here, so the
//! summarizer always sees text.

use serde::{Deserialize, Serialize};

/// Row-major table of string cells.
///
/// Every row has exactly `headers.len()` cells; the loader pads short rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Header labels from the first line (kept for diagnostics only)
    pub headers: Vec<String>,
    /// Data rows
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Number of columns declared by the header.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether a column exists at `index`.
    pub fn has_column(&self, index: usize) -> bool {
        index < self.width()
    }

    /// Values of the column at `index`, top to bottom.
    ///
    /// A column beyond the table's width is empty rather than an error.
    pub fn column(&self, index: usize) -> Vec<&str> {
        if !self.has_column(index) {
            return Vec::new();
        }
        self.rows
            .iter()
            .map(|row| row.get(index).map(String::as_str).unwrap_or(""))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::new(
            vec!["id".to_string(), "host".to_string(), "os".to_string()],
            vec![
                vec!["1".to_string(), "web01".to_string(), "Linux".to_string()],
                vec!["2".to_string(), "db01".to_string(), "".to_string()],
            ],
        )
    }

    #[test]
    fn test_column_by_position() {
        let table = sample_table();
        assert_eq!(table.column(1), vec!["web01", "db01"]);
        assert_eq!(table.column(2), vec!["Linux", ""]);
    }

    #[test]
    fn test_missing_column_is_empty() {
        let table = sample_table();
        assert!(!table.has_column(7));
        assert!(table.column(7).is_empty());
    }

    #[test]
    fn test_dimensions() {
        let table = sample_table();
        assert_eq!(table.width(), 3);
        assert_eq!(table.row_count(), 2);
    }
}
