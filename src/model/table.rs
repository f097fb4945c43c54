//! Table types.

use serde::{Deserialize, Serialize};

/// A pipe table.
///
/// The first row is the header. Rows keep whatever number of cells the
/// source line had; nothing is padded or truncated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Rows of trimmed cell strings
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Create a table from rows of cell values.
    pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (widest row).
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the header row.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Get body rows (everything after the header).
    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Check if rows differ in length.
    pub fn is_ragged(&self) -> bool {
        let mut lengths = self.rows.iter().map(Vec::len);
        match lengths.next() {
            Some(first) => lengths.any(|len| len != first),
            None => false,
        }
    }
}

/// Split a pipe-wrapped line into trimmed cells.
///
/// The outer pipes are dropped; `| a | b |` yields `["a", "b"]`. A lone
/// `|` is both the opening and the closing pipe and yields one empty cell.
pub(crate) fn split_cells(trimmed: &str) -> Vec<String> {
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_new() {
        let table = Table::new();
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
        assert!(table.header().is_none());
        assert!(table.body().is_empty());
    }

    #[test]
    fn test_table_with_data() {
        let table = Table::from_rows([vec!["Name", "Age"], vec!["Alice", "30"], vec!["Bob"]]);

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.header().unwrap(), ["Name", "Age"]);
        assert_eq!(table.body().len(), 2);
        assert!(table.is_ragged());
    }

    #[test]
    fn test_split_cells() {
        assert_eq!(split_cells("| a | b |"), vec!["a", "b"]);
        assert_eq!(split_cells("|a||c|"), vec!["a", "", "c"]);
        assert_eq!(split_cells("||"), vec![""]);
    }

    #[test]
    fn test_split_cells_lone_pipe() {
        assert_eq!(split_cells("|"), vec![""]);
    }

    #[test]
    fn test_add_row() {
        let mut table = Table::new();
        table.add_row(vec!["h".to_string()]);
        table.add_row(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(table.header().unwrap(), ["h"]);
        assert_eq!(table.body(), [vec!["a".to_string(), "b".to_string()]]);
    }
}
