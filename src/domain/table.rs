//! Tabular report model
//!
//! A [`ReportTable`] is the intermediate form every job produces before
//! upload: a header row plus ordered data rows of scalar [`Cell`]s. No
//! schema is enforced beyond what the builders produce; keeping every row
//! the same width as the header is the builder's responsibility.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A single scalar table cell
///
/// Grade and exam rows mix student names (text) with scores (integers and
/// floats), so cells carry their scalar kind until CSV encoding renders
/// them to text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// Text value
    Text(String),
    /// Integer value (user ids, counts)
    Int(i64),
    /// Floating-point value (scores)
    Float(f64),
}

impl Cell {
    /// Renders the cell as text, the form it takes in CSV output
    pub fn render(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) => f.to_string(),
        }
    }

    /// An empty text cell, used for missing values
    pub fn empty() -> Self {
        Cell::Text(String::new())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<i64> for Cell {
    fn from(i: i64) -> Self {
        Cell::Int(i)
    }
}

impl From<u64> for Cell {
    fn from(i: u64) -> Self {
        Cell::Int(i as i64)
    }
}

impl From<f64> for Cell {
    fn from(f: f64) -> Self {
        Cell::Float(f)
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::Text(if b { "True" } else { "False" }.to_string())
    }
}

/// An ordered table of report rows with a header
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportTable {
    /// Column names, rendered as row 0 of the CSV output
    pub header: Vec<String>,

    /// Data rows, in output order
    pub rows: Vec<Vec<Cell>>,
}

impl ReportTable {
    /// Creates an empty table with the given header
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Appends a data row
    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Number of data rows (header excluded)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Builds a table from keyed records, one row per record.
    ///
    /// `columns` becomes the header and fixes the cell order; a record
    /// missing a column renders an empty cell. Extra record keys are
    /// dropped. This mirrors how exam-attempt records with heterogeneous
    /// fields are shaped against a requested feature list.
    pub fn from_records(records: &[HashMap<String, Cell>], columns: &[String]) -> Self {
        let mut table = Self::new(columns.to_vec());
        for record in records {
            let row = columns
                .iter()
                .map(|column| record.get(column).cloned().unwrap_or_else(Cell::empty))
                .collect();
            table.push_row(row);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_render() {
        assert_eq!(Cell::Text("abc".to_string()).render(), "abc");
        assert_eq!(Cell::Int(42).render(), "42");
        assert_eq!(Cell::Float(91.5).render(), "91.5");
    }

    #[test]
    fn test_cell_from_conversions() {
        assert_eq!(Cell::from("x"), Cell::Text("x".to_string()));
        assert_eq!(Cell::from(7i64), Cell::Int(7));
        assert_eq!(Cell::from(true), Cell::Text("True".to_string()));
        assert_eq!(Cell::from(false), Cell::Text("False".to_string()));
    }

    #[test]
    fn test_report_table_push_and_count() {
        let mut table = ReportTable::new(vec!["a".to_string(), "b".to_string()]);
        assert!(table.is_empty());

        table.push_row(vec![Cell::from("1"), Cell::from("2")]);
        assert_eq!(table.row_count(), 1);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_from_records_preserves_column_order() {
        let mut record = HashMap::new();
        record.insert("username".to_string(), Cell::from("alice"));
        record.insert("score".to_string(), Cell::from(95i64));

        let columns = vec!["score".to_string(), "username".to_string()];
        let table = ReportTable::from_records(&[record], &columns);

        assert_eq!(table.header, columns);
        assert_eq!(table.rows[0], vec![Cell::Int(95), Cell::from("alice")]);
    }

    #[test]
    fn test_from_records_missing_column_renders_empty() {
        let mut record = HashMap::new();
        record.insert("username".to_string(), Cell::from("bob"));

        let columns = vec!["username".to_string(), "email".to_string()];
        let table = ReportTable::from_records(&[record], &columns);

        assert_eq!(table.rows[0], vec![Cell::from("bob"), Cell::empty()]);
    }

    #[test]
    fn test_from_records_is_deterministic() {
        let mut record = HashMap::new();
        record.insert("a".to_string(), Cell::from("1"));
        record.insert("b".to_string(), Cell::from("2"));
        let records = vec![record];
        let columns = vec!["a".to_string(), "b".to_string()];

        let first = ReportTable::from_records(&records, &columns);
        let second = ReportTable::from_records(&records, &columns);
        assert_eq!(first, second);
    }
}
