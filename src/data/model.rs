use std::collections::BTreeMap;
use std::fmt;

use crate::error::ReportError;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the loaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell, typed by what the loader could parse.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.4}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Numeric view of the cell. `Null` reads as NaN, like a missing value
    /// in a data frame.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Float(v) => Some(*v),
            CellValue::Null => Some(f64::NAN),
            CellValue::Text(_) => None,
        }
    }

    /// Integer view of the cell; floats are accepted when they carry no
    /// fractional part.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CellValue::Integer(i) => Some(*i),
            CellValue::Float(v) if v.is_finite() && v.fract() == 0.0 => Some(*v as i64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The loaded table, stored column-wise.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Column names in header order (derived columns are appended).
    pub column_names: Vec<String>,
    columns: BTreeMap<String, Vec<CellValue>>,
    rows: usize,
}

impl Dataset {
    /// Build a dataset from a header and row-major records.
    ///
    /// Rows shorter than the header are padded with `Null`; the loader
    /// rejects ragged input before it gets here.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let n_rows = rows.len();
        let mut columns: BTreeMap<String, Vec<CellValue>> = headers
            .iter()
            .map(|h| (h.clone(), Vec::with_capacity(n_rows)))
            .collect();

        for row in rows {
            let mut cells = row.into_iter();
            for header in &headers {
                let cell = cells.next().unwrap_or(CellValue::Null);
                if let Some(col) = columns.get_mut(header) {
                    col.push(cell);
                }
            }
        }

        Dataset {
            column_names: headers,
            columns,
            rows: n_rows,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    #[cfg(test)]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    fn cells(&self, name: &str) -> Result<&[CellValue], ReportError> {
        let cells = self
            .columns
            .get(name)
            .ok_or_else(|| ReportError::MissingColumn(name.to_string()))?;
        if self.is_empty() {
            return Err(ReportError::EmptyDataset);
        }
        Ok(cells)
    }

    /// Read a column as floating point values.
    pub fn numeric(&self, name: &str) -> Result<Vec<f64>, ReportError> {
        self.cells(name)?
            .iter()
            .enumerate()
            .map(|(row, cell)| {
                cell.as_f64().ok_or_else(|| ReportError::ColumnType {
                    column: name.to_string(),
                    row,
                    expected: "a number",
                    found: cell.to_string(),
                })
            })
            .collect()
    }

    /// Read a column as integers.
    pub fn integers(&self, name: &str) -> Result<Vec<i64>, ReportError> {
        self.cells(name)?
            .iter()
            .enumerate()
            .map(|(row, cell)| {
                cell.as_i64().ok_or_else(|| ReportError::ColumnType {
                    column: name.to_string(),
                    row,
                    expected: "an integer",
                    found: cell.to_string(),
                })
            })
            .collect()
    }

    /// Add or replace a numeric column. `values` must have one entry per row.
    pub fn insert_numeric(&mut self, name: &str, values: Vec<f64>) {
        debug_assert_eq!(values.len(), self.rows);
        if !self.columns.contains_key(name) {
            self.column_names.push(name.to_string());
        }
        self.columns.insert(
            name.to_string(),
            values.into_iter().map(CellValue::Float).collect(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;

    #[test]
    fn numeric_widens_integers_and_reads_null_as_nan() {
        let ds = Dataset::from_rows(
            vec!["a".into()],
            vec![
                vec![CellValue::Integer(3)],
                vec![CellValue::Float(1.5)],
                vec![CellValue::Null],
            ],
        );
        let values = ds.numeric("a").unwrap();
        assert_eq!(values[0], 3.0);
        assert_eq!(values[1], 1.5);
        assert!(values[2].is_nan());
    }

    #[test]
    fn text_cell_is_a_type_error() {
        let ds = Dataset::from_rows(
            vec!["a".into()],
            vec![vec![CellValue::Integer(1)], vec![CellValue::Text("x".into())]],
        );
        match ds.numeric("a") {
            Err(ReportError::ColumnType { column, row, .. }) => {
                assert_eq!(column, "a");
                assert_eq!(row, 1);
            }
            other => panic!("expected ColumnType, got {other:?}"),
        }
    }

    #[test]
    fn integers_accept_whole_floats_only() {
        let ds = Dataset::from_rows(
            vec!["g".into()],
            vec![vec![CellValue::Float(2.0)], vec![CellValue::Float(2.5)]],
        );
        assert!(matches!(
            ds.integers("g"),
            Err(ReportError::ColumnType { row: 1, .. })
        ));
    }

    #[test]
    fn missing_column_is_named() {
        let ds = fixtures::study_dataset();
        match ds.numeric("Nope") {
            Err(ReportError::MissingColumn(name)) => assert_eq!(name, "Nope"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn empty_table_fails_on_access() {
        let ds = Dataset::from_rows(vec!["SS_Avg".into()], Vec::new());
        assert!(ds.has_column("SS_Avg"));
        assert!(matches!(ds.numeric("SS_Avg"), Err(ReportError::EmptyDataset)));
    }

    #[test]
    fn insert_numeric_replaces_in_place() {
        let mut ds = fixtures::study_dataset();
        let width = ds.column_names.len();
        ds.insert_numeric("ss_err", vec![1.0; ds.len()]);
        ds.insert_numeric("ss_err", vec![2.0; ds.len()]);
        assert_eq!(ds.column_names.len(), width + 1);
        assert!(ds.numeric("ss_err").unwrap().iter().all(|&v| v == 2.0));
    }
}
