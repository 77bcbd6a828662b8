use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Report errors
// ---------------------------------------------------------------------------

/// Data-access and export failures raised while building a report.
///
/// Loading the table itself uses `anyhow` with file/row context; everything
/// that happens once the table is in memory reports one of these.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("column '{0}' not found in dataset")]
    MissingColumn(String),

    #[error("column '{column}', row {row}: expected {expected}, found '{found}'")]
    ColumnType {
        column: String,
        row: usize,
        expected: &'static str,
        found: String,
    },

    #[error("dataset has no rows")]
    EmptyDataset,

    #[error("no numeric values in {0}")]
    NoValues(String),

    #[error("unknown group value {0} (expected 0 = control, 1 = SmartScan first, 2 = Ultrasound first)")]
    UnknownGroup(i64),

    #[error("unknown view '{name}' (available: {available})")]
    UnknownView { name: String, available: String },

    #[error("failed to export {}: {reason}", path.display())]
    Export { path: PathBuf, reason: String },
}
