use std::path::PathBuf;

use crate::views;

// ---------------------------------------------------------------------------
// Report configuration
// ---------------------------------------------------------------------------

/// Where the study summary lives unless told otherwise.
pub const DEFAULT_INPUT: &str = "data/SmartScan Score Summary.csv";

/// Delimiter and number convention of the input table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFormat {
    pub delimiter: u8,
    /// Numbers are written with a decimal comma (`4,5`).
    pub decimal_comma: bool,
}

impl Default for TableFormat {
    fn default() -> Self {
        Self {
            delimiter: b';',
            decimal_comma: true,
        }
    }
}

/// Everything one report run needs.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub input_path: PathBuf,
    pub format: TableFormat,
    /// Directory the SVG files are written to.
    pub output_dir: PathBuf,
    /// Registry names of the views to render, in order.
    pub views: Vec<String>,
    /// Open the viewer window once all files are written.
    pub display: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            format: TableFormat::default(),
            output_dir: PathBuf::from("."),
            views: views::registry()
                .iter()
                .map(|v| v.name().to_string())
                .collect(),
            display: true,
        }
    }
}
