use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{CellValue, Dataset};
use crate::config::TableFormat;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the study summary table from disk.
///
/// Layout: a header row followed by one record per candidate, fields
/// separated by `format.delimiter`. Cells are typed on the fly (integer,
/// decimal number, text; empty is `Null`). No schema checks happen here:
/// a missing column only surfaces when a view asks for it.
pub fn load_table(path: &Path, format: &TableFormat) -> Result<Dataset> {
    let file = File::open(path).with_context(|| format!("opening table {}", path.display()))?;
    let dataset =
        read_table(file, format).with_context(|| format!("reading table {}", path.display()))?;

    log::info!(
        "Loaded {} rows with columns {:?} from {}",
        dataset.len(),
        dataset.column_names,
        path.display()
    );
    Ok(dataset)
}

/// Parse a table from any reader; the header row is required.
pub fn read_table<R: Read>(input: R, format: &TableFormat) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(format.delimiter)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .context("reading header row")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("row {row_no}"))?;
        rows.push(
            record
                .iter()
                .map(|cell| parse_cell(cell, format.decimal_comma))
                .collect(),
        );
    }

    Ok(Dataset::from_rows(headers, rows))
}

fn parse_cell(s: &str, decimal_comma: bool) -> CellValue {
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    let parsed = if decimal_comma {
        s.replace(',', ".").parse::<f64>()
    } else {
        s.parse::<f64>()
    };
    match parsed {
        Ok(f) => CellValue::Float(f),
        Err(_) => CellValue::Text(s.to_string()),
    }
}
