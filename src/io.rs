//! CSV reader for numeric tables.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use ndarray::Array2;

/// A numeric table parsed from CSV: named columns over an observation
/// matrix with shape `(n_rows, n_columns)`.
#[derive(Debug, Clone)]
pub struct NumericTable {
    /// Column names from the header row.
    pub columns: Vec<String>,
    /// Cell values; missing cells are NaN.
    pub data: Array2<f64>,
}

impl NumericTable {
    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    /// Index of a named column, case-insensitive.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
    }
}

/// Read a headered CSV file of numeric columns.
///
/// Empty cells and the markers `NA`, `NaN`, and `null` (any case) parse
/// to NaN so that missing data flows through the crate's propagation
/// semantics; anything else that fails to parse as a number is an error,
/// as is a row with the wrong number of fields.
pub fn read_matrix_csv<P: AsRef<Path>>(path: P) -> Result<NumericTable> {
    // Flexible so length checking happens here, with a row/field count
    // in the message, instead of inside the csv reader.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(&path)
        .with_context(|| format!("Failed to open CSV file: {}", path.as_ref().display()))?;

    let headers = reader.headers().context("Failed to read CSV header row")?;
    let columns: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
    if columns.is_empty() {
        return Err(anyhow!("CSV file has no columns"));
    }

    let mut values = Vec::new();
    let mut n_rows = 0usize;
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        if record.len() != columns.len() {
            return Err(anyhow!(
                "Row {} has {} fields, expected {}",
                row_idx + 1,
                record.len(),
                columns.len()
            ));
        }
        for (col_idx, field) in record.iter().enumerate() {
            values.push(parse_cell(field).with_context(|| {
                format!(
                    "Invalid value '{}' in column '{}' at row {}",
                    field,
                    columns[col_idx],
                    row_idx + 1
                )
            })?);
        }
        n_rows += 1;
    }

    let data = Array2::from_shape_vec((n_rows, columns.len()), values)
        .context("Failed to build data matrix")?;

    log::info!(
        "loaded {} rows x {} columns from {}",
        data.nrows(),
        data.ncols(),
        path.as_ref().display()
    );

    Ok(NumericTable { columns, data })
}

fn parse_cell(field: &str) -> Result<f64> {
    let trimmed = field.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("na")
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("null")
    {
        return Ok(f64::NAN);
    }
    trimmed
        .parse::<f64>()
        .map_err(|e| anyhow!("not a number: {}", e))
}
