//! CSV decoding into raw rows keyed by header name.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

pub type Row = HashMap<String, String>;

/// Reads every record of the CSV file at `path`.
pub fn read_rows(path: &Path) -> Result<Vec<Row>> {
    let file = std::fs::File::open(path)?;
    read_rows_from(file)
}

/// Reads every record from `source`. The first line is the header row.
///
/// Header names are trimmed; cell values are passed through untouched.
/// Short records simply lack the trailing fields.
pub fn read_rows_from<R: Read>(source: R) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(source);
    let headers = reader.headers().context("failed to read CSV header")?.clone();

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("failed to decode CSV record {index}"))?;
        let row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}
