//! Delimited text decoder (CSV, TSV, semicolon or pipe separated).
//!
//! The first row is the header row and supplies the field names. Every
//! following non-empty row becomes one [`Record`]. Cell contents are kept
//! exactly as written; no trimming and no type inference happens here.

use crate::ingest::error::ParseResult;
use crate::types::Record;
use serde_json::Value;
use std::collections::HashMap;

/// Delimiters considered when sniffing the header row, in tie-break order.
pub const DELIMITER_CANDIDATES: &[u8] = b",\t;|";

/// Pick the delimiter that occurs most often (outside quotes) in the header row.
///
/// Falls back to a comma when no candidate appears.
pub fn detect_delimiter(text: &str) -> u8 {
    let header = text.lines().find(|l| !l.is_empty()).unwrap_or("");

    let mut best = (b',', 0usize);
    for &candidate in DELIMITER_CANDIDATES {
        let count = count_unquoted(header, candidate);
        if count > best.1 {
            best = (candidate, count);
        }
    }
    best.0
}

fn count_unquoted(line: &str, delimiter: u8) -> usize {
    let mut in_quotes = false;
    let mut count = 0;
    for b in line.bytes() {
        match b {
            b'"' => in_quotes = !in_quotes,
            b if b == delimiter && !in_quotes => count += 1,
            _ => {}
        }
    }
    count
}

/// Make header names unique: a repeated name `X` becomes `X_1`, `X_2`, ...
fn unique_headers(headers: &csv::StringRecord) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    headers
        .iter()
        .map(|name| {
            let n = seen.entry(name).or_insert(0);
            let unique = if *n == 0 {
                name.to_string()
            } else {
                format!("{}_{}", name, n)
            };
            *n += 1;
            unique
        })
        .collect()
}

/// Decode delimited text with a header row into records.
pub fn parse_delimited(text: &str) -> ParseResult<Vec<Record>> {
    let delimiter = detect_delimiter(text);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(text.as_bytes());

    let headers = unique_headers(reader.headers()?);
    let mut records = Vec::new();
    let mut overflowing_rows = 0usize;

    for row in reader.records() {
        let row = row?;
        if row.len() == 1 && row[0].is_empty() {
            continue;
        }
        if row.len() > headers.len() {
            overflowing_rows += 1;
        }

        // Short rows leave their trailing fields absent.
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(name, cell)| (name.clone(), Value::String(cell.to_string())))
            .collect();
        records.push(record);
    }

    if overflowing_rows > 0 {
        tracing::debug!(
            "Dropped extra cells from {} row(s) wider than the {}-column header",
            overflowing_rows,
            headers.len()
        );
    }

    Ok(records)
}
