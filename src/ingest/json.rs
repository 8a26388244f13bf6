//! JSON array decoder.

use crate::ingest::error::{ParseError, ParseResult};
use crate::types::Record;
use serde_json::Value;

/// Decode a JSON array of flat objects into records.
pub fn parse_json(text: &str) -> ParseResult<Vec<Record>> {
    let value: Value = serde_json::from_str(text)?;
    records_from_json(value)
}

/// Convert an already-decoded JSON value into records.
///
/// Used directly by callers that fetched a data set elsewhere (e.g. a bundled
/// default data set) and only need the shape check.
pub fn records_from_json(value: Value) -> ParseResult<Vec<Record>> {
    let Value::Array(items) = value else {
        return Err(ParseError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(Record::from(map)),
            _ => Err(ParseError::NotAnObject { index }),
        })
        .collect()
}
