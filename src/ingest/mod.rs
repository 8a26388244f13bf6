//! Record parser
//!
//! Turns raw input into an ordered sequence of [`Record`]s. Two encodings are
//! accepted:
//!
//! - **Delimited text** with a header row (comma, tab, semicolon or pipe separated)
//! - **JSON**: an array of flat objects
//!
//! # Format Detection
//!
//! Input whose first non-whitespace character is `[` is JSON, anything else
//! is delimited text. Files additionally treat a `.json` extension as JSON.
//!
//! # Example
//!
//! ```ignore
//! use distvis_rs::ingest::{self, RawInput};
//!
//! let records = ingest::parse_str("SupplierID,Model\nS1,M1\n")?;
//! let pasted = ingest::parse(RawInput::text(r#"[{"SupplierID":"S1"}]"#))?;
//! let loaded = ingest::parse_file("distribution.csv")?;
//! ```

pub mod delimited;
pub mod error;
pub mod json;

pub use delimited::{detect_delimiter, parse_delimited};
pub use error::{ParseError, ParseResult};
pub use json::{parse_json, records_from_json};

use crate::types::Record;
use std::path::Path;

/// Encoding of a piece of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Delimited text with a header row
    Delimited,
    /// JSON array of objects
    Json,
}

impl InputFormat {
    /// Detect the encoding from the content alone
    pub fn sniff(text: &str) -> Self {
        if strip_bom(text).trim_start().starts_with('[') {
            InputFormat::Json
        } else {
            InputFormat::Delimited
        }
    }

    /// Detect the encoding of a file: a `.json` extension or JSON content
    pub fn for_file(name: &str, text: &str) -> Self {
        let json_extension = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if json_extension {
            InputFormat::Json
        } else {
            Self::sniff(text)
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InputFormat::Delimited => "delimited text",
            InputFormat::Json => "JSON",
        }
    }
}

/// Raw input handed to the parser
#[derive(Debug, Clone)]
pub enum RawInput {
    /// Pasted or in-memory text
    Text(String),
    /// Decoded contents of an opened file
    File { name: String, contents: String },
}

impl RawInput {
    pub fn text(text: impl Into<String>) -> Self {
        RawInput::Text(text.into())
    }

    pub fn file(name: impl Into<String>, contents: impl Into<String>) -> Self {
        RawInput::File {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// The encoding this input will be parsed as
    pub fn format(&self) -> InputFormat {
        match self {
            RawInput::Text(text) => InputFormat::sniff(text),
            RawInput::File { name, contents } => InputFormat::for_file(name, contents),
        }
    }

    fn contents(&self) -> &str {
        match self {
            RawInput::Text(text) => text,
            RawInput::File { contents, .. } => contents,
        }
    }
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Parse raw input into records.
///
/// Either the complete record sequence is returned or an error; there are no
/// partial results.
pub fn parse(input: RawInput) -> ParseResult<Vec<Record>> {
    let format = input.format();
    let text = strip_bom(input.contents());

    let records = match format {
        InputFormat::Json => parse_json(text)?,
        InputFormat::Delimited => parse_delimited(text)?,
    };

    tracing::debug!(
        "Parsed {} record(s) as {}",
        records.len(),
        format.display_name()
    );
    Ok(records)
}

/// Parse pasted or in-memory text
pub fn parse_str(text: &str) -> ParseResult<Vec<Record>> {
    parse(RawInput::text(text))
}

/// Read and parse a file
pub fn parse_file(path: impl AsRef<Path>) -> ParseResult<Vec<Record>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    parse(RawInput::file(name, contents))
}
