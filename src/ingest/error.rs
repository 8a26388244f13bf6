//! Parser-specific error types.

use rust_i18n::t;
use thiserror::Error;

/// Errors raised while turning raw input into records.
///
/// The parser never returns partial results: any of these aborts the whole
/// parse and the caller keeps whatever data set it held before.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not valid JSON: expected an array of records")]
    NotAnArray,

    #[error("Not valid JSON: element {index} is not an object")]
    NotAnObject { index: usize },

    #[error("Not valid delimited text: {0}")]
    Delimited(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// True when the input was treated as JSON
    pub fn is_json(&self) -> bool {
        matches!(
            self,
            ParseError::Json(_) | ParseError::NotAnArray | ParseError::NotAnObject { .. }
        )
    }

    /// True when the input was treated as delimited text
    pub fn is_delimited(&self) -> bool {
        matches!(self, ParseError::Delimited(_))
    }

    /// Localized message for display, naming the format that failed
    pub fn user_message(&self) -> String {
        if self.is_json() {
            t!("parse_error_json").to_string()
        } else if self.is_delimited() {
            t!("parse_error_delimited").to_string()
        } else {
            t!("parse_error_io").to_string()
        }
    }
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;
