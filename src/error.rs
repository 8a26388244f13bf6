//! Crate-wide error type
//!
//! Parsing has its own error enum ([`ParseError`]); configuration and
//! persistence report through [`DistVisError`], which wraps it. Summary
//! failures arrive as worker events instead. Filtering and grouping are
//! total and have no error type.

use crate::ingest::ParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DistVisError {
    /// A data set could not be decoded
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Config or display settings file unreadable, malformed or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Another error annotated with what was being attempted
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<DistVisError>,
    },
}

impl DistVisError {
    /// Wrap this error with a description of the failed operation
    pub fn with_context(self, context: impl Into<String>) -> Self {
        DistVisError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Innermost error, looking through any context layers
    pub fn root(&self) -> &DistVisError {
        match self {
            DistVisError::WithContext { source, .. } => source.root(),
            other => other,
        }
    }

    /// The parse error at the root of this error, if any
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self.root() {
            DistVisError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DistVisError>;

/// Attach context to any result whose error converts into [`DistVisError`]
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Like [`context`](ResultExt::context), building the message only on error
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<DistVisError>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DistVisError::Config("Invalid sample limit".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid sample limit");
    }

    #[test]
    fn test_nested_context() {
        let err = DistVisError::Config("bad".to_string())
            .with_context("Loading settings")
            .with_context("Startup");
        assert_eq!(err.to_string(), "Startup: Loading settings: Configuration error: bad");
        assert!(matches!(err.root(), DistVisError::Config(_)));
    }

    #[test]
    fn test_parse_error_through_context() {
        let result: std::result::Result<(), ParseError> = Err(ParseError::NotAnArray);
        let err = result.context("Loading data.json").unwrap_err();
        assert!(err.to_string().starts_with("Loading data.json"));
        assert!(err.as_parse_error().is_some_and(ParseError::is_json));
    }
}
