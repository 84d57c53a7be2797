//! Error types for the cart parsing pipeline.
//!
//! - [`ReadError`] - reading and decoding the input file
//! - [`ParseError`] - top-level orchestration errors
//! - [`ExportError`] - rendering results as JSON or CSV
//!
//! Validation problems themselves are not errors: the validator returns
//! [`ErrorDescriptor`]s and only the orchestrator turns a non-empty list
//! into [`ParseError::Validation`].

use std::path::PathBuf;
use thiserror::Error;

use crate::models::ErrorDescriptor;

// =============================================================================
// Read Errors
// =============================================================================

/// Errors while obtaining the raw CSV text.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Failed to read file.
    #[error("Failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content could not be decoded with the requested encoding.
    #[error("Failed to decode content: {0}")]
    Encoding(String),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level errors returned by [`crate::CartParser::parse`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input could not be read.
    #[error("Read error: {0}")]
    Read(#[from] ReadError),

    /// The input did not match the cart schema.
    #[error("Validation failed!")]
    Validation { errors: Vec<ErrorDescriptor> },
}

impl ParseError {
    /// Descriptors collected by the validator, empty for read failures.
    pub fn validation_errors(&self) -> &[ErrorDescriptor] {
        match self {
            ParseError::Validation { errors } => errors,
            ParseError::Read(_) => &[],
        }
    }
}

// =============================================================================
// Export Errors
// =============================================================================

/// Errors while rendering results.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for read operations.
pub type ReadResult<T> = Result<T, ReadError>;

/// Result type for pipeline operations.
pub type ParseOutcome<T> = Result<T, ParseError>;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ErrorKind;

    #[test]
    fn test_validation_message_is_fixed() {
        let err = ParseError::Validation {
            errors: vec![ErrorDescriptor::new(ErrorKind::Row, 1, -1, "bad row")],
        };
        assert_eq!(err.to_string(), "Validation failed!");
        assert_eq!(err.validation_errors().len(), 1);
    }

    #[test]
    fn test_read_error_conversion() {
        let read = ReadError::Io {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let err: ParseError = read.into();
        let msg = err.to_string();
        assert!(msg.contains("missing.csv"));
        assert!(msg.contains("no such file"));
        assert!(err.validation_errors().is_empty());
    }
}
