//! Error types for the codec crate.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while decoding a record file.
///
/// Every row-level variant carries the 1-based line on which the offending
/// row starts, so a corrupted file can be fixed by hand.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The input is not valid UTF-8.
    #[error("record file is not valid UTF-8")]
    InvalidUtf8,

    /// A quoted field was still open at end of input.
    #[error("line {line}: unterminated quoted field")]
    UnterminatedQuote {
        /// Line on which the row starts.
        line: usize,
    },

    /// The header row lacks a required column.
    #[error("header is missing required column `{column}`")]
    MissingColumn {
        /// Canonical name of the missing column.
        column: &'static str,
    },

    /// The header row names a column the record file does not have.
    #[error("header has unknown column {column:?}")]
    UnknownColumn {
        /// The header text, trimmed.
        column: String,
    },

    /// The header row names the same column twice, possibly via a legacy name.
    #[error("header has column `{column}` more than once")]
    DuplicateColumn {
        /// Canonical name of the repeated column.
        column: &'static str,
    },

    /// A row has a different number of fields than the header.
    #[error("line {line}: expected {expected} fields, found {actual}")]
    FieldCount {
        /// Line on which the row starts.
        line: usize,
        /// Field count of the header row.
        expected: usize,
        /// Field count of this row.
        actual: usize,
    },

    /// An attempt flag is not numeric.
    #[error("line {line}: column `{column}` holds non-numeric flag {value:?}")]
    InvalidFlag {
        /// Line on which the row starts.
        line: usize,
        /// Canonical column name.
        column: &'static str,
        /// The raw field text.
        value: String,
    },

    /// An attempt flag is numeric but neither 0 nor 1.
    #[error("line {line}: column `{column}` flag {value} is not 0 or 1")]
    FlagOutOfRange {
        /// Line on which the row starts.
        line: usize,
        /// Canonical column name.
        column: &'static str,
        /// The raw field text.
        value: String,
    },
}

impl CodecError {
    /// Returns the line the error refers to, if it is row-specific.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::UnterminatedQuote { line }
            | Self::FieldCount { line, .. }
            | Self::InvalidFlag { line, .. }
            | Self::FlagOutOfRange { line, .. } => Some(*line),
            Self::InvalidUtf8
            | Self::MissingColumn { .. }
            | Self::UnknownColumn { .. }
            | Self::DuplicateColumn { .. } => None,
        }
    }
}
