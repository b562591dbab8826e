//! Error types for Tasklog core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in record store operations.
///
/// Every failure path of the store maps to exactly one variant. None of them
/// leave the record file partially written.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The record file could not be read or replaced.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] tasklog_storage::StorageError),

    /// The record file is malformed.
    #[error("record file is malformed: {0}")]
    Decode(#[from] tasklog_codec::CodecError),

    /// No record has the given number.
    #[error("record {number} not found")]
    NotFound {
        /// The number that was looked up.
        number: String,
    },

    /// The field does not exist or cannot be updated.
    #[error("field `{field}` cannot be updated")]
    InvalidField {
        /// The field name supplied by the caller.
        field: String,
    },

    /// The value is not acceptable for the field.
    #[error("invalid value {value:?} for field `{field}`")]
    InvalidValue {
        /// Canonical field name.
        field: &'static str,
        /// The value supplied by the caller.
        value: String,
    },

    /// A new record failed validation.
    #[error("validation failed: {message}")]
    Validation {
        /// Description of the problem.
        message: String,
    },
}

impl CoreError {
    /// Creates a not found error.
    pub fn not_found(number: impl Into<String>) -> Self {
        Self::NotFound {
            number: number.into(),
        }
    }

    /// Creates an invalid field error.
    pub fn invalid_field(field: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Returns true if the error was caused by the caller's input rather
    /// than by the record file or the storage underneath it.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::InvalidField { .. }
                | Self::InvalidValue { .. }
                | Self::Validation { .. }
        )
    }
}
