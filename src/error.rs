//! Custom error types for the family ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors (resource cannot be opened, read or written)
    #[error("I/O error: {0}")]
    Io(String),

    /// A string that does not name a member of a closed enumeration
    #[error("Invalid {kind}: '{value}'")]
    InvalidEnumValue { kind: &'static str, value: String },

    /// A value rejected by a setter or by shell-level validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors (CSV encoding, temp file handling)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a "not found" error for ledger entries
    pub fn entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Entry",
            identifier: identifier.into(),
        }
    }

    /// Create an error for an unrecognised category name
    pub fn invalid_category(value: impl Into<String>) -> Self {
        Self::InvalidEnumValue {
            kind: "category",
            value: value.into(),
        }
    }

    /// Create an error for an unrecognised currency code
    pub fn invalid_currency(value: impl Into<String>) -> Self {
        Self::InvalidEnumValue {
            kind: "currency",
            value: value.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::InvalidEnumValue { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = LedgerError::entry_not_found("42");
        assert_eq!(err.to_string(), "Entry not found: 42");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_enum_value() {
        let err = LedgerError::invalid_category("FOOD");
        assert_eq!(err.to_string(), "Invalid category: 'FOOD'");
        assert!(err.is_invalid_argument());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }
}
