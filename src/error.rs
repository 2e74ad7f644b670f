//! Error types and handling
//!
//! This module contains the error type shared by the registry operations,
//! the table-backed store, and the command layer. Every failure is local to
//! one user action; nothing is retried and the application stays usable
//! afterwards. Running out of free rooms is deliberately *not* an error —
//! operations report it as a not-found value.

use crate::account::AccountError;
use thiserror::Error;

/// Errors that can occur during registry and store operations
#[derive(Debug, Error)]
pub enum HostelError {
    /// User input failed validation (empty or non-numeric field, unknown
    /// room type or status)
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Configuration loading or validation failed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Seed layout or stored room data is inconsistent (duplicate room
    /// numbers, empty layout, unexpected table contents)
    #[error("Layout error: {0}")]
    Layout(String),

    /// SQLite query or connection failure
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Account gate failure
    #[error("Account error: {0}")]
    Account(#[from] AccountError),
}

impl HostelError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a layout error
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            HostelError::Validation(_) => "Validation",
            HostelError::Configuration(_) => "Configuration",
            HostelError::Layout(_) => "Layout",
            HostelError::Storage(_) => "Storage",
            HostelError::Io(_) => "IO",
            HostelError::Serialization(_) => "Serialization",
            HostelError::Account(_) => "Account",
        }
    }
}

/// Result type for registry and store operations
pub type HostelResult<T> = Result<T, HostelError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_creation() {
        let error = HostelError::validation("Student name is empty");
        assert!(matches!(error, HostelError::Validation(_)));
        assert_eq!(error.to_string(), "Invalid input: Student name is empty");

        let error = HostelError::layout("duplicate room number 3");
        assert!(matches!(error, HostelError::Layout(_)));
        assert_eq!(error.to_string(), "Layout error: duplicate room number 3");
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(HostelError::validation("x").category(), "Validation");
        assert_eq!(HostelError::configuration("x").category(), "Configuration");
        assert_eq!(HostelError::layout("x").category(), "Layout");

        let io_error: HostelError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert_eq!(io_error.category(), "IO");
    }

    #[test]
    fn test_error_from_account_error() {
        let error: HostelError = AccountError::InvalidCredentials.into();
        assert!(matches!(error, HostelError::Account(AccountError::InvalidCredentials)));
        assert_eq!(error.category(), "Account");
    }

    #[test]
    fn test_hostel_result_type() {
        let success: HostelResult<u32> = Ok(7);
        assert!(success.is_ok());

        let failure: HostelResult<u32> = Err(HostelError::validation("bad"));
        assert!(failure.is_err());
    }
}
