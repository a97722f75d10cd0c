//! # Error Types
//!
//! Structured error types for footprint_core. These errors are designed to
//! be informative for both humans and machine consumers, providing enough
//! context to understand and fix issues programmatically.
//!
//! The emission calculator itself never fails (unrecognized subtype labels
//! fall back to a documented default factor), so everything here belongs to
//! the record import/export path and to frontends validating raw input.
//!
//! ## Example
//!
//! ```rust
//! use footprint_core::errors::{FootprintError, FootprintResult};
//!
//! fn validate_distance(distance_km: f64) -> FootprintResult<()> {
//!     if distance_km < 0.0 {
//!         return Err(FootprintError::invalid_input(
//!             "distance_km",
//!             distance_km.to_string(),
//!             "Distance must be non-negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for footprint_core operations
pub type FootprintResult<T> = Result<T, FootprintError>;

/// Structured error type for record processing and input validation.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by frontends.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FootprintError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required column is missing from an imported dataset
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    /// A date cell could not be parsed
    #[error("Invalid date in row {row}: '{value}'")]
    InvalidDate { row: usize, value: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// CSV parsing or writing error
    #[error("CSV error: {reason}")]
    CsvError { reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl FootprintError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FootprintError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingColumn error
    pub fn missing_column(column: impl Into<String>) -> Self {
        FootprintError::MissingColumn {
            column: column.into(),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(row: usize, value: impl Into<String>) -> Self {
        FootprintError::InvalidDate {
            row,
            value: value.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FootprintError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a CsvError
    pub fn csv_error(reason: impl Into<String>) -> Self {
        FootprintError::CsvError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FootprintError::InvalidInput { .. } => "INVALID_INPUT",
            FootprintError::MissingColumn { .. } => "MISSING_COLUMN",
            FootprintError::InvalidDate { .. } => "INVALID_DATE",
            FootprintError::FileError { .. } => "FILE_ERROR",
            FootprintError::CsvError { .. } => "CSV_ERROR",
            FootprintError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = FootprintError::invalid_input("nights", "-2", "Nights must be non-negative");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: FootprintError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            FootprintError::missing_column("date").error_code(),
            "MISSING_COLUMN"
        );
        assert_eq!(
            FootprintError::invalid_date(3, "not-a-date").error_code(),
            "INVALID_DATE"
        );
    }

    #[test]
    fn test_display_messages() {
        let error = FootprintError::missing_column("activity_type");
        assert_eq!(
            error.to_string(),
            "Missing required column: activity_type"
        );
    }
}
