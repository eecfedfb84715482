//! Custom error types for shoebox
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Why a field value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    /// A required field was empty after trimming
    Empty,
    /// The category is not one of the known categories
    UnknownCategory,
    /// The date is not a real calendar date in YYYY-MM-DD form
    InvalidDateFormat,
    /// The email address does not look like local@domain.tld
    InvalidEmailFormat,
}

impl std::fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationReason::Empty => write!(f, "must not be empty"),
            ValidationReason::UnknownCategory => write!(f, "is not a known category"),
            ValidationReason::InvalidDateFormat => {
                write!(f, "must be a real date in YYYY-MM-DD form")
            }
            ValidationReason::InvalidEmailFormat => {
                write!(f, "must look like name@example.com")
            }
        }
    }
}

/// The main error type for shoebox operations
#[derive(Error, Debug)]
pub enum ShoeboxError {
    /// A field value failed validation before anything touched the store
    #[error("Invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: ValidationReason,
    },

    /// No stored record with the given id
    #[error("{entity_type} not found: id {id}")]
    NotFound { entity_type: &'static str, id: i64 },

    /// A file could not be read or written
    #[error("I/O error on {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// An interchange document that could not be decoded at all
    #[error("Malformed document {}: {message}", path.display())]
    Malformed { path: PathBuf, message: String },

    /// Underlying SQLite failures
    #[error("Database error: {0}")]
    Database(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ShoeboxError {
    /// Create a validation error for a named field
    pub fn invalid(field: &'static str, reason: ValidationReason) -> Self {
        Self::Validation { field, reason }
    }

    /// Create a "not found" error for a record kind and id
    pub fn not_found(entity_type: &'static str, id: i64) -> Self {
        Self::NotFound { entity_type, id }
    }

    /// Create an I/O error tagged with the path involved
    pub fn io(path: impl Into<PathBuf>, cause: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.into(),
            message: cause.to_string(),
        }
    }

    /// Create a malformed-document error tagged with the path involved
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

// Implement From traits for common error types

impl From<rusqlite::Error> for ShoeboxError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<serde_json::Error> for ShoeboxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for shoebox operations
pub type ShoeboxResult<T> = Result<T, ShoeboxError>;
