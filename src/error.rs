//! Custom error types for tripbudget
//!
//! This module defines the error hierarchy for the engine and its adapters
//! using thiserror for ergonomic error definitions.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for tripbudget operations
#[derive(Error, Debug)]
pub enum TripBudgetError {
    /// A date range whose end precedes its start
    #[error("Invalid date range: {end} is before {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Statistics requested for a date outside the trip
    #[error("Date {date} is outside the trip ({start} to {end})")]
    OutOfRange {
        date: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl TripBudgetError {
    /// Create a "not found" error for trips
    pub fn trip_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Trip",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for trip files
    pub fn trip_file_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Trip file",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an out-of-range date error
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

impl From<std::io::Error> for TripBudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TripBudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for TripBudgetError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for tripbudget operations
pub type TripBudgetResult<T> = Result<T, TripBudgetError>;
