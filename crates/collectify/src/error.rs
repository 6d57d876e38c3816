//! Error types for the collectify crate.

use thiserror::Error;

/// Errors that can occur when converting or validating collection input.
///
/// "Not found" is never an error: lookups such as
/// [`Collection::find_where`](crate::Collection::find_where) return `None`.
#[derive(Debug, Error)]
pub enum CollectifyError {
    /// An argument violated the operation's input contract.
    #[error("invalid argument to {operation}: {reason}")]
    InvalidArgument {
        operation: &'static str,
        reason: String,
    },

    /// The requested header row does not exist in the table.
    #[error("header index {index} is out of bounds for a table with {rows} rows")]
    HeaderIndexOutOfBounds { index: usize, rows: usize },

    /// A data row has fewer cells than the header and the options reject it.
    #[error("row {row} has {actual} cells but the header has {expected}")]
    RowTooShort {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Failure reading CSV input.
    #[error("invalid csv input: {0}")]
    Csv(#[from] csv::Error),

    /// Failure reading or writing JSON.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

impl CollectifyError {
    pub(crate) fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        CollectifyError::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }
}

/// Result type for collectify operations.
pub type Result<T> = std::result::Result<T, CollectifyError>;
