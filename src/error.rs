//! Error types for nearest-vector search

use thiserror::Error;

/// Result type alias for search operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Error types that can occur during a search
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid query: {reason}")]
    InvalidQuery { reason: String },

    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },
}
