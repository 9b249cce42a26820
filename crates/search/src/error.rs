//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while configuring or feeding the matcher.
///
/// Matching itself never fails; these only come from option validation
/// and from decoding candidate lists.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Match options out of range
    #[error("Invalid match options: {0}")]
    InvalidOptions(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error code for integration with countries-core error handling.
/// Range: 10xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Match options out of range
    InvalidOptions = 10001,
    /// JSON parsing error
    JsonParsing = 10002,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::InvalidOptions(_) => SearchErrorCode::InvalidOptions,
            SearchError::Json(_) => SearchErrorCode::JsonParsing,
        }
    }
}
