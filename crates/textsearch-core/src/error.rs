//! Error types for textsearch

use thiserror::Error;

/// Main error type for substring-search operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// Pattern of length zero; the scan loops are undefined for it
    #[error("pattern must not be empty")]
    EmptyPattern,
}

/// Result type alias for substring-search operations
pub type Result<T> = std::result::Result<T, SearchError>;
