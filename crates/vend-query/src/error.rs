//! Query engine error types.

use thiserror::Error;

/// Errors surfaced at the fetch boundary.
///
/// "Nothing matched" is never an error: unknown ids, empty result sets, and
/// past-the-end pages come back as `None` or empty collections. Only
/// malformed options are rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Page size must be a positive integer.
    #[error("Invalid page size: {0}")]
    InvalidPageSize(i64),

    /// Cursor limit must be a positive integer.
    #[error("Invalid limit: {0}")]
    InvalidLimit(i64),
}
