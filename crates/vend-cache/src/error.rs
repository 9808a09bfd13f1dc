//! Cache error types.

use thiserror::Error;

/// Errors that can occur when using the cache.
///
/// Lookups never fail: expired or undecodable entries are treated as misses.
/// Only storing a value can surface an error.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Failed to serialize the value being stored.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
