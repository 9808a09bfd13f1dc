//! Newtype product identifier.
//!
//! Wrapping the raw integer prevents accidentally mixing product ids with
//! page numbers, limits, or counts at call sites.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique product identifier.
///
/// Also serves as the cursor token for cursor pagination: a cursor is the id
/// of the last item returned by the previous call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Create an id from a raw integer.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw integer value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
