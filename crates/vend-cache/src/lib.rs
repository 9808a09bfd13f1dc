//! Bounded, time-boxed query result cache.
//!
//! Provides:
//! - `QueryCache` - string-keyed memoization with TTL and insertion-order eviction
//! - `Clock` - injectable time source (`SystemClock` in production, `ManualClock` in tests)
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use vend_cache::QueryCache;
//!
//! let cache = QueryCache::new(50, Duration::from_secs(300));
//! cache.set("products:cat=books|page=1", &vec![1u64, 2, 3]).unwrap();
//!
//! let hit: Option<Vec<u64>> = cache.get("products:cat=books|page=1");
//! assert_eq!(hit, Some(vec![1, 2, 3]));
//! ```

mod clock;
mod error;
mod query_cache;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::CacheError;
pub use query_cache::{QueryCache, DEFAULT_CAPACITY, DEFAULT_TTL};
