//! Filtered, sorted, paginated catalog queries with result caching.
//!
//! This crate is the query engine over a [`vend_core::Catalog`]:
//!
//! - **Filter**: pure predicate composition (category, search, sale, price, stock)
//! - **Sort**: stable reordering by named strategy
//! - **Pagination**: offset (page/page size) and cursor (last-seen id) models
//!   over the same filtered+sorted pipeline
//! - **Recommendations**: featured and related product selection
//! - **Fetch orchestrator**: async entry points that simulate network latency
//!   and route through a bounded, TTL'd [`vend_cache::QueryCache`]
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use vend_cache::QueryCache;
//! use vend_core::{Catalog, Category};
//! use vend_query::{ProductFetcher, QueryOptions, SortKey};
//!
//! # async fn run(catalog: Catalog) -> Result<(), vend_query::QueryError> {
//! let cache = Arc::new(QueryCache::new(50, Duration::from_secs(300)));
//! let fetcher = ProductFetcher::new(Arc::new(catalog), cache);
//!
//! let options = QueryOptions::default()
//!     .with_category(Category::Electronics)
//!     .with_sort(SortKey::PriceAsc)
//!     .with_page(1, 12);
//!
//! let page = fetcher.fetch_products(&options).await?;
//! println!("{} of {} items", page.items.len(), page.pagination.total);
//! # Ok(())
//! # }
//! ```

mod cursor;
mod error;
mod fetch;
mod filter;
mod latency;
mod options;
mod paginate;
mod recommend;
mod sort;

pub use cursor::{paginate_by_cursor, CursorPage};
pub use error::QueryError;
pub use fetch::{
    ProductFetcher, ProductsPage, QueryMeta, Suggestions, MIN_SUGGESTION_QUERY_LEN,
};
pub use filter::FilterCriteria;
pub use latency::{Latency, NoLatency, SimulatedLatency};
pub use options::{InfiniteOptions, QueryOptions, DEFAULT_PAGE_SIZE};
pub use paginate::{paginate, PageResult, Pagination};
pub use recommend::{featured_products, related_products};
pub use sort::{sort_products, SortKey, SORT_OPTIONS};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CursorPage, FilterCriteria, InfiniteOptions, Latency, NoLatency, PageResult, Pagination,
        ProductFetcher, ProductsPage, QueryError, QueryMeta, QueryOptions, SimulatedLatency,
        SortKey, Suggestions, SORT_OPTIONS,
    };
}
