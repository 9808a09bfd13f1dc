//! The fetch orchestrator: public async entry points over filter, sort,
//! pagination, and the query cache.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use vend_cache::{Clock, QueryCache, SystemClock};
use vend_core::{Catalog, Category, Product, ProductId};

use crate::cursor::{paginate_by_cursor, CursorPage};
use crate::error::QueryError;
use crate::filter::FilterCriteria;
use crate::latency::{Latency, SimulatedLatency};
use crate::options::{InfiniteOptions, QueryOptions};
use crate::paginate::{paginate, Pagination};
use crate::recommend::{featured_products, related_products};
use crate::sort::sort_products;

/// Queries shorter than this return empty suggestions without touching the
/// cache or the catalog.
pub const MIN_SUGGESTION_QUERY_LEN: usize = 2;

/// Query metadata echoed back with every products page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryMeta {
    /// The options that produced this page, as applied.
    pub applied: QueryOptions,
    /// When the page was computed, millis since the Unix epoch.
    pub fetched_at_millis: u64,
}

/// A page of products plus echoed query metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductsPage {
    /// The items on this page.
    pub items: Vec<Product>,
    /// Pagination metadata.
    pub pagination: Pagination,
    /// Echoed query metadata.
    pub meta: QueryMeta,
}

/// Name suggestions plus a matching product sample.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Suggestions {
    /// Deduplicated product names matching the query.
    pub suggestions: Vec<String>,
    /// The matching products themselves, capped by the same limit.
    pub products: Vec<Product>,
}

/// The public entry points composing filter, sort, pagination, and cache.
///
/// Constructed once at application start and passed to callers; there is no
/// module-level singleton. Every entry point pauses on the injected latency
/// seam before touching cache or catalog, then routes through the cache.
pub struct ProductFetcher {
    catalog: Arc<Catalog>,
    cache: Arc<QueryCache>,
    latency: Arc<dyn Latency>,
    clock: Arc<dyn Clock>,
    /// Fixed seed for featured-product sampling; `None` means entropy.
    featured_seed: Option<u64>,
    /// Full catalog scans performed, for cache-behavior assertions.
    scans: AtomicU64,
}

impl ProductFetcher {
    /// Create a fetcher with simulated latency and the system clock.
    pub fn new(catalog: Arc<Catalog>, cache: Arc<QueryCache>) -> Self {
        Self {
            catalog,
            cache,
            latency: Arc::new(SimulatedLatency::default()),
            clock: Arc::new(SystemClock),
            featured_seed: None,
            scans: AtomicU64::new(0),
        }
    }

    /// Replace the latency seam (tests use `NoLatency`).
    pub fn with_latency(mut self, latency: Arc<dyn Latency>) -> Self {
        self.latency = latency;
        self
    }

    /// Replace the clock used for result timestamps.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Seed featured-product sampling for deterministic output.
    pub fn with_featured_seed(mut self, seed: u64) -> Self {
        self.featured_seed = Some(seed);
        self
    }

    /// Number of full catalog scans performed so far.
    pub fn scan_count(&self) -> u64 {
        self.scans.load(Ordering::SeqCst)
    }

    /// Fetch a filtered, sorted, offset-paginated page of products.
    pub async fn fetch_products(
        &self,
        options: &QueryOptions,
    ) -> Result<ProductsPage, QueryError> {
        if options.page_size <= 0 {
            return Err(QueryError::InvalidPageSize(options.page_size));
        }

        self.latency.pause().await;

        let key = options.cache_key();
        if let Some(page) = self.cache.get::<ProductsPage>(&key) {
            return Ok(page);
        }

        let page = self.compute_products_page(options);
        self.store(&key, &page);
        Ok(page)
    }

    /// Fetch a single product. Unknown ids are `None`, not an error.
    pub async fn fetch_product_by_id(&self, id: ProductId) -> Option<Product> {
        self.latency.pause().await;

        let key = format!("product:id={id}");
        if let Some(product) = self.cache.get::<Product>(&key) {
            return Some(product);
        }

        let product = self.catalog.get(id).cloned();
        if let Some(product) = &product {
            self.store(&key, product);
        }
        product
    }

    /// Fetch products by id, preserving request order.
    ///
    /// Ids with no match are dropped, so the result may be shorter than the
    /// request.
    pub async fn fetch_products_by_ids(&self, ids: &[ProductId]) -> Vec<Product> {
        self.latency.pause().await;
        ids.iter()
            .filter_map(|id| self.catalog.get(*id))
            .cloned()
            .collect()
    }

    /// Fetch one cursor-paginated slice of a filtered, sorted scan.
    pub async fn fetch_products_infinite(
        &self,
        options: &InfiniteOptions,
    ) -> Result<CursorPage, QueryError> {
        if options.limit <= 0 {
            return Err(QueryError::InvalidLimit(options.limit));
        }

        self.latency.pause().await;

        let key = options.cache_key();
        if let Some(page) = self.cache.get::<CursorPage>(&key) {
            return Ok(page);
        }

        let filtered = options.filter_criteria().apply(self.scan_catalog());
        let sorted = sort_products(&filtered, options.sort);
        let page = paginate_by_cursor(&sorted, options.cursor, options.limit);

        self.store(&key, &page);
        Ok(page)
    }

    /// Fetch the distinct categories present in the catalog.
    pub async fn fetch_categories(&self) -> Vec<Category> {
        self.latency.pause().await;

        if let Some(categories) = self.cache.get::<Vec<Category>>("categories") {
            return categories;
        }

        self.note_scan();
        let categories = self.catalog.categories();
        self.store("categories", &categories);
        categories
    }

    /// Fetch per-category product counts.
    pub async fn fetch_category_counts(&self) -> Vec<(Category, usize)> {
        self.latency.pause().await;

        if let Some(counts) = self.cache.get::<Vec<(Category, usize)>>("category_counts") {
            return counts;
        }

        self.note_scan();
        let counts = self.catalog.category_counts();
        self.store("category_counts", &counts);
        counts
    }

    /// Search-as-you-type suggestions.
    ///
    /// Queries shorter than [`MIN_SUGGESTION_QUERY_LEN`] return an empty
    /// result immediately, without the latency pause or any cache/catalog
    /// access.
    pub async fn search_suggestions(&self, query: &str, limit: usize) -> Suggestions {
        let query = query.trim();
        if query.chars().count() < MIN_SUGGESTION_QUERY_LEN {
            return Suggestions::default();
        }

        self.latency.pause().await;

        let key = format!("suggest:q={}|limit={limit}", query.to_lowercase());
        if let Some(suggestions) = self.cache.get::<Suggestions>(&key) {
            return suggestions;
        }

        let criteria = FilterCriteria {
            search: Some(query.to_string()),
            ..Default::default()
        };
        let matches = criteria.apply(self.scan_catalog());

        let mut names: Vec<String> = Vec::new();
        let mut seen: Vec<String> = Vec::new();
        for product in &matches {
            let folded = product.name.to_lowercase();
            if !seen.contains(&folded) {
                seen.push(folded);
                names.push(product.name.clone());
            }
            if names.len() == limit {
                break;
            }
        }

        let result = Suggestions {
            suggestions: names,
            products: matches.into_iter().take(limit).collect(),
        };
        self.store(&key, &result);
        result
    }

    /// Fetch featured products: sale items first, then a random sample.
    ///
    /// Cached like every other query, so the randomized sample stays stable
    /// within the TTL window.
    pub async fn fetch_featured(&self, limit: usize, exclude: &[ProductId]) -> Vec<Product> {
        self.latency.pause().await;

        let key = featured_key(limit, exclude);
        if let Some(featured) = self.cache.get::<Vec<Product>>(&key) {
            return featured;
        }

        self.note_scan();
        let mut rng = match self.featured_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let featured = featured_products(&self.catalog, limit, exclude, &mut rng);
        self.store(&key, &featured);
        featured
    }

    /// Fetch products related to a source product.
    pub async fn fetch_related(&self, source_id: ProductId, limit: usize) -> Vec<Product> {
        self.latency.pause().await;

        let key = format!("related:id={source_id}|limit={limit}");
        if let Some(related) = self.cache.get::<Vec<Product>>(&key) {
            return related;
        }

        self.note_scan();
        let related = related_products(&self.catalog, source_id, limit);
        self.store(&key, &related);
        related
    }

    /// Drop every cached query result.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Drop every cached result whose key contains the given substring.
    ///
    /// Returns the number of entries removed. Used to blanket-invalidate,
    /// e.g. `invalidate_cache("cat=electronics")` after an out-of-band
    /// catalog mutation.
    pub fn invalidate_cache(&self, pattern: &str) -> usize {
        self.cache.invalidate(pattern)
    }

    /// Warm the cache for a category's default first page.
    ///
    /// A no-op when an equivalent query is already cached; returns whether a
    /// fetch was performed. Pauses exactly once, before the cache check, like
    /// every other entry point.
    pub async fn prefetch_category(&self, category: Category) -> Result<bool, QueryError> {
        let options = QueryOptions::default().with_category(category);

        self.latency.pause().await;

        let key = options.cache_key();
        if self.cache.contains(&key) {
            debug!(category = %category, "prefetch skipped, already cached");
            return Ok(false);
        }

        let page = self.compute_products_page(&options);
        self.store(&key, &page);
        Ok(true)
    }

    fn compute_products_page(&self, options: &QueryOptions) -> ProductsPage {
        let filtered = options.filter_criteria().apply(self.scan_catalog());
        let sorted = sort_products(&filtered, options.sort);
        let result = paginate(&sorted, options.page, options.page_size);

        ProductsPage {
            items: result.items,
            pagination: result.pagination,
            meta: QueryMeta {
                applied: options.clone(),
                fetched_at_millis: self.clock.now_millis(),
            },
        }
    }

    fn scan_catalog(&self) -> &[Product] {
        self.note_scan();
        self.catalog.products()
    }

    fn note_scan(&self) {
        self.scans.fetch_add(1, Ordering::SeqCst);
    }

    fn store<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = self.cache.set(key, value) {
            warn!(key, error = %e, "failed to cache query result");
        }
    }
}

/// Canonical key for a featured-products query. The exclusion set is sorted
/// and deduplicated so logically identical queries share one key regardless
/// of the order ids were supplied in.
fn featured_key(limit: usize, exclude: &[ProductId]) -> String {
    let mut ids: Vec<u64> = exclude.iter().map(|id| id.get()).collect();
    ids.sort_unstable();
    ids.dedup();
    let ids = if ids.is_empty() {
        "-".to_string()
    } else {
        ids.iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(",")
    };
    format!("featured:limit={limit}|exclude={ids}")
}
