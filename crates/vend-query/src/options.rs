//! Query descriptors and canonical cache keys.
//!
//! A descriptor is the full set of inputs to a query; two descriptors are
//! equal iff every field matches, and equality is the cache key. Keys are
//! built from an explicit fixed-order formatting of the fields (never from
//! serializing an open-ended map), so logically identical queries always
//! produce identical keys.

use serde::{Deserialize, Serialize};
use vend_core::{Category, Money, ProductId};

use crate::filter::FilterCriteria;
use crate::sort::SortKey;

/// Default items per page for both pagination models.
pub const DEFAULT_PAGE_SIZE: i64 = 12;

/// A full offset-model query descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryOptions {
    /// Category filter; `None` means all categories.
    pub category: Option<Category>,
    /// Free-text search, already sanitized upstream.
    pub search: Option<String>,
    /// Keep only on-sale products.
    pub on_sale_only: bool,
    /// Inclusive lower price bound.
    pub min_price: Option<Money>,
    /// Inclusive upper price bound.
    pub max_price: Option<Money>,
    /// Keep only in-stock products.
    pub in_stock_only: bool,
    /// Sort strategy.
    pub sort: SortKey,
    /// Requested page (1-indexed).
    pub page: i64,
    /// Items per page; must be positive.
    pub page_size: i64,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            category: None,
            search: None,
            on_sale_only: false,
            min_price: None,
            max_price: None,
            in_stock_only: false,
            sort: SortKey::Default,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryOptions {
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: i64, page_size: i64) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    pub fn with_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn on_sale_only(mut self) -> Self {
        self.on_sale_only = true;
        self
    }

    pub fn in_stock_only(mut self) -> Self {
        self.in_stock_only = true;
        self
    }

    /// The filter-stage view of these options.
    pub fn filter_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            category: self.category,
            search: self.search.clone(),
            on_sale_only: self.on_sale_only,
            min_price: self.min_price,
            max_price: self.max_price,
            in_stock_only: self.in_stock_only,
        }
    }

    /// Canonical cache key, fixed field order.
    pub fn cache_key(&self) -> String {
        format!(
            "products:{}|page={}|size={}",
            filter_key_part(
                self.category,
                self.search.as_deref(),
                self.on_sale_only,
                self.min_price,
                self.max_price,
                self.in_stock_only,
                self.sort,
            ),
            self.page,
            self.page_size,
        )
    }
}

/// A full cursor-model query descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InfiniteOptions {
    /// Category filter; `None` means all categories.
    pub category: Option<Category>,
    /// Free-text search, already sanitized upstream.
    pub search: Option<String>,
    /// Keep only on-sale products.
    pub on_sale_only: bool,
    /// Inclusive lower price bound.
    pub min_price: Option<Money>,
    /// Inclusive upper price bound.
    pub max_price: Option<Money>,
    /// Keep only in-stock products.
    pub in_stock_only: bool,
    /// Sort strategy.
    pub sort: SortKey,
    /// Id of the last item returned by the previous call.
    pub cursor: Option<ProductId>,
    /// Items per slice; must be positive.
    pub limit: i64,
}

impl Default for InfiniteOptions {
    fn default() -> Self {
        Self {
            category: None,
            search: None,
            on_sale_only: false,
            min_price: None,
            max_price: None,
            in_stock_only: false,
            sort: SortKey::Default,
            cursor: None,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl InfiniteOptions {
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_cursor(mut self, cursor: Option<ProductId>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// The filter-stage view of these options.
    pub fn filter_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            category: self.category,
            search: self.search.clone(),
            on_sale_only: self.on_sale_only,
            min_price: self.min_price,
            max_price: self.max_price,
            in_stock_only: self.in_stock_only,
        }
    }

    /// Canonical cache key, fixed field order.
    pub fn cache_key(&self) -> String {
        format!(
            "products_inf:{}|cursor={}|limit={}",
            filter_key_part(
                self.category,
                self.search.as_deref(),
                self.on_sale_only,
                self.min_price,
                self.max_price,
                self.in_stock_only,
                self.sort,
            ),
            self.cursor.map(|c| c.to_string()).unwrap_or_else(|| "-".into()),
            self.limit,
        )
    }
}

fn filter_key_part(
    category: Option<Category>,
    search: Option<&str>,
    on_sale_only: bool,
    min_price: Option<Money>,
    max_price: Option<Money>,
    in_stock_only: bool,
    sort: SortKey,
) -> String {
    format!(
        "cat={}|q={}|sale={}|min={}|max={}|stock={}|sort={}",
        category.map(|c| c.as_str()).unwrap_or("all"),
        search.map(|s| s.to_lowercase()).unwrap_or_else(|| "-".into()),
        on_sale_only,
        min_price.map(|m| m.amount_cents.to_string()).unwrap_or_else(|| "-".into()),
        max_price.map(|m| m.amount_cents.to_string()).unwrap_or_else(|| "-".into()),
        in_stock_only,
        sort.as_str(),
    )
}
