//! The sort stage: stable reordering by named strategy.

use serde::{Deserialize, Serialize};
use vend_core::Product;

/// Sort strategies for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Sort by effective price, low to high.
    PriceAsc,
    /// Sort by effective price, high to low.
    PriceDesc,
    /// Sort by name A-Z (case-insensitive).
    NameAsc,
    /// Sort by name Z-A (case-insensitive).
    NameDesc,
    /// On-sale items first, otherwise stable.
    SaleFirst,
    /// Newest first (descending by id).
    Newest,
    /// Keep the incoming order.
    #[default]
    Default,
}

/// The closed set of valid sort strategies, for callers building UIs.
pub const SORT_OPTIONS: &[SortKey] = &[
    SortKey::Default,
    SortKey::PriceAsc,
    SortKey::PriceDesc,
    SortKey::NameAsc,
    SortKey::NameDesc,
    SortKey::SaleFirst,
    SortKey::Newest,
];

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::NameAsc => "name_asc",
            SortKey::NameDesc => "name_desc",
            SortKey::SaleFirst => "sale_first",
            SortKey::Newest => "newest",
            SortKey::Default => "default",
        }
    }

    /// Parse a strategy name. Unknown names fall back to `Default` rather
    /// than failing.
    pub fn parse(s: &str) -> Self {
        match s {
            "price_asc" => SortKey::PriceAsc,
            "price_desc" => SortKey::PriceDesc,
            "name_asc" => SortKey::NameAsc,
            "name_desc" => SortKey::NameDesc,
            "sale_first" => SortKey::SaleFirst,
            "newest" => SortKey::Newest,
            _ => SortKey::Default,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::NameAsc => "Name: A-Z",
            SortKey::NameDesc => "Name: Z-A",
            SortKey::SaleFirst => "On Sale First",
            SortKey::Newest => "Newest",
            SortKey::Default => "Featured",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort a product list by the given strategy.
///
/// Returns a new list; the input is never mutated. All strategies are
/// stable: ties keep their filter-stage order.
pub fn sort_products(products: &[Product], key: SortKey) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match key {
        SortKey::PriceAsc => sorted.sort_by(|a, b| {
            a.effective_price()
                .amount_cents
                .cmp(&b.effective_price().amount_cents)
        }),
        SortKey::PriceDesc => sorted.sort_by(|a, b| {
            b.effective_price()
                .amount_cents
                .cmp(&a.effective_price().amount_cents)
        }),
        SortKey::NameAsc => {
            sorted.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
        SortKey::NameDesc => {
            sorted.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()))
        }
        SortKey::SaleFirst => sorted.sort_by_key(|p| !p.is_on_sale()),
        SortKey::Newest => sorted.sort_by(|a, b| b.id.cmp(&a.id)),
        SortKey::Default => {}
    }
    sorted
}
