//! The closed set of catalog categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product category.
///
/// The catalog uses a fixed set of categories; "all categories" is expressed
/// as `Option<Category>::None` at the filter layer rather than a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electronics,
    Books,
    Clothing,
    HomeGoods,
    Sports,
    Beauty,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Books,
        Category::Clothing,
        Category::HomeGoods,
        Category::Sports,
        Category::Beauty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Books => "books",
            Category::Clothing => "clothing",
            Category::HomeGoods => "home_goods",
            Category::Sports => "sports",
            Category::Beauty => "beauty",
        }
    }

    /// Parse a category name. Returns `None` for unknown names.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "electronics" => Some(Category::Electronics),
            "books" => Some(Category::Books),
            "clothing" => Some(Category::Clothing),
            "home_goods" => Some(Category::HomeGoods),
            "sports" => Some(Category::Sports),
            "beauty" => Some(Category::Beauty),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Books => "Books",
            Category::Clothing => "Clothing",
            Category::HomeGoods => "Home Goods",
            Category::Sports => "Sports",
            Category::Beauty => "Beauty",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
