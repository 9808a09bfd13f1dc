//! The filter stage: pure predicate composition over the catalog.

use serde::{Deserialize, Serialize};
use vend_core::{Category, Money, Product};

/// Criteria for narrowing a product list.
///
/// All present criteria are ANDed; a default (empty) criteria set is an
/// identity pass. Filtering is order-preserving.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    /// Exact category match. `None` means all categories.
    pub category: Option<Category>,
    /// Case-insensitive substring search over name, description, and
    /// category name. The text is trusted; sanitization happens upstream.
    pub search: Option<String>,
    /// Keep only on-sale products.
    pub on_sale_only: bool,
    /// Inclusive lower bound on the effective price.
    pub min_price: Option<Money>,
    /// Inclusive upper bound on the effective price.
    pub max_price: Option<Money>,
    /// Exclude products with a tracked stock count of zero or less.
    pub in_stock_only: bool,
}

impl FilterCriteria {
    /// Check a single product against every present criterion.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category {
            if product.category != category {
                return false;
            }
        }

        if let Some(search) = &self.search {
            if !search.is_empty() {
                let needle = search.to_lowercase();
                let haystack = format!(
                    "{} {} {}",
                    product.name,
                    product.description,
                    product.category.as_str()
                )
                .to_lowercase();
                if !haystack.contains(&needle) {
                    return false;
                }
            }
        }

        if self.on_sale_only && !product.is_on_sale() {
            return false;
        }

        let effective = product.effective_price().amount_cents;
        if let Some(min) = self.min_price {
            if effective < min.amount_cents {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if effective > max.amount_cents {
                return false;
            }
        }

        if self.in_stock_only && !product.is_in_stock() {
            return false;
        }

        true
    }

    /// Filter a product list, preserving input order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}
