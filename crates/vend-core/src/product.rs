//! Product records.

use crate::category::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Immutable from the query engine's perspective; mutation happens outside
/// this core and is followed by an explicit cache invalidation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// The category this product belongs to.
    pub category: Category,
    /// Regular price.
    pub price: Money,
    /// Sale price; only meaningful when strictly below the regular price.
    pub sale_price: Option<Money>,
    /// Units in stock. `None` means stock is not tracked (always available).
    pub stock: Option<i64>,
    /// Image reference.
    pub image_url: String,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: Category,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category,
            price,
            sale_price: None,
            stock: None,
            image_url: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the sale price.
    pub fn with_sale_price(mut self, sale_price: Money) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    /// Set the tracked stock count.
    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Set the image reference.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Check if this product is on sale.
    ///
    /// A sale price at or above the regular price does not count as a sale.
    pub fn is_on_sale(&self) -> bool {
        self.sale_price
            .map(|sp| sp.amount_cents < self.price.amount_cents)
            .unwrap_or(false)
    }

    /// The price a buyer actually pays: sale price when on sale, else regular.
    pub fn effective_price(&self) -> Money {
        if self.is_on_sale() {
            self.sale_price.unwrap_or(self.price)
        } else {
            self.price
        }
    }

    /// Calculate the discount percentage if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.sale_price.and_then(|sp| {
            if sp.amount_cents < self.price.amount_cents {
                let savings = self.price.amount_cents - sp.amount_cents;
                Some((savings as f64 / self.price.amount_cents as f64) * 100.0)
            } else {
                None
            }
        })
    }

    /// Check if this product is in stock.
    ///
    /// Untracked stock counts as in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock.map(|s| s > 0).unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product::new(1, "Test Product", Category::Electronics, Money::usd(2000))
    }

    #[test]
    fn test_effective_price_regular() {
        let p = product();
        assert!(!p.is_on_sale());
        assert_eq!(p.effective_price(), Money::usd(2000));
    }

    #[test]
    fn test_effective_price_on_sale() {
        let p = product().with_sale_price(Money::usd(1500));
        assert!(p.is_on_sale());
        assert_eq!(p.effective_price(), Money::usd(1500));
    }

    #[test]
    fn test_sale_price_not_below_regular() {
        // A "sale" at or above the regular price is ignored.
        let p = product().with_sale_price(Money::usd(2000));
        assert!(!p.is_on_sale());
        assert_eq!(p.effective_price(), Money::usd(2000));
    }

    #[test]
    fn test_discount_percentage() {
        let p = product().with_sale_price(Money::usd(1500));
        let discount = p.discount_percentage().unwrap();
        assert!((discount - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stock() {
        assert!(product().is_in_stock()); // untracked
        assert!(product().with_stock(3).is_in_stock());
        assert!(!product().with_stock(0).is_in_stock());
    }
}
