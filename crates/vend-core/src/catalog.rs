//! The in-memory catalog source.

use crate::category::Category;
use crate::ids::ProductId;
use crate::product::Product;

/// An immutable, in-memory product collection.
///
/// The query engine holds a shared reference to the catalog and never
/// mutates it; out-of-band mutation means building a new `Catalog` and
/// invalidating the query cache.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories, in first-appearance order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category) {
                seen.push(product.category);
            }
        }
        seen
    }

    /// Product count per category, in first-appearance order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        let mut counts: Vec<(Category, usize)> = Vec::new();
        for product in &self.products {
            match counts.iter_mut().find(|(c, _)| *c == product.category) {
                Some((_, n)) => *n += 1,
                None => counts.push((product.category, 1)),
            }
        }
        counts
    }
}
