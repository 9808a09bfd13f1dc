//! Catalog domain types for the Vend query engine.
//!
//! This crate provides the read-only data model the query engine operates on:
//!
//! - **Product**: catalog records with regular/sale pricing and stock levels
//! - **Category**: the closed set of catalog categories
//! - **Money**: cents-based monetary values
//! - **Catalog**: an immutable in-memory product source
//!
//! # Example
//!
//! ```rust
//! use vend_core::{Catalog, Category, Money, Product, ProductId};
//!
//! let product = Product::new(1, "Noise-cancelling headphones", Category::Electronics, Money::usd(19999))
//!     .with_sale_price(Money::usd(14999));
//!
//! assert!(product.is_on_sale());
//! assert_eq!(product.effective_price(), Money::usd(14999));
//!
//! let catalog = Catalog::new(vec![product]);
//! assert!(catalog.get(ProductId::new(1)).is_some());
//! ```

mod catalog;
mod category;
mod ids;
mod money;
mod product;

pub use catalog::Catalog;
pub use category::Category;
pub use ids::ProductId;
pub use money::{Currency, Money};
pub use product::Product;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Catalog, Category, Currency, Money, Product, ProductId};
}
