//! Recommendation helpers: featured and related products.

use rand::seq::SliceRandom;
use rand::Rng;
use vend_core::{Catalog, Product, ProductId};

/// Select featured products: on-sale items first (in catalog order), then a
/// randomized sample of the remaining items, truncated to `limit`.
///
/// Ids in `exclude` are removed before selection. The random source is
/// injected so callers (and tests) control determinism.
pub fn featured_products<R: Rng>(
    catalog: &Catalog,
    limit: usize,
    exclude: &[ProductId],
    rng: &mut R,
) -> Vec<Product> {
    let (on_sale, mut rest): (Vec<&Product>, Vec<&Product>) = catalog
        .products()
        .iter()
        .filter(|p| !exclude.contains(&p.id))
        .partition(|p| p.is_on_sale());

    rest.shuffle(rng);

    on_sale
        .into_iter()
        .chain(rest)
        .take(limit)
        .cloned()
        .collect()
}

/// Select products related to a source product: same-category items first
/// (excluding the source), backfilled from other categories until `limit`
/// items are found or the catalog is exhausted.
///
/// An unknown source id yields an empty list, not an error.
pub fn related_products(catalog: &Catalog, source_id: ProductId, limit: usize) -> Vec<Product> {
    let source = match catalog.get(source_id) {
        Some(product) => product,
        None => return Vec::new(),
    };

    let mut related: Vec<Product> = catalog
        .products()
        .iter()
        .filter(|p| p.id != source_id && p.category == source.category)
        .take(limit)
        .cloned()
        .collect();

    if related.len() < limit {
        let backfill = catalog
            .products()
            .iter()
            .filter(|p| p.id != source_id && p.category != source.category)
            .take(limit - related.len())
            .cloned();
        related.extend(backfill);
    }

    related
}
