//! End-to-end behavior of the fetch orchestrator: caching, both pagination
//! models, and recommendations over one catalog.

use std::sync::Arc;
use std::time::Duration;

use vend_cache::{ManualClock, QueryCache};
use vend_core::{Catalog, Category, Money, Product, ProductId};
use vend_query::{
    InfiniteOptions, NoLatency, ProductFetcher, QueryOptions, SortKey,
};

fn catalog() -> Catalog {
    let mut products: Vec<Product> = (1..=5)
        .map(|i| {
            Product::new(
                i,
                format!("Gadget {i}"),
                Category::Electronics,
                Money::usd(1000 * i as i64),
            )
        })
        .collect();
    products.extend((6..=8).map(|i| {
        Product::new(i, format!("Book {i}"), Category::Books, Money::usd(700 + i as i64))
    }));
    Catalog::new(products)
}

fn fetcher_with(capacity: usize, ttl: Duration) -> (ProductFetcher, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(0));
    let cache = Arc::new(QueryCache::with_clock(capacity, ttl, clock.clone()));
    let fetcher = ProductFetcher::new(Arc::new(catalog()), cache)
        .with_latency(Arc::new(NoLatency))
        .with_clock(clock.clone());
    (fetcher, clock)
}

fn fetcher() -> ProductFetcher {
    fetcher_with(50, Duration::from_secs(300)).0
}

#[tokio::test]
async fn cache_hit_skips_the_second_scan() {
    let f = fetcher();
    let options = QueryOptions::default().with_category(Category::Electronics);

    let first = f.fetch_products(&options).await.unwrap();
    assert_eq!(f.scan_count(), 1);

    let second = f.fetch_products(&options).await.unwrap();
    assert_eq!(f.scan_count(), 1, "identical query within TTL must not rescan");
    assert_eq!(first, second);
}

#[tokio::test]
async fn ttl_expiry_triggers_recompute() {
    let (f, clock) = fetcher_with(50, Duration::from_secs(300));
    let options = QueryOptions::default();

    f.fetch_products(&options).await.unwrap();
    assert_eq!(f.scan_count(), 1);

    clock.advance_millis(299_999);
    f.fetch_products(&options).await.unwrap();
    assert_eq!(f.scan_count(), 1, "still fresh just before the TTL");

    clock.advance_millis(1);
    f.fetch_products(&options).await.unwrap();
    assert_eq!(f.scan_count(), 2, "expired entry must be treated as absent");
}

#[tokio::test]
async fn capacity_evicts_the_earliest_inserted_query() {
    let (f, _) = fetcher_with(3, Duration::from_secs(300));

    for page in 1..=4 {
        let options = QueryOptions::default().with_page(page, 2);
        f.fetch_products(&options).await.unwrap();
    }
    assert_eq!(f.scan_count(), 4);

    // Queries 2..4 are still cached.
    for page in 2..=4 {
        let options = QueryOptions::default().with_page(page, 2);
        f.fetch_products(&options).await.unwrap();
    }
    assert_eq!(f.scan_count(), 4);

    // Query 1 was the earliest insert and got evicted.
    let options = QueryOptions::default().with_page(1, 2);
    f.fetch_products(&options).await.unwrap();
    assert_eq!(f.scan_count(), 5);
}

#[tokio::test]
async fn category_filter_returns_only_that_category() {
    let f = fetcher();
    let options = QueryOptions::default().with_category(Category::Electronics);
    let page = f.fetch_products(&options).await.unwrap();

    assert_eq!(page.pagination.total, 5);
    assert!(page.items.iter().all(|p| p.category == Category::Electronics));
}

#[tokio::test]
async fn price_sort_orders_both_directions() {
    let catalog = Catalog::new(vec![
        Product::new(1, "A", Category::Books, Money::usd(3000)),
        Product::new(2, "B", Category::Books, Money::usd(1000)),
        Product::new(3, "C", Category::Books, Money::usd(2000)),
    ]);
    let cache = Arc::new(QueryCache::new(50, Duration::from_secs(300)));
    let f = ProductFetcher::new(Arc::new(catalog), cache).with_latency(Arc::new(NoLatency));

    let asc = f
        .fetch_products(&QueryOptions::default().with_sort(SortKey::PriceAsc))
        .await
        .unwrap();
    let prices: Vec<i64> = asc.items.iter().map(|p| p.price.amount_cents).collect();
    assert_eq!(prices, vec![1000, 2000, 3000]);

    let desc = f
        .fetch_products(&QueryOptions::default().with_sort(SortKey::PriceDesc))
        .await
        .unwrap();
    let prices: Vec<i64> = desc.items.iter().map(|p| p.price.amount_cents).collect();
    assert_eq!(prices, vec![3000, 2000, 1000]);
}

#[tokio::test]
async fn out_of_range_page_matches_the_last_page() {
    let f = fetcher();
    let last = f
        .fetch_products(&QueryOptions::default().with_page(4, 2))
        .await
        .unwrap();
    let beyond = f
        .fetch_products(&QueryOptions::default().with_page(54, 2))
        .await
        .unwrap();

    assert_eq!(last.pagination.total_pages, 4);
    assert_eq!(beyond.items, last.items);
    assert_eq!(beyond.pagination.page, 4);
}

#[tokio::test]
async fn infinite_scroll_partitions_the_filtered_set() {
    let f = fetcher();
    let mut seen: Vec<u64> = Vec::new();
    let mut cursor = None;

    loop {
        let options = InfiniteOptions::default()
            .with_sort(SortKey::PriceAsc)
            .with_cursor(cursor)
            .with_limit(3);
        let page = f.fetch_products_infinite(&options).await.unwrap();
        seen.extend(page.items.iter().map(|p| p.id.get()));
        if !page.has_more {
            break;
        }
        cursor = page.next_cursor;
    }

    // Every product exactly once, in price-ascending order: the three books
    // (cheapest) first, then the gadgets.
    assert_eq!(seen, vec![6, 7, 8, 1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn related_products_backfill_after_same_category() {
    let f = fetcher();

    let related = f.fetch_related(ProductId::new(1), 4).await;
    assert_eq!(related.len(), 4);
    assert!(related.iter().all(|p| p.category == Category::Electronics));
    assert!(!related.iter().any(|p| p.id == ProductId::new(1)));

    // Asking for more than the category holds backfills from books.
    let related = f.fetch_related(ProductId::new(1), 6).await;
    assert_eq!(related.len(), 6);
    assert!(related.iter().any(|p| p.category == Category::Books));
}

#[tokio::test]
async fn unknown_id_yields_none_not_error() {
    let f = fetcher();
    assert!(f.fetch_product_by_id(ProductId::new(99999)).await.is_none());
}

#[tokio::test]
async fn category_summaries_are_cached() {
    let f = fetcher();
    assert_eq!(
        f.fetch_categories().await,
        vec![Category::Electronics, Category::Books]
    );
    assert_eq!(
        f.fetch_category_counts().await,
        vec![(Category::Electronics, 5), (Category::Books, 3)]
    );
    let scans = f.scan_count();

    f.fetch_categories().await;
    f.fetch_category_counts().await;
    assert_eq!(f.scan_count(), scans);
}

#[tokio::test]
async fn prefetch_is_a_noop_when_already_cached() {
    let f = fetcher();
    assert!(f.prefetch_category(Category::Books).await.unwrap());
    assert!(!f.prefetch_category(Category::Books).await.unwrap());

    // The prefetched page is served from cache.
    let scans = f.scan_count();
    let options = QueryOptions::default().with_category(Category::Books);
    f.fetch_products(&options).await.unwrap();
    assert_eq!(f.scan_count(), scans);
}

#[tokio::test]
async fn invalidation_forces_recompute_for_matching_queries_only() {
    let f = fetcher();
    let books = QueryOptions::default().with_category(Category::Books);
    let gadgets = QueryOptions::default().with_category(Category::Electronics);

    f.fetch_products(&books).await.unwrap();
    f.fetch_products(&gadgets).await.unwrap();
    assert_eq!(f.scan_count(), 2);

    let removed = f.invalidate_cache("cat=books");
    assert_eq!(removed, 1);

    f.fetch_products(&gadgets).await.unwrap();
    assert_eq!(f.scan_count(), 2, "other categories stay cached");

    f.fetch_products(&books).await.unwrap();
    assert_eq!(f.scan_count(), 3, "invalidated query recomputes");
}

#[tokio::test]
async fn clear_cache_drops_everything() {
    let f = fetcher();
    f.fetch_products(&QueryOptions::default()).await.unwrap();
    f.clear_cache();
    f.fetch_products(&QueryOptions::default()).await.unwrap();
    assert_eq!(f.scan_count(), 2);
}
