//! # Browse Facade
//!
//! The facade is the single entry point for every UI operation. It owns the
//! catalog snapshot and the view state (selection, sort key, page window)
//! and keeps the derived result in sync by re-running the pipeline
//! `filter → sort → window.reset` after every mutation.
//!
//! ## What the facade does NOT do
//!
//! - **Business logic**: that lives in [`crate::engine`]
//! - **I/O formatting**: it returns data, never strings for a terminal
//! - **Retries**: a failed fetch propagates to the caller
//!
//! ## Generic over CatalogSource
//!
//! `ProductBrowser<S: CatalogSource>` works against any source:
//! - Production: `ProductBrowser<HttpCatalog>`
//! - Testing: `ProductBrowser<InMemoryCatalog>`
//!
//! This enables exercising the whole browsing flow without a network.

use std::time::Duration;

use crate::config::{DEFAULT_LOAD_DELAY_MS, DEFAULT_PAGE_SIZE, VitrineConfig};
use crate::engine::{self, PageWindow, SortKey};
use crate::error::Result;
use crate::model::{Brand, Category, Product, ProductId};
use crate::selection::{FilterSelection, SelectionPatch};
use crate::source::CatalogSource;

pub struct ProductBrowser<S: CatalogSource> {
    source: S,
    load_delay: Duration,
    catalog: Vec<Product>,
    categories: Vec<Category>,
    brands: Vec<Brand>,
    selection: FilterSelection,
    sort: SortKey,
    /// Filtered and sorted view over `catalog`.
    results: Vec<Product>,
    window: PageWindow,
}

impl<S: CatalogSource> ProductBrowser<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            load_delay: Duration::from_millis(DEFAULT_LOAD_DELAY_MS),
            catalog: Vec::new(),
            categories: Vec::new(),
            brands: Vec::new(),
            selection: FilterSelection::default(),
            sort: SortKey::default(),
            results: Vec::new(),
            window: PageWindow::new(DEFAULT_PAGE_SIZE),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.window = PageWindow::new(page_size);
        self.recompute();
        self
    }

    /// The asynchronous gap before each page-window increment resolves. A
    /// real paginated backend call would take its place; tests pass
    /// `Duration::ZERO`.
    pub fn with_load_delay(mut self, delay: Duration) -> Self {
        self.load_delay = delay;
        self
    }

    pub fn configured(source: S, config: &VitrineConfig) -> Self {
        Self::new(source)
            .with_page_size(config.page_size)
            .with_load_delay(Duration::from_millis(config.load_delay_ms))
    }

    /// Fetch the catalog and the filter reference lists, then recompute.
    /// On failure the previous snapshot is left untouched and the error
    /// propagates; the caller decides whether to retry.
    pub async fn refresh(&mut self) -> Result<()> {
        let catalog = self.source.fetch_products().await?;
        let categories = self.source.fetch_active_categories().await?;
        let brands = self.source.fetch_active_brands().await?;

        self.catalog = catalog;
        self.categories = categories;
        self.brands = brands;
        self.recompute();
        Ok(())
    }

    /// Merge a partial filter update and restart the page window.
    pub fn set_filter(&mut self, patch: SelectionPatch) {
        self.selection.apply(patch);
        self.recompute();
    }

    /// Change the sort order, preserving the current filter.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.recompute();
    }

    /// The proximity signal: the view calls this when the scroll sentinel
    /// nears the viewport. Returns `true` if a page increment ran, `false`
    /// if the signal was ignored (already loading, or nothing left).
    ///
    /// Growth is strictly sequential—the `Loading` gate plus `&mut self`
    /// mean increment N+1 cannot start before N resolves. Dropping the
    /// returned future mid-delay leaves the window gated in `Loading`; the
    /// next filter, sort, or refresh resets it.
    pub async fn load_more(&mut self) -> bool {
        if !self.window.begin_load() {
            return false;
        }
        tokio::time::sleep(self.load_delay).await;
        self.window.complete_load();
        true
    }

    fn recompute(&mut self) {
        let filtered = engine::filter::apply(&self.catalog, &self.selection);
        self.results = engine::sort::apply(&filtered, self.sort);
        self.window.reset(self.results.len());
    }

    /// The slice the view should render: the loaded prefix of the filtered,
    /// sorted result.
    pub fn visible_products(&self) -> &[Product] {
        &self.results[..self.window.loaded()]
    }

    /// How many products match the current filter, loaded or not.
    pub fn total_matched(&self) -> usize {
        self.results.len()
    }

    pub fn has_more(&self) -> bool {
        self.window.has_more()
    }

    pub fn is_loading_more(&self) -> bool {
        self.window.is_loading()
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    /// Single-product passthrough for the detail view.
    pub async fn product(&self, id: ProductId) -> Result<Product> {
        self.source.fetch_product(id).await
    }

    /// Featured products, optionally capped.
    pub async fn featured_products(&self, limit: Option<usize>) -> Result<Vec<Product>> {
        let mut products = self.source.fetch_featured_products().await?;
        if let Some(limit) = limit {
            products.truncate(limit);
        }
        Ok(products)
    }

    /// A random sample from the loaded catalog, for the home page rail.
    pub fn random_products(&self, count: usize) -> Vec<Product> {
        engine::shuffle::random_sample(&self.catalog, count, &mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::InMemoryCatalog;
    use crate::test_utils::{brand, category, product};

    fn browser_with(products: Vec<Product>) -> ProductBrowser<InMemoryCatalog> {
        let source = InMemoryCatalog::new()
            .with_products(products)
            .with_categories(vec![category(1, "Phones"), category(2, "Tablets")])
            .with_brands(vec![brand(1, "Apple"), brand(2, "Samsung")]);
        ProductBrowser::new(source).with_load_delay(Duration::ZERO)
    }

    fn uniform_catalog(count: u32) -> Vec<Product> {
        (1..=count)
            .map(|i| product(i, &format!("Phone {}", i), 100_000, 1, 1))
            .collect()
    }

    #[tokio::test]
    async fn paging_walk_over_thirty_products() {
        let mut browser = browser_with(uniform_catalog(30));
        browser.refresh().await.unwrap();

        assert_eq!(browser.visible_products().len(), 12);
        assert_eq!(browser.total_matched(), 30);
        assert!(browser.has_more());

        assert!(browser.load_more().await);
        assert_eq!(browser.visible_products().len(), 24);

        assert!(browser.load_more().await);
        assert_eq!(browser.visible_products().len(), 30);
        assert!(!browser.has_more());

        // Exhausted: the signal is ignored.
        assert!(!browser.load_more().await);
        assert_eq!(browser.visible_products().len(), 30);
    }

    #[tokio::test]
    async fn category_filter_narrows_and_counts() {
        let products = vec![
            product(1, "a", 100, 1, 1),
            product(2, "b", 100, 1, 1),
            product(3, "c", 100, 2, 1),
            product(4, "d", 100, 1, 2),
            product(5, "e", 100, 2, 2),
        ];
        let mut browser = browser_with(products);
        browser.refresh().await.unwrap();

        browser.set_filter(SelectionPatch {
            categories: Some(vec![1]),
            ..Default::default()
        });

        assert_eq!(browser.total_matched(), 3);
        assert!(browser
            .visible_products()
            .iter()
            .all(|p| p.category_id == 1));
    }

    #[tokio::test]
    async fn filter_change_restarts_the_window() {
        let mut browser = browser_with(uniform_catalog(30));
        browser.refresh().await.unwrap();
        assert!(browser.load_more().await);
        assert_eq!(browser.visible_products().len(), 24);

        browser.set_filter(SelectionPatch {
            brands: Some(vec![1]),
            ..Default::default()
        });
        // All 30 still match, but the window is back at the first page.
        assert_eq!(browser.total_matched(), 30);
        assert_eq!(browser.visible_products().len(), 12);
    }

    #[tokio::test]
    async fn sort_change_preserves_filter_and_restarts_window() {
        let mut products = uniform_catalog(20);
        for (i, p) in products.iter_mut().enumerate() {
            p.price = (20 - i as u64) * 1_000_000;
            p.category_id = if i < 15 { 1 } else { 2 };
        }
        let mut browser = browser_with(products);
        browser.refresh().await.unwrap();

        browser.set_filter(SelectionPatch {
            categories: Some(vec![1]),
            ..Default::default()
        });
        assert!(browser.load_more().await);
        assert_eq!(browser.visible_products().len(), 15);

        browser.set_sort(SortKey::PriceAsc);
        assert_eq!(browser.total_matched(), 15);
        assert_eq!(browser.visible_products().len(), 12);
        let visible = browser.visible_products();
        for pair in visible.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }
        // Filter survived the sort change.
        assert!(visible.iter().all(|p| p.category_id == 1));
    }

    #[tokio::test]
    async fn refresh_failure_propagates_and_keeps_state_empty() {
        let mut browser =
            ProductBrowser::new(InMemoryCatalog::failing()).with_load_delay(Duration::ZERO);
        assert!(browser.refresh().await.is_err());
        assert_eq!(browser.total_matched(), 0);
        assert!(browser.visible_products().is_empty());
        assert!(!browser.has_more());
    }

    #[tokio::test]
    async fn page_size_is_configurable() {
        let config = VitrineConfig {
            page_size: 5,
            load_delay_ms: 0,
            ..Default::default()
        };
        let source = InMemoryCatalog::new().with_products(uniform_catalog(8));
        let mut browser = ProductBrowser::configured(source, &config);
        browser.refresh().await.unwrap();

        assert_eq!(browser.visible_products().len(), 5);
        assert!(browser.load_more().await);
        assert_eq!(browser.visible_products().len(), 8);
        assert!(!browser.has_more());
    }

    #[tokio::test]
    async fn featured_products_respect_limit() {
        let mut products = uniform_catalog(6);
        for p in products.iter_mut().take(4) {
            p.is_featured = true;
        }
        let mut browser = browser_with(products);
        browser.refresh().await.unwrap();

        let featured = browser.featured_products(Some(2)).await.unwrap();
        assert_eq!(featured.len(), 2);
        assert!(featured.iter().all(|p| p.is_featured));

        let all = browser.featured_products(None).await.unwrap();
        assert_eq!(all.len(), 4);
    }

    #[tokio::test]
    async fn random_products_sample_the_catalog() {
        let mut browser = browser_with(uniform_catalog(10));
        browser.refresh().await.unwrap();

        let sample = browser.random_products(4);
        assert_eq!(sample.len(), 4);
    }
}
