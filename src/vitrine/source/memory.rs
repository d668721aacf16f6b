use async_trait::async_trait;

use super::CatalogSource;
use crate::error::{Result, VitrineError};
use crate::model::{Brand, Category, Product, ProductId};

/// An in-memory catalog source.
///
/// Used by the test suites and available to alternate frontends that already
/// hold their data (demos, seed scripts).
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    brands: Vec<Brand>,
    fail: bool,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every fetch fails, simulating a backend outage.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_brands(mut self, brands: Vec<Brand>) -> Self {
        self.brands = brands;
        self
    }

    fn check(&self) -> Result<()> {
        if self.fail {
            return Err(VitrineError::Source("catalog backend unavailable".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        self.check()?;
        Ok(self.products.clone())
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Product> {
        self.check()?;
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| VitrineError::Source(format!("product {} not found", id)))
    }

    async fn fetch_featured_products(&self) -> Result<Vec<Product>> {
        self.check()?;
        Ok(self
            .products
            .iter()
            .filter(|p| p.is_featured)
            .cloned()
            .collect())
    }

    async fn fetch_active_categories(&self) -> Result<Vec<Category>> {
        self.check()?;
        Ok(self
            .categories
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect())
    }

    async fn fetch_active_brands(&self) -> Result<Vec<Brand>> {
        self.check()?;
        Ok(self
            .brands
            .iter()
            .filter(|b| b.is_active)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::product;

    #[tokio::test]
    async fn fetch_product_finds_by_id() {
        let source = InMemoryCatalog::new().with_products(vec![
            product(1, "a", 100, 1, 1),
            product(2, "b", 200, 1, 1),
        ]);
        let found = source.fetch_product(2).await.unwrap();
        assert_eq!(found.name, "b");
        assert!(source.fetch_product(99).await.is_err());
    }

    #[tokio::test]
    async fn featured_filters_flagged_products() {
        let mut featured = product(3, "c", 300, 1, 1);
        featured.is_featured = true;
        let source =
            InMemoryCatalog::new().with_products(vec![product(1, "a", 100, 1, 1), featured]);

        let result = source.fetch_featured_products().await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 3);
    }

    #[tokio::test]
    async fn failing_source_errors_on_every_fetch() {
        let source = InMemoryCatalog::failing();
        assert!(source.fetch_products().await.is_err());
        assert!(source.fetch_active_categories().await.is_err());
        assert!(source.fetch_active_brands().await.is_err());
    }
}
