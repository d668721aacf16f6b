use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::CatalogSource;
use crate::config::VitrineConfig;
use crate::error::Result;
use crate::model::{Brand, Category, Product, ProductId};

/// REST client for the storefront backend.
///
/// Products live on one service, categories and brands on another, so the
/// client carries two base URLs (see [`VitrineConfig`]).
pub struct HttpCatalog {
    client: Client,
    products_base: String,
    catalog_base: String,
}

impl HttpCatalog {
    pub fn new(products_base: impl Into<String>, catalog_base: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("vitrine/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
            products_base: trim_base(products_base.into()),
            catalog_base: trim_base(catalog_base.into()),
        }
    }

    pub fn from_config(config: &VitrineConfig) -> Self {
        Self::new(config.products_url.clone(), config.catalog_url.clone())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

fn trim_base(base: String) -> String {
    base.trim_end_matches('/').to_string()
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        self.get_json(format!("{}/products", self.products_base))
            .await
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Product> {
        self.get_json(format!("{}/products/{}", self.products_base, id))
            .await
    }

    async fn fetch_featured_products(&self) -> Result<Vec<Product>> {
        self.get_json(format!("{}/products?isFeatured=true", self.products_base))
            .await
    }

    async fn fetch_active_categories(&self) -> Result<Vec<Category>> {
        self.get_json(format!("{}/categories?isActive=true", self.catalog_base))
            .await
    }

    async fn fetch_active_brands(&self) -> Result<Vec<Brand>> {
        self.get_json(format!("{}/brands?isActive=true", self.catalog_base))
            .await
    }
}
