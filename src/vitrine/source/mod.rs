//! # Catalog Sources
//!
//! This module defines the data-access abstraction for vitrine. The
//! [`CatalogSource`] trait lets the browse facade work against different
//! backends.
//!
//! ## Design Rationale
//!
//! Data access is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryCatalog` (no network needed)
//! - Allow **future backends** (a paginated API, a local seed file) without
//!   changing the engine or the facade
//! - Keep the browsing logic **decoupled** from transport details
//!
//! ## Implementations
//!
//! - [`http::HttpCatalog`]: production REST client. The storefront backend
//!   is split across two services—products on one base URL, categories and
//!   brands on another—and every collection endpoint returns the whole
//!   collection in a single unpaginated response.
//!
//! - [`memory::InMemoryCatalog`]: in-memory source for tests and alternate
//!   frontends; can simulate a backend outage.
//!
//! ## Contract
//!
//! All fetches are idempotent, side-effect-free reads. Failures are
//! propagated to the caller; nothing here retries.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Brand, Category, Product, ProductId};

pub mod http;
pub mod memory;

/// Abstract interface to the storefront backend.
#[async_trait]
pub trait CatalogSource {
    /// The full, unpaginated product collection.
    async fn fetch_products(&self) -> Result<Vec<Product>>;

    /// A single product by id.
    async fn fetch_product(&self, id: ProductId) -> Result<Product>;

    /// Products flagged as featured.
    async fn fetch_featured_products(&self) -> Result<Vec<Product>>;

    /// Active categories for the filter sidebar.
    async fn fetch_active_categories(&self) -> Result<Vec<Category>>;

    /// Active brands for the filter sidebar.
    async fn fetch_active_brands(&self) -> Result<Vec<Brand>>;
}
