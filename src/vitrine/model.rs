use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ProductId = u32;
pub type CategoryId = u32;
pub type BrandId = u32;

/// Hardware summary shown on the product detail card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductSpecifications {
    pub screen: String,
    pub ram: String,
    pub storage: String,
    pub battery: String,
    pub os: String,
}

/// A catalog product as served by the products backend.
///
/// Prices are VND amounts. `created_at`/`updated_at` come over the wire as
/// RFC 3339 strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub category_id: CategoryId,
    pub brand_id: BrandId,
    pub price: u64,
    pub original_price: u64,
    pub discount: u32,
    #[serde(default)]
    pub discount_type: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub thumbnail: String,
    pub manufacturing_year: u16,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub specifications: ProductSpecifications,
    pub stock: u32,
    pub is_active: bool,
    pub is_featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub country: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
