//! Fixture builders shared by unit tests.

use chrono::{TimeZone, Utc};

use crate::model::{
    Brand, BrandId, Category, CategoryId, Product, ProductId, ProductSpecifications,
};

/// A product with the fields the engine cares about; everything else gets
/// plausible defaults.
pub fn product(
    id: ProductId,
    name: &str,
    price: u64,
    category_id: CategoryId,
    brand_id: BrandId,
) -> Product {
    let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::minutes(i64::from(id));
    Product {
        id,
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        category_id,
        brand_id,
        price,
        original_price: price,
        discount: 0,
        discount_type: String::new(),
        images: Vec::new(),
        thumbnail: String::new(),
        manufacturing_year: 2024,
        origin: String::new(),
        description: String::new(),
        specifications: ProductSpecifications::default(),
        stock: 10,
        is_active: true,
        is_featured: false,
        tags: Vec::new(),
        created_at,
        updated_at: created_at,
    }
}

pub fn category(id: CategoryId, name: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        description: String::new(),
        image: String::new(),
        is_active: true,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn brand(id: BrandId, name: &str) -> Brand {
    Brand {
        id,
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        logo: String::new(),
        country: String::new(),
        is_active: true,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}
