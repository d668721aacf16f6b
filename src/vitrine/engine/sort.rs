//! Sort comparators for the product listing.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::VitrineError;
use crate::model::Product;

/// The five sort orders offered by the listing's dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Keep the filtered sequence exactly as-is.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl FromStr for SortKey {
    type Err = VitrineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SortKey::Default),
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            "name-asc" => Ok(SortKey::NameAsc),
            "name-desc" => Ok(SortKey::NameDesc),
            other => Err(VitrineError::InvalidFilterValue(format!(
                "unknown sort order: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            SortKey::Default => "default",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
        };
        write!(f, "{}", token)
    }
}

/// Return a newly ordered copy of `products`. The input is never mutated,
/// and every order is stable: comparator-equal products keep their relative
/// input positions. `SortKey::Default` is the identity.
pub fn apply(products: &[Product], key: SortKey) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match key {
        SortKey::Default => {}
        SortKey::PriceAsc => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::NameAsc => sorted.sort_by(|a, b| name_cmp(&a.name, &b.name)),
        SortKey::NameDesc => sorted.sort_by(|a, b| name_cmp(&b.name, &a.name)),
    }
    sorted
}

// Case-insensitive comparison standing in for the storefront's locale-aware
// ordering: "banana" sorts between "Apple" and "Cherry". Names whose folds
// are equal count as ties and keep input order.
fn name_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
