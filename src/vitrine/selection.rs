//! Filter selection state.
//!
//! A [`FilterSelection`] is the value object behind the storefront's filter
//! sidebar: multi-select category and brand sets, a single-select price band,
//! and the year/origin checkboxes. Groups combine with AND; members within a
//! group combine with OR; an empty group imposes no constraint.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::VitrineError;
use crate::model::{BrandId, CategoryId};

/// An inclusive price band in VND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Inclusive at both ends.
    pub fn contains(&self, price: u64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl FromStr for PriceRange {
    type Err = VitrineError;

    /// Parses the storefront's band token format, e.g. `"5000000-10000000"`.
    /// An open-ended band is expressed with a large literal maximum
    /// (`"30000000-999999999"`), never an actual infinity.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = s
            .split_once('-')
            .ok_or_else(|| VitrineError::InvalidFilterValue(s.to_string()))?;
        let min = min
            .trim()
            .parse()
            .map_err(|_| VitrineError::InvalidFilterValue(s.to_string()))?;
        let max = max
            .trim()
            .parse()
            .map_err(|_| VitrineError::InvalidFilterValue(s.to_string()))?;
        Ok(Self { min, max })
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// A preset price band offered in the filter sidebar.
#[derive(Debug, Clone, Copy)]
pub struct PriceBand {
    pub label: &'static str,
    pub range: PriceRange,
}

/// The storefront's preset bands. The last band's ceiling is the
/// "effectively unbounded" literal the backend never exceeds.
pub static PRICE_BANDS: Lazy<Vec<PriceBand>> = Lazy::new(|| {
    vec![
        PriceBand {
            label: "Under 5M ₫",
            range: PriceRange::new(0, 5_000_000),
        },
        PriceBand {
            label: "5M – 10M ₫",
            range: PriceRange::new(5_000_000, 10_000_000),
        },
        PriceBand {
            label: "10M – 20M ₫",
            range: PriceRange::new(10_000_000, 20_000_000),
        },
        PriceBand {
            label: "20M – 30M ₫",
            range: PriceRange::new(20_000_000, 30_000_000),
        },
        PriceBand {
            label: "Over 30M ₫",
            range: PriceRange::new(30_000_000, 999_999_999),
        },
    ]
});

/// The active filter state, owned by the view and mutated only by explicit
/// user action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub categories: BTreeSet<CategoryId>,
    pub brands: BTreeSet<BrandId>,
    pub price_range: Option<PriceRange>,
    // The year and origin checkboxes exist in the sidebar but are not
    // applied by the predicate yet.
    pub years: BTreeSet<u16>,
    pub origins: BTreeSet<String>,
}

impl FilterSelection {
    /// True when no group imposes any constraint.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.brands.is_empty()
            && self.price_range.is_none()
            && self.years.is_empty()
            && self.origins.is_empty()
    }

    /// Check or uncheck one category (multi-select).
    pub fn toggle_category(&mut self, id: CategoryId, checked: bool) {
        if checked {
            self.categories.insert(id);
        } else {
            self.categories.remove(&id);
        }
    }

    /// Check or uncheck one brand (multi-select).
    pub fn toggle_brand(&mut self, id: BrandId, checked: bool) {
        if checked {
            self.brands.insert(id);
        } else {
            self.brands.remove(&id);
        }
    }

    pub fn toggle_year(&mut self, year: u16, checked: bool) {
        if checked {
            self.years.insert(year);
        } else {
            self.years.remove(&year);
        }
    }

    pub fn toggle_origin(&mut self, origin: &str, checked: bool) {
        if checked {
            self.origins.insert(origin.to_string());
        } else {
            self.origins.remove(origin);
        }
    }

    /// Select a price band, replacing any previous one (single-select), or
    /// clear it with `None`.
    pub fn select_price_range(&mut self, range: Option<PriceRange>) {
        self.price_range = range;
    }

    /// Merge a partial update into the selection. Only groups present in the
    /// patch are replaced.
    pub fn apply(&mut self, patch: SelectionPatch) {
        if let Some(categories) = patch.categories {
            self.categories = categories.into_iter().collect();
        }
        if let Some(brands) = patch.brands {
            self.brands = brands.into_iter().collect();
        }
        if let Some(token) = patch.price_range {
            self.price_range = parse_price_token(&token);
        }
        if let Some(years) = patch.years {
            self.years = years.into_iter().collect();
        }
        if let Some(origins) = patch.origins {
            self.origins = origins.into_iter().collect();
        }
    }
}

/// A partial [`FilterSelection`] update, as produced by the view layer.
///
/// The price group travels as the raw band token: the empty string clears
/// the band, and a token that fails to parse degrades to "no price
/// constraint" rather than raising. The storefront UI behaves this way, so
/// checkbox state never wedges the listing.
#[derive(Debug, Clone, Default)]
pub struct SelectionPatch {
    pub categories: Option<Vec<CategoryId>>,
    pub brands: Option<Vec<BrandId>>,
    pub price_range: Option<String>,
    pub years: Option<Vec<u16>>,
    pub origins: Option<Vec<String>>,
}

fn parse_price_token(token: &str) -> Option<PriceRange> {
    if token.is_empty() {
        return None;
    }
    match token.parse() {
        Ok(range) => Some(range),
        Err(_) => {
            warn!("ignoring malformed price band token: {:?}", token);
            None
        }
    }
}
