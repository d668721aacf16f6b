//! Catalog filtering.
//!
//! Reduces the full catalog to the subsequence matching a
//! [`FilterSelection`]: AND across field groups, OR within a group, empty
//! group = no constraint. The filter is stable—matching products keep their
//! relative catalog order—and pure.

use crate::model::Product;
use crate::selection::FilterSelection;

/// Apply the selection to the whole catalog.
pub fn apply(catalog: &[Product], selection: &FilterSelection) -> Vec<Product> {
    catalog
        .iter()
        .filter(|product| matches(product, selection))
        .cloned()
        .collect()
}

/// The per-product predicate.
///
/// The year and origin groups are carried in the selection but not checked
/// here; see [`FilterSelection`].
pub fn matches(product: &Product, selection: &FilterSelection) -> bool {
    if !selection.categories.is_empty() && !selection.categories.contains(&product.category_id) {
        return false;
    }
    if !selection.brands.is_empty() && !selection.brands.contains(&product.brand_id) {
        return false;
    }
    if let Some(range) = &selection.price_range {
        if !range.contains(product.price) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{PriceRange, SelectionPatch};
    use crate::test_utils::product;

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Galaxy A16", 4_000_000, 1, 2),
            product(2, "Redmi Note 13", 6_000_000, 1, 5),
            product(3, "iPhone 15", 9_999_999, 2, 1),
            product(4, "iPad Air", 10_000_001, 2, 1),
            product(5, "Nokia 105", 500_000, 3, 4),
        ]
    }

    #[test]
    fn empty_selection_is_identity() {
        let catalog = catalog();
        let result = apply(&catalog, &FilterSelection::default());
        let ids: Vec<_> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn categories_or_within_group() {
        let catalog = catalog();
        let mut selection = FilterSelection::default();
        selection.toggle_category(1, true);
        selection.toggle_category(3, true);

        let result = apply(&catalog, &selection);
        let ids: Vec<_> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 5]);
    }

    #[test]
    fn groups_and_across() {
        let catalog = catalog();
        let mut selection = FilterSelection::default();
        selection.toggle_category(2, true);
        selection.toggle_brand(1, true);
        selection.select_price_range(Some(PriceRange::new(0, 10_000_000)));

        let result = apply(&catalog, &selection);
        let ids: Vec<_> = result.iter().map(|p| p.id).collect();
        // Category 2 AND brand 1 AND price ≤ 10M leaves only the iPhone.
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn price_band_is_boundary_inclusive() {
        let catalog = vec![
            product(1, "a", 4_000_000, 1, 1),
            product(2, "b", 6_000_000, 1, 1),
            product(3, "c", 9_999_999, 1, 1),
            product(4, "d", 10_000_001, 1, 1),
        ];
        let mut selection = FilterSelection::default();
        selection.apply(SelectionPatch {
            price_range: Some("5000000-10000000".into()),
            ..Default::default()
        });

        let result = apply(&catalog, &selection);
        let ids: Vec<_> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn malformed_price_token_imposes_no_constraint() {
        let catalog = catalog();
        let mut selection = FilterSelection::default();
        selection.apply(SelectionPatch {
            price_range: Some("oops".into()),
            ..Default::default()
        });

        assert_eq!(apply(&catalog, &selection).len(), catalog.len());
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        let mut selection = FilterSelection::default();
        selection.toggle_category(1, true);
        assert!(apply(&[], &selection).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = catalog();
        let mut selection = FilterSelection::default();
        selection.toggle_brand(1, true);

        let once = apply(&catalog, &selection);
        let twice = apply(&catalog, &selection);
        let once_ids: Vec<_> = once.iter().map(|p| p.id).collect();
        let twice_ids: Vec<_> = twice.iter().map(|p| p.id).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn year_and_origin_groups_have_no_effect() {
        let catalog = catalog();
        let mut selection = FilterSelection::default();
        selection.toggle_year(2019, true);
        selection.toggle_origin("Mars", true);

        assert_eq!(apply(&catalog, &selection).len(), catalog.len());
    }
}
