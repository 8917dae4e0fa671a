//! Query functions over the static catalog.
//!
//! All total: they never fail, they only return fewer or zero matches.
//! Catalog order is preserved by every filter.

use crate::data::catalog;
use crate::product::{Category, Product};

/// Look up a product by id. Ids are unique, so at most one record matches.
pub fn by_id(id: &str) -> Option<&'static Product> {
    catalog().iter().find(|product| product.id == id)
}

/// All products in a category, catalog order preserved.
pub fn by_category(category: Category) -> Vec<&'static Product> {
    catalog()
        .iter()
        .filter(|product| product.category == category)
        .collect()
}

/// Products matching both category and subcategory.
pub fn by_category_and_subcategory(
    category: Category,
    subcategory: &str,
) -> Vec<&'static Product> {
    catalog()
        .iter()
        .filter(|product| {
            product.category == category && product.subcategory.as_deref() == Some(subcategory)
        })
        .collect()
}

/// Case-insensitive substring search over name and short description.
///
/// The empty query matches every record.
pub fn search(query: &str) -> Vec<&'static Product> {
    let query = query.to_lowercase();
    catalog()
        .iter()
        .filter(|product| {
            product.name.to_lowercase().contains(&query)
                || product.short_description.to_lowercase().contains(&query)
        })
        .collect()
}

/// Resolve a product's related ids to records.
///
/// Dangling references are skipped silently, so the result can be shorter
/// than `related_products`.
pub fn related(product: &Product) -> Vec<&'static Product> {
    product
        .related_products
        .iter()
        .filter_map(|id| by_id(id))
        .collect()
}
