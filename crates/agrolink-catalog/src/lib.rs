//! # Agrolink Catalog
//!
//! The product catalog for the Agrolink trading site: an immutable,
//! compiled-in list of product records plus a small query layer. There are
//! no mutation entry points; the list is safe to share between any number
//! of readers.
//!
//! ## Example
//!
//! ```rust
//! use agrolink_catalog::{by_category, by_id, search, Category};
//!
//! let tea = by_id("bop-assam-tea").expect("catalog ships with BOP Assam");
//! assert_eq!(tea.category, Category::Tea);
//!
//! assert!(!by_category(Category::Rice).is_empty());
//! assert!(search("basmati").iter().all(|p| p.category == Category::Rice));
//! ```

mod data;
mod product;
mod query;

pub use data::catalog;
pub use product::{Category, ParseCategoryError, Product, Specification, TradeInfo};
pub use query::{by_category, by_category_and_subcategory, by_id, related, search};
