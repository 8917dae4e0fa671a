//! Product record types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Product category. A closed set; pages and queries key off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Tea,
    Rice,
    Wheat,
    Spices,
    DryFruits,
}

impl Category {
    /// Kebab-case name as used in routes and data files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tea => "tea",
            Self::Rice => "rice",
            Self::Wheat => "wheat",
            Self::Spices => "spices",
            Self::DryFruits => "dry-fruits",
        }
    }

    /// All categories, in display order.
    pub fn all() -> [Category; 5] {
        [
            Self::Tea,
            Self::Rice,
            Self::Wheat,
            Self::Spices,
            Self::DryFruits,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a category name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown product category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tea" => Ok(Self::Tea),
            "rice" => Ok(Self::Rice),
            "wheat" => Ok(Self::Wheat),
            "spices" => Ok(Self::Spices),
            "dry-fruits" => Ok(Self::DryFruits),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

/// One (parameter, value) row of a product's specification table.
///
/// Order within [`Product::specifications`] is display-significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    pub parameter: String,
    pub value: String,
}

/// Commercial terms attached to a product. All free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fob: Option<String>,
    pub port: String,
    pub lead_time: String,
    pub payment_terms: String,
}

/// A catalog product record.
///
/// Immutable once the catalog is built. `related_products` holds ids of
/// other records and is purely referential: a dangling id is tolerated and
/// simply yields no match at lookup time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub short_description: String,
    pub full_description: String,
    /// Image references, at least one.
    pub images: Vec<String>,
    pub specifications: Vec<Specification>,
    /// Trade-classification code, when assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_code: Option<String>,
    pub packaging: Vec<String>,
    /// Minimum order quantity. Free text, no unit normalization.
    pub moq: String,
    pub availability: String,
    pub trade_info: TradeInfo,
    pub related_products: Vec<String>,
}
