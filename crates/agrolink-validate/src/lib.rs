//! # Agrolink Validation
//!
//! Input sanitization and rule-based validation for the Agrolink inquiry
//! forms. Every user-supplied value passes through here before it reaches
//! message composition or the dispatch boundary.
//!
//! ## Example
//!
//! ```rust
//! use agrolink_validate::{sanitize, FieldRule, RuleSet, validate_all};
//! use std::collections::HashMap;
//!
//! let rules = RuleSet::new()
//!     .field("name", FieldRule::new().required().min_length(2).max_length(50).sanitized())
//!     .field("message", FieldRule::new().required().min_length(10).max_length(1000).sanitized());
//!
//! let mut data = HashMap::new();
//! data.insert("name".to_string(), sanitize("  Priya <b>Sharma</b> "));
//! data.insert("message".to_string(), "Interested in BOP Assam tea.".to_string());
//!
//! assert!(validate_all(&data, &rules).is_ok());
//! ```
//!
//! ## Error Format
//!
//! Validation failures serialize to the standard Agrolink error envelope:
//!
//! ```json
//! {
//!   "error": {
//!     "type": "validation_error",
//!     "message": "Validation failed",
//!     "fields": [
//!       {"field": "name", "code": "required", "message": "name is required"}
//!     ]
//!   }
//! }
//! ```

mod error;
mod rules;
mod sanitize;

pub use error::{FieldError, ValidationError};
pub use rules::{patterns, validate_all, validate_field, FieldRule, FormValues, RuleSet};
pub use sanitize::sanitize;

/// Prelude module for validation.
pub mod prelude {
    pub use crate::error::{FieldError, ValidationError};
    pub use crate::rules::{validate_all, validate_field, FieldRule, FormValues, RuleSet};
    pub use crate::sanitize::sanitize;
}
