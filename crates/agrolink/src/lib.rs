//! # Agrolink
//!
//! The site core for an agricultural trading company's web presence: a
//! compiled-in product catalog (tea, rice, wheat, spices, dry fruits) with
//! a small query layer, and a secure inquiry-submission pipeline that turns
//! validated form input into a pre-filled messaging deep link.
//!
//! There is no backend and no persistence. "Submitting" an inquiry means
//! sanitizing and validating the form, passing a per-form rate-limit gate,
//! composing a `https://wa.me/<recipient>?text=...` URL, vetting it against
//! a domain allow-list, and handing it to the host to open in a new
//! browsing context.
//!
//! ## Quick Start
//!
//! ```rust
//! use agrolink::prelude::*;
//!
//! let config = AppConfig::default();
//! let mut form = FormController::new(
//!     forms::secure_contact(),
//!     Composer::from_config(&config),
//!     LogDispatch,
//! );
//!
//! form.update_field("name", "Asha Patel");
//! form.update_field("email", "asha@example.com");
//! form.update_field("message", "Please quote 2 MT of BOP Assam tea.");
//! assert!(matches!(form.submit(), SubmitOutcome::Dispatched { .. }));
//!
//! let assam = by_category_and_subcategory(Category::Tea, "assam");
//! assert_eq!(assam.len(), 2);
//! ```
//!
//! ## Crates
//!
//! - `agrolink-core` - configuration, environment profile, telemetry
//! - `agrolink-validate` - sanitizer and field-rule validation
//! - `agrolink-catalog` - the immutable product catalog and queries
//! - `agrolink-inquiry` - rate limiting, composition, dispatch, and the
//!   form controller

pub use agrolink_core::{load_dotenv, telemetry, AppConfig, ConfigError, Environment, RuntimeContext};

pub use agrolink_validate::{
    patterns, sanitize, validate_all, validate_field, FieldError, FieldRule, FormValues, RuleSet,
    ValidationError,
};

pub use agrolink_catalog::{
    by_category, by_category_and_subcategory, by_id, catalog, related, search, Category, Product,
    Specification, TradeInfo,
};

pub use agrolink_inquiry::{
    forms, message, Composer, Dispatch, DispatchError, FailingDispatch, FormController, FormSpec,
    FormState, InquiryError, LogDispatch, RateLimit, RecordingDispatch, SlidingWindowLimiter,
    SubmitOutcome,
};

/// Commonly used imports.
pub mod prelude {
    pub use agrolink_core::{AppConfig, Environment, RuntimeContext};
    pub use agrolink_validate::{sanitize, FieldRule, RuleSet, ValidationError};
    pub use agrolink_catalog::{
        by_category, by_category_and_subcategory, by_id, search, Category, Product,
    };
    pub use agrolink_inquiry::{
        forms, Composer, Dispatch, FormController, LogDispatch, RateLimit, RecordingDispatch,
        SubmitOutcome,
    };
}
