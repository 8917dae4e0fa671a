//! # Agrolink Inquiry
//!
//! The inquiry-submission pipeline: sanitize, validate, rate-limit, compose
//! a pre-filled messaging deep link, and hand it to the dispatch boundary.
//! One [`FormController`] instance backs each page form; the per-page
//! differences (field rules, message template, limiter tuning) live in
//! [`forms`] as data, not copy-pasted orchestration.
//!
//! ## Example
//!
//! ```rust
//! use agrolink_core::AppConfig;
//! use agrolink_inquiry::{forms, Composer, FormController, RecordingDispatch, SubmitOutcome};
//!
//! let config = AppConfig::default();
//! let mut form = FormController::new(
//!     forms::secure_contact(),
//!     Composer::from_config(&config),
//!     RecordingDispatch::default(),
//! );
//!
//! form.update_field("name", "Asha Patel");
//! form.update_field("email", "asha@example.com");
//! form.update_field("message", "Please quote 2 MT of BOP Assam tea.");
//!
//! match form.submit() {
//!     SubmitOutcome::Dispatched { url } => assert!(url.as_str().starts_with("https://wa.me/")),
//!     other => panic!("expected dispatch, got {other:?}"),
//! }
//! ```

mod compose;
mod dispatch;
mod error;
mod form;
pub mod forms;
pub mod message;
mod rate_limit;

pub use compose::Composer;
pub use dispatch::{Dispatch, DispatchError, FailingDispatch, LogDispatch, RecordingDispatch};
pub use error::InquiryError;
pub use form::{FormController, FormSpec, FormState, SubmitOutcome, TemplateFn};
pub use rate_limit::{RateLimit, SlidingWindowLimiter};

/// Prelude module for the inquiry pipeline.
pub mod prelude {
    pub use crate::compose::Composer;
    pub use crate::dispatch::{Dispatch, DispatchError, LogDispatch, RecordingDispatch};
    pub use crate::error::InquiryError;
    pub use crate::form::{FormController, FormSpec, FormState, SubmitOutcome};
    pub use crate::forms;
    pub use crate::rate_limit::{RateLimit, SlidingWindowLimiter};
}
