//! Standard form specs, one per page.
//!
//! The pages themselves are thin presentation; everything that used to be
//! copy-pasted per page (rules, template, limiter tuning) is defined here
//! once and consumed through [`FormController`](crate::FormController).
//!
//! Limiter tunings are carried over from the deployed site as-is: the
//! secure contact form allows 3 submissions per 5 seconds, the category
//! quote buttons 5 per 3 seconds, and everything else falls back to the
//! configured default.

use crate::form::FormSpec;
use crate::message;
use crate::rate_limit::RateLimit;
use agrolink_catalog::Category;
use agrolink_core::AppConfig;
use agrolink_validate::{patterns, FieldRule, RuleSet};
use std::time::Duration;

const CONTACT_LIMIT: RateLimit = RateLimit::new(3, Duration::from_secs(5));
const QUOTE_LIMIT: RateLimit = RateLimit::new(5, Duration::from_secs(3));

/// The compact secure contact form: name, email, message.
pub fn secure_contact() -> FormSpec {
    let rules = RuleSet::new()
        .field(
            "name",
            FieldRule::new().required().min_length(2).max_length(50).sanitized(),
        )
        .field(
            "email",
            FieldRule::new()
                .required()
                .max_length(100)
                .pattern(patterns::email())
                .sanitized(),
        )
        .field(
            "message",
            FieldRule::new().required().min_length(10).max_length(1000).sanitized(),
        );

    FormSpec::new(
        "secure-contact",
        rules,
        Box::new(message::contact_submission),
        CONTACT_LIMIT,
    )
}

/// The full inquiry form on the contact page: buyer details, product
/// interest, and shipping destination.
pub fn full_inquiry(config: &AppConfig) -> FormSpec {
    let rules = RuleSet::new()
        .field(
            "name",
            FieldRule::new().required().min_length(2).max_length(50).sanitized(),
        )
        .field("company", FieldRule::new().max_length(100).sanitized())
        .field(
            "email",
            FieldRule::new()
                .required()
                .max_length(100)
                .pattern(patterns::email())
                .sanitized(),
        )
        .field("phone", FieldRule::new().required().max_length(20).sanitized())
        .field("product", FieldRule::new().required().max_length(100).sanitized())
        .field("quantity", FieldRule::new().max_length(50).sanitized())
        .field("destination", FieldRule::new().max_length(100).sanitized())
        .field(
            "message",
            FieldRule::new().max_length(config.input_max_length).sanitized(),
        );

    let company_name = config.company_name.clone();
    FormSpec::new(
        "contact-inquiry",
        rules,
        Box::new(move |values| message::full_inquiry(&company_name, values)),
        CONTACT_LIMIT,
    )
}

/// One-click quote action on a category page (tea, rice, wheat, spices,
/// dry fruits). The caller sets the `product` and `description` fields
/// from the clicked card before submitting.
pub fn product_quote(config: &AppConfig, category: Category) -> FormSpec {
    let rules = RuleSet::new()
        .field("product", FieldRule::new().required().max_length(100).sanitized())
        .field("description", FieldRule::new().max_length(500).sanitized());

    let company_name = config.company_name.clone();
    FormSpec::new(
        format!("{category}-quote"),
        rules,
        Box::new(move |values| message::product_quote(&company_name, values)),
        QUOTE_LIMIT,
    )
}

/// Custom tea blend quote form.
pub fn custom_blend(config: &AppConfig) -> FormSpec {
    let rules = RuleSet::new()
        .field("name", FieldRule::new().required().max_length(100).sanitized())
        .field(
            "grade_percentage",
            FieldRule::new().required().max_length(200).sanitized(),
        )
        .field("quantity", FieldRule::new().required().max_length(50).sanitized())
        .field("description", FieldRule::new().required().max_length(500).sanitized());

    let company_name = config.company_name.clone();
    FormSpec::new(
        "custom-blend-quote",
        rules,
        Box::new(move |values| message::custom_blend_quote(&company_name, values)),
        QUOTE_LIMIT,
    )
}

/// Quote button on a product detail page. The caller sets `product` from
/// the viewed record.
pub fn detail_quote(config: &AppConfig) -> FormSpec {
    let rules = RuleSet::new().field(
        "product",
        FieldRule::new().required().max_length(100).sanitized(),
    );

    FormSpec::new(
        "detail-quote",
        rules,
        Box::new(message::detail_quote),
        RateLimit::new(
            config.rate_max_requests,
            Duration::from_secs(config.rate_window_secs),
        ),
    )
}
