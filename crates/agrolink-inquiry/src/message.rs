//! Inquiry message bodies.
//!
//! Deterministic plain-text templates interpolating form values. Values
//! arrive already sanitized; nothing here re-sanitizes or escapes.

use agrolink_validate::FormValues;

fn value<'a>(values: &'a FormValues, field: &str) -> &'a str {
    values.get(field).map(String::as_str).unwrap_or("")
}

fn value_or<'a>(values: &'a FormValues, field: &str, fallback: &'a str) -> &'a str {
    match values.get(field) {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}

/// Body for the compact contact form: name, email, message.
pub fn contact_submission(values: &FormValues) -> String {
    format!(
        "New Contact Form Submission:\n\
         Name: {}\n\
         Email: {}\n\
         Message: {}",
        value(values, "name"),
        value(values, "email"),
        value(values, "message"),
    )
}

/// Body for the full inquiry form on the contact page.
pub fn full_inquiry(company_name: &str, values: &FormValues) -> String {
    format!(
        "Hello {company_name},\n\
         \n\
         I am interested in your products. Here are my details:\n\
         \n\
         Name: {}\n\
         Company: {}\n\
         Email: {}\n\
         Phone: {}\n\
         Interested Product: {}\n\
         Approximate Quantity: {}\n\
         Destination: {}\n\
         \n\
         Message: {}\n\
         \n\
         Please provide me with a detailed quote.\n\
         \n\
         Thank you!",
        value(values, "name"),
        value_or(values, "company", "Not specified"),
        value(values, "email"),
        value(values, "phone"),
        value(values, "product"),
        value(values, "quantity"),
        value(values, "destination"),
        value(values, "message"),
    )
}

/// Body for the one-click quote buttons on the category pages.
pub fn product_quote(company_name: &str, values: &FormValues) -> String {
    format!(
        "Hi {company_name},\n\
         \n\
         I'm interested in your {}.\n\
         \n\
         {}\n\
         \n\
         Please share the latest quote with specifications and pricing.\n\
         \n\
         Thank you!",
        value(values, "product"),
        value(values, "description"),
    )
}

/// Body for the custom tea blend quote form.
pub fn custom_blend_quote(company_name: &str, values: &FormValues) -> String {
    format!(
        "Hi {company_name},\n\
         \n\
         I would like to request a quote for a Custom Tea Blend:\n\
         \n\
         Blend Name: {}\n\
         Grade Composition: {}\n\
         Required Quantity: {}\n\
         Description: {}\n\
         \n\
         Please provide pricing and availability details.\n\
         \n\
         Thank you!",
        value(values, "name"),
        value(values, "grade_percentage"),
        value(values, "quantity"),
        value(values, "description"),
    )
}

/// Body for the quote button on a product detail page.
pub fn detail_quote(values: &FormValues) -> String {
    format!(
        "Hi, I'm interested in {}. Please share the latest quote.",
        value(values, "product"),
    )
}
