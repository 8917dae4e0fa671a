//! Field rules and the per-field / whole-form validation entry points.

use crate::error::{FieldError, ValidationError};
use crate::sanitize::sanitize;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;

/// Form values keyed by field name. Values are stored post-sanitization.
pub type FormValues = HashMap<String, String>;

/// Validation rule for a single form field.
///
/// Built with a chain of setters:
///
/// ```rust
/// use agrolink_validate::{patterns, FieldRule};
///
/// let email = FieldRule::new()
///     .required()
///     .max_length(100)
///     .pattern(patterns::email())
///     .sanitized();
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldRule {
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Regex>,
    sanitize: bool,
}

impl FieldRule {
    /// Create an empty rule. An empty rule accepts any value.
    pub fn new() -> Self {
        Self::default()
    }

    /// The field must be non-blank after trimming.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Minimum character count for non-empty values.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Maximum character count for non-empty values.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Non-empty values must match the pattern.
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Run the sanitizer over the value before any check.
    pub fn sanitized(mut self) -> Self {
        self.sanitize = true;
        self
    }

    /// Whether this rule sanitizes its input before checking.
    pub fn sanitizes(&self) -> bool {
        self.sanitize
    }
}

/// An ordered set of field rules for one form.
///
/// Order matters: bulk validation reports violations in rule-set order, so
/// error output is deterministic.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<(String, FieldRule)>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule for a field.
    pub fn field(mut self, name: impl Into<String>, rule: FieldRule) -> Self {
        self.rules.push((name.into(), rule));
        self
    }

    /// Look up the rule for a field, if any.
    pub fn get(&self, name: &str) -> Option<&FieldRule> {
        self.rules
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, rule)| rule)
    }

    /// Iterate rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// Number of ruled fields.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the rule set is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Validate a single field value against its rule.
///
/// Returns the first violation, or `None` when the value passes. Check
/// order: sanitize (when the rule asks for it), required, max length, min
/// length, pattern. A blank value on a `required` rule short-circuits; a
/// blank value on an optional rule passes every remaining check.
pub fn validate_field(field: &str, value: &str, rule: &FieldRule) -> Option<FieldError> {
    violations(field, value, rule).into_iter().next()
}

/// Validate a whole form against a rule set.
///
/// Collects every violation across all ruled fields (a field failing
/// `required` contributes one error and is not checked further; length and
/// pattern violations are independent and may stack). Fields without a rule
/// are ignored; ruled fields missing from `data` are treated as blank.
pub fn validate_all(data: &FormValues, rules: &RuleSet) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    for (field, rule) in rules.iter() {
        let raw = data.get(field).map(String::as_str).unwrap_or("");
        errors.extend(violations(field, raw, rule));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(errors))
    }
}

/// Every violation of one rule by one value, in check order.
fn violations(field: &str, value: &str, rule: &FieldRule) -> Vec<FieldError> {
    let value: Cow<'_, str> = if rule.sanitize {
        Cow::Owned(sanitize(value))
    } else {
        Cow::Borrowed(value)
    };

    if rule.required && value.trim().is_empty() {
        return vec![FieldError::new(
            field,
            "required",
            format!("{field} is required"),
        )];
    }

    // Length and pattern checks only apply to non-empty values, so an
    // optional field left blank stays valid.
    if value.is_empty() {
        return Vec::new();
    }

    let mut errors = Vec::new();
    let len = value.chars().count();
    if let Some(max) = rule.max_length {
        if len > max {
            errors.push(length_error(
                field,
                rule,
                len,
                format!("{field} must be less than {max} characters"),
            ));
        }
    }
    if let Some(min) = rule.min_length {
        if len < min {
            errors.push(length_error(
                field,
                rule,
                len,
                format!("{field} must be at least {min} characters"),
            ));
        }
    }
    if let Some(pattern) = &rule.pattern {
        if !pattern.is_match(&value) {
            errors.push(FieldError::new(
                field,
                "format",
                format!("{field} format is invalid"),
            ));
        }
    }

    errors
}

fn length_error(field: &str, rule: &FieldRule, actual: usize, message: String) -> FieldError {
    let mut params = HashMap::new();
    params.insert("min".to_string(), serde_json::json!(rule.min_length));
    params.insert("max".to_string(), serde_json::json!(rule.max_length));
    params.insert("value".to_string(), serde_json::json!(actual));
    FieldError::with_params(field, "length", message, params)
}

/// Compiled patterns shared by the standard inquiry forms.
pub mod patterns {
    use once_cell::sync::Lazy;
    use regex::Regex;

    static EMAIL: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

    /// Loose email shape check: `local@domain.tld`, no whitespace.
    pub fn email() -> Regex {
        EMAIL.clone()
    }
}
