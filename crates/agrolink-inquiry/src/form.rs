//! The reusable form controller.
//!
//! One controller instance backs one page form. It owns the form state, a
//! private rate limiter, and the composer, and walks every submission
//! through the same gate order: rate limit, bulk validation, composition,
//! dispatch. The controller always comes back to idle; there is no failed
//! state that blocks later attempts.

use crate::compose::Composer;
use crate::dispatch::Dispatch;
use crate::error::InquiryError;
use crate::rate_limit::{RateLimit, SlidingWindowLimiter};
use agrolink_validate::{sanitize, validate_all, validate_field, FormValues, RuleSet};
use url::Url;

/// Message template: renders the already-validated form values to the
/// plain-text inquiry body.
pub type TemplateFn = Box<dyn Fn(&FormValues) -> String + Send + Sync>;

/// Everything that differs between page forms, as data.
pub struct FormSpec {
    /// Page context used in log records ("secure-contact", "tea-quote", ...).
    pub name: String,
    /// Field rules for bulk validation on submit.
    pub rules: RuleSet,
    /// Message template invoked after validation passes.
    pub template: TemplateFn,
    /// Limiter tuning for this form.
    pub limit: RateLimit,
}

impl FormSpec {
    /// Create a spec.
    pub fn new(
        name: impl Into<String>,
        rules: RuleSet,
        template: TemplateFn,
        limit: RateLimit,
    ) -> Self {
        Self {
            name: name.into(),
            rules,
            template,
            limit,
        }
    }
}

/// Per-form mutable state: sanitized values, per-field errors, and the
/// submitting flag.
#[derive(Debug, Default)]
pub struct FormState {
    values: FormValues,
    errors: FormValues,
    submitting: bool,
}

impl FormState {
    fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
    }
}

/// Outcome of one submission attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The inquiry was composed and handed to the dispatch boundary; the
    /// form state has been reset.
    Dispatched { url: Url },
    /// The rate limiter denied the attempt. Nothing else happened.
    RateLimited,
    /// Validation failed; per-field errors are populated and the composer
    /// was never called.
    Rejected(agrolink_validate::ValidationError),
    /// Composition or dispatch failed. Logged with page context; surfaced
    /// to the user as a generic failure.
    Failed,
}

/// Orchestrates sanitize, validate, rate-limit, compose, dispatch for one
/// page form.
pub struct FormController<D: Dispatch> {
    spec: FormSpec,
    state: FormState,
    limiter: SlidingWindowLimiter,
    composer: Composer,
    dispatcher: D,
}

impl<D: Dispatch> FormController<D> {
    /// Create a controller for a form spec. The limiter is private to this
    /// instance; two controllers never share a budget.
    pub fn new(spec: FormSpec, composer: Composer, dispatcher: D) -> Self {
        let limiter = SlidingWindowLimiter::new(spec.limit);
        Self {
            spec,
            state: FormState::default(),
            limiter,
            composer,
            dispatcher,
        }
    }

    /// Current (sanitized) field values.
    pub fn values(&self) -> &FormValues {
        &self.state.values
    }

    /// Current per-field error messages. Absence means valid.
    pub fn errors(&self) -> &FormValues {
        &self.state.errors
    }

    /// Whether a submission is in progress. Only true inside
    /// [`submit`](Self::submit).
    pub fn is_submitting(&self) -> bool {
        self.state.submitting
    }

    /// The dispatcher, for inspection in tests.
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Keystroke path: sanitize the raw value, store it, and re-validate
    /// just this field, updating the error map incrementally.
    pub fn update_field(&mut self, field: &str, raw: &str) {
        let sanitized = sanitize(raw);

        match self.spec.rules.get(field) {
            Some(rule) => match validate_field(field, &sanitized, rule) {
                Some(error) => {
                    self.state.errors.insert(field.to_string(), error.message);
                }
                None => {
                    self.state.errors.remove(field);
                }
            },
            // Unruled fields are stored but never validated.
            None => {}
        }

        self.state.values.insert(field.to_string(), sanitized);
    }

    /// Submit the form: rate-limit gate, bulk validation, composition,
    /// dispatch. Every failure path returns the controller to idle.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.limiter.try_acquire() {
            tracing::warn!(form = %self.spec.name, "submission denied by rate limiter");
            return SubmitOutcome::RateLimited;
        }

        self.state.submitting = true;
        let outcome = self.run_submission();
        self.state.submitting = false;
        outcome
    }

    fn run_submission(&mut self) -> SubmitOutcome {
        if let Err(errors) = validate_all(&self.state.values, &self.spec.rules) {
            for field_error in &errors.fields {
                self.state
                    .errors
                    .insert(field_error.field.clone(), field_error.message.clone());
            }
            tracing::debug!(
                form = %self.spec.name,
                field_errors = errors.len(),
                "submission rejected by validation"
            );
            return SubmitOutcome::Rejected(errors);
        }

        let body = (self.spec.template)(&self.state.values);
        let dispatched = self
            .composer
            .compose(&body)
            .and_then(|url| {
                self.dispatcher.open(&url).map_err(InquiryError::from)?;
                Ok(url)
            });

        match dispatched {
            Ok(url) => {
                self.state.reset();
                tracing::info!(form = %self.spec.name, "inquiry dispatched");
                SubmitOutcome::Dispatched { url }
            }
            Err(error) => {
                tracing::error!(
                    form = %self.spec.name,
                    error = %error,
                    "inquiry submission failed"
                );
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{FailingDispatch, RecordingDispatch};
    use crate::message;
    use agrolink_validate::{patterns, FieldRule};
    use std::time::Duration;

    fn contact_spec(limit: RateLimit) -> FormSpec {
        FormSpec::new(
            "secure-contact",
            RuleSet::new()
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
                ),
            Box::new(message::contact_submission),
            limit,
        )
    }

    fn controller(limit: RateLimit) -> FormController<RecordingDispatch> {
        FormController::new(
            contact_spec(limit),
            Composer::new("917397248359", vec!["wa.me".to_string()]),
            RecordingDispatch::default(),
        )
    }

    fn fill_valid(form: &mut FormController<impl Dispatch>) {
        form.update_field("name", "Asha Patel");
        form.update_field("email", "asha@example.com");
        form.update_field("message", "Please quote 2 MT of BOP Assam tea.");
    }

    #[test]
    fn keystrokes_sanitize_and_validate_incrementally() {
        let mut form = controller(RateLimit::default());

        form.update_field("name", "Hi <script>alert(1)</script>Asha");
        assert_eq!(form.values()["name"], "Hi Asha");

        form.update_field("email", "not-an-email");
        assert_eq!(form.errors()["email"], "email format is invalid");

        form.update_field("email", "asha@example.com");
        assert!(!form.errors().contains_key("email"));
    }

    #[test]
    fn valid_submission_dispatches_and_resets() {
        let mut form = controller(RateLimit::default());
        fill_valid(&mut form);

        match form.submit() {
            SubmitOutcome::Dispatched { url } => {
                assert!(url.as_str().starts_with("https://wa.me/917397248359?text="));
                assert!(url.as_str().contains("New%20Contact%20Form%20Submission"));
            }
            other => panic!("expected dispatch, got {other:?}"),
        }

        assert!(form.values().is_empty());
        assert!(form.errors().is_empty());
        assert!(!form.is_submitting());
        assert_eq!(form.dispatcher().count(), 1);
    }

    #[test]
    fn short_name_yields_exactly_one_error_and_no_dispatch() {
        let mut form = controller(RateLimit::default());
        form.update_field("name", "A");
        form.update_field("email", "asha@example.com");
        form.update_field("message", "Please quote 2 MT of tea.");

        match form.submit() {
            SubmitOutcome::Rejected(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.fields[0].message.contains("at least 2"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }

        assert_eq!(form.dispatcher().count(), 0);
        // Values survive a rejected attempt so the user can correct them.
        assert_eq!(form.values()["email"], "asha@example.com");
    }

    #[test]
    fn rate_limited_submission_has_no_side_effects() {
        let mut form = controller(RateLimit::new(1, Duration::from_secs(60)));
        fill_valid(&mut form);

        assert!(matches!(form.submit(), SubmitOutcome::Dispatched { .. }));

        fill_valid(&mut form);
        assert!(matches!(form.submit(), SubmitOutcome::RateLimited));
        assert_eq!(form.dispatcher().count(), 1);
        // State is untouched by the denial.
        assert_eq!(form.values()["name"], "Asha Patel");
    }

    #[test]
    fn sixth_rapid_quote_is_denied() {
        let mut form = controller(RateLimit::new(5, Duration::from_secs(60)));
        for _ in 0..5 {
            fill_valid(&mut form);
            assert!(matches!(form.submit(), SubmitOutcome::Dispatched { .. }));
        }
        fill_valid(&mut form);
        assert!(matches!(form.submit(), SubmitOutcome::RateLimited));
        assert_eq!(form.dispatcher().count(), 5);
    }

    #[test]
    fn dispatch_failure_is_absorbed() {
        let mut form = FormController::new(
            contact_spec(RateLimit::default()),
            Composer::new("917397248359", vec!["wa.me".to_string()]),
            FailingDispatch,
        );
        fill_valid(&mut form);

        assert!(matches!(form.submit(), SubmitOutcome::Failed));
        assert!(!form.is_submitting());

        // The controller is back at idle and accepts another attempt.
        assert!(matches!(form.submit(), SubmitOutcome::Failed));
    }

    #[test]
    fn invalid_dispatch_target_never_reaches_dispatcher() {
        let mut form = FormController::new(
            contact_spec(RateLimit::default()),
            // Allow-list that rejects the deep-link host.
            Composer::new("917397248359", vec!["example.org".to_string()]),
            RecordingDispatch::default(),
        );
        fill_valid(&mut form);

        assert!(matches!(form.submit(), SubmitOutcome::Failed));
        assert_eq!(form.dispatcher().count(), 0);
    }

    #[test]
    fn unruled_fields_are_stored_without_errors() {
        let mut form = controller(RateLimit::default());
        form.update_field("nickname", "ash");
        assert_eq!(form.values()["nickname"], "ash");
        assert!(form.errors().is_empty());
    }
}
