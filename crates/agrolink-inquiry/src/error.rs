//! Inquiry pipeline error taxonomy.
//!
//! Every variant is recovered at the form-controller boundary; nothing here
//! propagates past a submission attempt.

use crate::dispatch::DispatchError;
use agrolink_validate::ValidationError;
use thiserror::Error;

/// Failure modes of one submission attempt.
#[derive(Debug, Error)]
pub enum InquiryError {
    /// One or more fields failed validation. Surfaced inline per field.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The sliding-window gate denied this attempt. Transient; the user
    /// resubmits manually after the window passes.
    #[error("rate limit exceeded, wait before submitting again")]
    RateLimited,

    /// The composed URL failed scheme or allow-list checks. Expected never
    /// to happen with shipped configuration, but checked anyway; the URL is
    /// never handed to dispatch.
    #[error("composed URL failed dispatch-target checks: {url}")]
    InvalidDispatchTarget { url: String },

    /// The dispatch boundary itself failed.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
