//! The dispatch boundary.
//!
//! Opening a new browsing context is the host's job; the pipeline only
//! hands over a vetted URL. Fire-and-forget: one attempt, no timeout, no
//! retry.

use std::sync::Mutex;
use thiserror::Error;
use url::Url;

/// Error raised by a dispatch implementation.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The host refused or failed to open the target.
    #[error("dispatch failed: {0}")]
    Failed(String),
}

/// Boundary trait for opening a composed deep link.
///
/// Implementations must not leak an opener or referrer to the target
/// context.
pub trait Dispatch {
    /// Open the URL in a new browsing context.
    fn open(&self, url: &Url) -> Result<(), DispatchError>;
}

/// Dispatcher that only logs the target. Useful as a stand-in where no
/// host integration exists (server-side rendering, dry runs).
#[derive(Debug, Default, Clone)]
pub struct LogDispatch;

impl Dispatch for LogDispatch {
    fn open(&self, url: &Url) -> Result<(), DispatchError> {
        tracing::info!(target_host = url.host_str().unwrap_or("-"), "opening dispatch target");
        Ok(())
    }
}

/// Dispatcher that records every opened URL. Test double.
#[derive(Debug, Default)]
pub struct RecordingDispatch {
    opened: Mutex<Vec<Url>>,
}

impl RecordingDispatch {
    /// URLs opened so far, oldest first.
    pub fn opened(&self) -> Vec<Url> {
        self.opened.lock().map(|urls| urls.clone()).unwrap_or_default()
    }

    /// Number of dispatches performed.
    pub fn count(&self) -> usize {
        self.opened.lock().map(|urls| urls.len()).unwrap_or(0)
    }
}

impl Dispatch for RecordingDispatch {
    fn open(&self, url: &Url) -> Result<(), DispatchError> {
        self.opened
            .lock()
            .map_err(|_| DispatchError::Failed("recorder poisoned".to_string()))?
            .push(url.clone());
        Ok(())
    }
}

/// Dispatcher that always fails. Test double for the unexpected-error path.
#[derive(Debug, Default, Clone)]
pub struct FailingDispatch;

impl Dispatch for FailingDispatch {
    fn open(&self, _url: &Url) -> Result<(), DispatchError> {
        Err(DispatchError::Failed("host rejected open".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_dispatch_collects_urls() {
        let dispatch = RecordingDispatch::default();
        let url = Url::parse("https://wa.me/123?text=hi").unwrap();
        dispatch.open(&url).unwrap();
        dispatch.open(&url).unwrap();
        assert_eq!(dispatch.count(), 2);
        assert_eq!(dispatch.opened()[0], url);
    }

    #[test]
    fn log_dispatch_is_infallible() {
        let url = Url::parse("https://wa.me/123?text=hi").unwrap();
        assert!(LogDispatch.open(&url).is_ok());
    }
}
