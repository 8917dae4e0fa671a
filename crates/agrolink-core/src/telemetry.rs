//! Telemetry initialization.
//!
//! One `tracing` subscriber for the whole process. The environment profile
//! selects the default filter, so production builds drop debug chatter
//! without anyone patching logging functions at runtime; `RUST_LOG` still
//! overrides when set.

use crate::config::Environment;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Idempotent: a second call (common in test binaries) is a no-op rather
/// than an error.
pub fn init(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(environment.default_log_level()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();

    tracing::debug!(environment = environment.as_str(), "telemetry initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init(&Environment::Development);
        init(&Environment::Production);
    }
}
