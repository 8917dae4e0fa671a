//! Explicit runtime context.
//!
//! Components never read ambient host state (transport scheme, mode flags)
//! directly; the embedding layer builds one of these at startup and passes
//! it down. Keeps the core logic pure and testable without a browser-like
//! host.

use crate::config::Environment;

/// Runtime facts the embedding host supplies at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeContext {
    environment: Environment,
    secure_transport: bool,
}

impl RuntimeContext {
    /// Build a context from the environment profile and whether the page
    /// itself was served over a secure transport.
    pub fn new(environment: Environment, secure_transport: bool) -> Self {
        Self {
            environment,
            secure_transport,
        }
    }

    /// The active environment profile.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Whether the page transport is secure.
    pub fn secure_transport(&self) -> bool {
        self.secure_transport
    }

    /// Warning to surface when production traffic arrives over an insecure
    /// transport. `None` in development or when the transport is secure.
    pub fn transport_warning(&self) -> Option<&'static str> {
        if self.environment.is_production() && !self.secure_transport {
            Some("This site is not using HTTPS. Your data may not be secure.")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insecure_production_warns() {
        let ctx = RuntimeContext::new(Environment::Production, false);
        assert!(ctx.transport_warning().is_some());
    }

    #[test]
    fn secure_production_is_quiet() {
        let ctx = RuntimeContext::new(Environment::Production, true);
        assert!(ctx.transport_warning().is_none());
    }

    #[test]
    fn development_never_warns() {
        let ctx = RuntimeContext::new(Environment::Development, false);
        assert!(ctx.transport_warning().is_none());
    }
}
