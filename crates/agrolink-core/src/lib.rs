//! # Agrolink Core
//!
//! Shared runtime pieces for the Agrolink site core: the environment
//! profile, application configuration, the explicit runtime context handed
//! to components that would otherwise reach for ambient host state, and
//! telemetry initialization.
//!
//! ## Example
//!
//! ```rust
//! use agrolink_core::{AppConfig, Environment, RuntimeContext};
//!
//! let config = AppConfig::default();
//! let ctx = RuntimeContext::new(Environment::Development, true);
//!
//! assert_eq!(config.recipient, "917397248359");
//! assert!(ctx.transport_warning().is_none());
//! ```

mod config;
mod context;
pub mod telemetry;

pub use config::{load_dotenv, AppConfig, ConfigError, Environment};
pub use context::RuntimeContext;
