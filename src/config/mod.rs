//! Configuration for slack-notifier
//!
//! The only required setting is the webhook URL (`SLACK_WEBHOOK_URL`). It is
//! read through a [`ConfigProvider`] so callers choose where it comes from:
//! the process environment, a layered TOML + environment setup, or an
//! in-memory map.

pub mod error;
pub mod loader;
pub mod provider;

pub use error::ConfigError;
pub use loader::{ConfigLoader, LayeredConfig};
pub use provider::{ConfigProvider, EnvProvider, WEBHOOK_URL_KEY, require};
