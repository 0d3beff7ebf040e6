//! Configuration providers
//!
//! A provider maps a setting name to its value. The notifier only ever asks
//! for one setting, but reading it through a trait keeps the process
//! environment out of tests.

use std::collections::HashMap;

use crate::config::error::ConfigError;

/// Name of the setting holding the Slack incoming webhook URL
pub const WEBHOOK_URL_KEY: &str = "SLACK_WEBHOOK_URL";

/// Source of named configuration values
pub trait ConfigProvider: Send + Sync {
    /// Returns the raw value for `key`, if the source defines one
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads settings straight from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvProvider;

impl ConfigProvider for EnvProvider {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ConfigProvider for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Fetch a required setting
///
/// Surrounding whitespace is trimmed. A value that is absent or empty after
/// trimming is reported as [`ConfigError::MissingSetting`] naming `key`.
pub fn require<P: ConfigProvider + ?Sized>(provider: &P, key: &str) -> Result<String, ConfigError> {
    provider
        .get(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::missing(key))
}
