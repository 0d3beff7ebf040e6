//! Configuration error types

use thiserror::Error;

/// Configuration error types
///
/// Every variant is fatal: a [`NotificationClient`](crate::notifier::NotificationClient)
/// is never handed out when one of these is raised.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required setting is absent or empty
    #[error("{name} is not defined in the configuration")]
    MissingSetting {
        /// Name of the missing setting
        name: String,
    },

    /// Setting is present but not a usable webhook URL
    #[error("{name} is not a valid webhook URL: {reason}")]
    InvalidUrl {
        /// Name of the offending setting
        name: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// The HTTP transport could not be initialized
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Generic configuration error from config crate
    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

impl ConfigError {
    /// Create a new missing setting error
    pub fn missing<S: Into<String>>(name: S) -> Self {
        ConfigError::MissingSetting { name: name.into() }
    }

    /// Create a new invalid URL error
    pub fn invalid_url<S: Into<String>>(name: S, reason: S) -> Self {
        ConfigError::InvalidUrl {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a new file not found error
    pub fn file_not_found<S: Into<String>>(path: S) -> Self {
        ConfigError::FileNotFound(path.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_setting_names_the_key() {
        let err = ConfigError::missing("SLACK_WEBHOOK_URL");
        assert_eq!(
            err.to_string(),
            "SLACK_WEBHOOK_URL is not defined in the configuration"
        );
    }

    #[test]
    fn test_invalid_url_message() {
        let err = ConfigError::invalid_url("SLACK_WEBHOOK_URL", "relative URL without a base");
        let msg = err.to_string();
        assert!(msg.contains("SLACK_WEBHOOK_URL"));
        assert!(msg.contains("relative URL without a base"));
    }
}
