//! slack-notifier
//!
//! Posts plain-text messages to a Slack incoming webhook.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod logger;
pub mod notifier;

pub use crate::config::ConfigError;
pub use crate::notifier::{NotificationClient, NotifyError};
