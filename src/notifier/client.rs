//! Slack incoming-webhook client.
//!
//! Construct once at startup, then share it with whatever needs to send.

use std::fmt;

use reqwest::Url;
use reqwest::header::CONTENT_TYPE;

use super::error::{NotifyError, NotifyResult};
use super::message::OutboundMessage;
use super::transport::build_http_client;
use crate::config::{ConfigError, ConfigProvider, EnvProvider, WEBHOOK_URL_KEY, require};

/// Client for a single Slack incoming webhook
///
/// The webhook URL is fixed at construction and never changes. A client that
/// exists always holds a valid URL; anything else fails in the constructor.
/// Cloning is cheap and shares the underlying connection pool, and `&self`
/// methods may be called concurrently.
///
/// # Example
/// ```ignore
/// let slack = NotificationClient::from_env()?;
/// if !slack.notify("deploy finished").await {
///     // already logged; decide whether it matters
/// }
/// ```
#[derive(Clone)]
pub struct NotificationClient {
    endpoint: Url,
    http: reqwest::Client,
}

impl NotificationClient {
    /// Creates a client for `endpoint_url`
    ///
    /// # Errors
    /// - [`ConfigError::MissingSetting`] if the URL is empty
    /// - [`ConfigError::InvalidUrl`] if it is not an absolute http(s) URL
    /// - [`ConfigError::HttpClient`] if the transport cannot be built
    pub fn new(endpoint_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let raw = endpoint_url.as_ref().trim();
        if raw.is_empty() {
            return Err(ConfigError::missing(WEBHOOK_URL_KEY));
        }

        let endpoint = Url::parse(raw)
            .map_err(|e| ConfigError::invalid_url(WEBHOOK_URL_KEY.to_string(), e.to_string()))?;

        if endpoint.scheme() != "https" && endpoint.scheme() != "http" {
            return Err(ConfigError::invalid_url(
                WEBHOOK_URL_KEY,
                "URL must use http or https protocol",
            ));
        }

        let http = build_http_client()?;
        Ok(Self { endpoint, http })
    }

    /// Creates a client from the `SLACK_WEBHOOK_URL` setting of `provider`
    pub fn from_provider<P: ConfigProvider + ?Sized>(provider: &P) -> Result<Self, ConfigError> {
        let url = require(provider, WEBHOOK_URL_KEY)?;
        Self::new(url)
    }

    /// Creates a client from the `SLACK_WEBHOOK_URL` environment variable
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_provider(&EnvProvider)
    }

    /// The configured webhook URL
    pub fn endpoint_url(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Posts `text` to the webhook and reports why it failed, if it did
    ///
    /// Only the response status is inspected; the body is ignored.
    pub async fn send(&self, text: &str) -> NotifyResult<()> {
        let body = OutboundMessage::new(text).to_body()?;

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Response { status });
        }

        Ok(())
    }

    /// Posts `text` to the webhook
    ///
    /// Returns `true` when the webhook answered 2xx. Every failure is logged
    /// and turned into `false`; nothing is retried.
    pub async fn notify(&self, text: &str) -> bool {
        match self.send(text).await {
            Ok(()) => {
                tracing::debug!(
                    target: "slack_notifier::notifier",
                    host = self.endpoint.host_str(),
                    "Slack notification sent"
                );
                true
            }
            Err(error) => {
                tracing::error!(
                    target: "slack_notifier::notifier",
                    error = %error,
                    status = error.status().map(|s| s.as_u16()),
                    "Error sending Slack notification"
                );
                false
            }
        }
    }
}

// The path of a webhook URL is its secret.
impl fmt::Debug for NotificationClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = format!(
            "{}://{}/<redacted>",
            self.endpoint.scheme(),
            self.endpoint.host_str().unwrap_or_default()
        );
        f.debug_struct("NotificationClient")
            .field("endpoint", &redacted)
            .finish_non_exhaustive()
    }
}
