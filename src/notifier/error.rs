//! Per-call send failures

use reqwest::StatusCode;
use thiserror::Error;

/// Why a single send did not go through
///
/// These never escape [`NotificationClient::notify`](super::NotificationClient::notify);
/// they are logged there and collapsed to `false`.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The payload could not be encoded
    #[error("Failed to encode Slack payload: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Connection refused, DNS failure, timeout, broken response
    #[error("Failed to reach Slack webhook: {0}")]
    Transport(reqwest::Error),

    /// The webhook answered with a non-2xx status
    #[error("Failed to send Slack notification: {status}")]
    Response {
        /// Status returned by the webhook
        status: StatusCode,
    },
}

impl NotifyError {
    /// HTTP status of the failed response, if one was received
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            NotifyError::Response { status } => Some(*status),
            NotifyError::Transport(e) => e.status(),
            NotifyError::Serialize(_) => None,
        }
    }
}

// The webhook path is a credential; reqwest would print it in full.
impl From<reqwest::Error> for NotifyError {
    fn from(error: reqwest::Error) -> Self {
        NotifyError::Transport(error.without_url())
    }
}

/// Type alias for Result with NotifyError
pub type NotifyResult<T> = Result<T, NotifyError>;
