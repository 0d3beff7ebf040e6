//! Slack webhook notifier.
//!
//! [`NotificationClient`] is the whole public surface: build it once from
//! configuration, then call [`NotificationClient::notify`] as often as needed.

mod client;
mod error;
mod message;
mod transport;

pub use client::NotificationClient;
pub use error::{NotifyError, NotifyResult};
pub use message::OutboundMessage;
pub use transport::{CONNECT_TIMEOUT, REQUEST_TIMEOUT};
