//! HTTP transport shared by every send of one client

use std::time::Duration;

/// Overall bound on a single webhook request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Bound on establishing the TCP/TLS connection
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the HTTP client a [`NotificationClient`](super::NotificationClient) owns
///
/// Cloning the returned client shares its connection pool.
///
/// # Errors
/// Fails if the TLS backend cannot be initialized.
pub fn build_http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        // Timeouts
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        // Connection pooling
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}
