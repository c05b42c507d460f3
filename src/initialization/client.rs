//! HTTP client initialization.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::{Config, TCP_CONNECT_TIMEOUT};

/// Initializes the HTTP client used for HSTS checks.
///
/// Creates a `reqwest::Client` configured with:
/// - Redirects disabled, so the header of the first response is the one evaluated
/// - Total timeout from config (connect, TLS handshake and response headers)
/// - TCP connect timeout of `TCP_CONNECT_TIMEOUT_SECS`
/// - User-Agent from config
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(config.timeout())
        .connect_timeout(TCP_CONNECT_TIMEOUT.min(config.timeout()))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
