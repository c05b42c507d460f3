//! The HSTS checker.

use std::sync::Arc;

use log::{debug, info, warn};

use super::headers::extract_hsts_header;
use super::types::CheckOutcome;
use crate::config::{Config, MSG_REQUEST_ERROR_PREFIX};
use crate::error_handling::{categorize_reqwest_error, describe_error_chain, InitializationError};
use crate::hsts::{evaluate_header, HstsVerdict};
use crate::initialization::init_client;

/// Fetches a URL and evaluates its `Strict-Transport-Security` header.
///
/// Holds no per-request state; a single checker can be cloned and shared by
/// every request the server handles.
#[derive(Clone)]
pub struct HstsChecker {
    client: Arc<reqwest::Client>,
}

impl HstsChecker {
    /// Builds a checker with a client configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self::with_client(init_client(config)?))
    }

    /// Uses an existing client.
    ///
    /// The client should have redirects disabled; see [`init_client`].
    pub fn with_client(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }

    /// Performs the check.
    ///
    /// Issues one GET and resolves as soon as response headers arrive or the
    /// transport fails, whichever happens first. Transport failures are
    /// returned as [`CheckOutcome::TransportError`], never propagated.
    ///
    /// The remote status code is not consulted: a 301 or 500 carrying a
    /// qualifying header is still reported as compatible.
    pub async fn evaluate(&self, url: &str) -> CheckOutcome {
        info!("Checking HSTS for {url}");

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                let message = format!("{}: {}", MSG_REQUEST_ERROR_PREFIX, describe_error_chain(&e));
                warn!(
                    "HSTS check for {} failed ({}): {}",
                    url,
                    categorize_reqwest_error(&e),
                    message
                );
                return CheckOutcome::TransportError(message);
            }
        };

        debug!("{} responded with status {}", url, response.status());
        let header = extract_hsts_header(response.headers());
        drop(response);

        let verdict = evaluate_header(header.as_deref());
        match &verdict {
            HstsVerdict::Compatible { .. } => info!("{url} is preload compatible"),
            HstsVerdict::Incompatible(reason) => {
                info!("{} is not preload compatible ({})", url, reason.code())
            }
        }
        CheckOutcome::Verdict(verdict)
    }
}
