//! Request pipeline.
//!
//! Wraps a check function with input extraction and response shaping:
//!
//! ```text
//! raw `url` param -> validate/normalize -> core(url) -> ApiResponse
//! ```
//!
//! The core is passed in as a plain async function, so the same pipeline
//! backs the HTTP handler, the `check` subcommand and the tests.

use std::future::Future;

use axum::http::StatusCode;
use log::debug;

use super::types::ApiResponse;
use crate::app::validate_and_normalize_url;
use crate::config::{MSG_INVALID_URL_PREFIX, MSG_NO_URL};
use crate::fetch::CheckOutcome;

/// Runs `core` against `raw_url` and shapes the outcome.
///
/// - missing or blank input: `400 {"error":"No URL specified"}`
/// - unusable input: `400 {"error":"Invalid URL: <input>"}`
/// - otherwise the outcome of `core`, converted by `ApiResponse::from`
///
/// `core` is not called when the input is rejected.
pub async fn run<F, Fut>(raw_url: Option<&str>, core: F) -> ApiResponse
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = CheckOutcome>,
{
    let raw = match raw_url.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return ApiResponse::error(StatusCode::BAD_REQUEST, MSG_NO_URL),
    };

    let Some(url) = validate_and_normalize_url(raw) else {
        return ApiResponse::error(
            StatusCode::BAD_REQUEST,
            format!("{}: {}", MSG_INVALID_URL_PREFIX, raw),
        );
    };

    let response = ApiResponse::from(core(url).await);
    debug!("Responding with status {}", response.status);
    response
}
