//! hsts_check library: HSTS preload eligibility checks.
//!
//! Fetches a URL once, reads its `Strict-Transport-Security` response header
//! and reports whether the site qualifies for the browser HSTS preload list
//! (`max-age >= 10886400`, `includeSubDomains` and `preload`).
//!
//! # Example
//!
//! ```no_run
//! use hsts_check::{check_url, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let response = check_url(&Config::default(), "example.com").await?;
//! println!("{} {}", response.status, response.to_json());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

mod app;
pub mod cli;
pub mod config;
mod error_handling;
mod fetch;
pub mod hsts;
pub mod initialization;
pub mod server;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, ServerError, TransportErrorKind};
pub use fetch::{CheckOutcome, HstsChecker};
pub use hsts::{evaluate_header, HstsVerdict, IncompatibleReason};
pub use server::ApiResponse;

/// Checks one URL through the same pipeline the HTTP endpoint uses.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the HTTP client cannot be
/// built. Transport failures are not errors here; they are reported in the
/// returned `ApiResponse` with status 500.
pub async fn check_url(config: &Config, url: &str) -> Result<ApiResponse, InitializationError> {
    let checker = HstsChecker::new(config)?;
    Ok(server::pipeline::run(Some(url), |url| async move { checker.evaluate(&url).await }).await)
}
