//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts, size limits, and the HSTS preload requirements.

use std::time::Duration;

/// Minimum `max-age` (in seconds) accepted by the HSTS preload list.
///
/// 10886400 seconds is 126 days (18 weeks).
pub const HSTS_PRELOAD_MIN_MAX_AGE: u64 = 10_886_400;

/// Directive that must appear in the header for all subdomains to be covered.
pub const DIRECTIVE_INCLUDE_SUBDOMAINS: &str = "includeSubDomains";
/// Directive that signals consent to preloading.
pub const DIRECTIVE_PRELOAD: &str = "preload";

// Network operation timeouts
/// Default total request timeout in seconds (connect + TLS + response headers)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout in seconds
///
/// Applied separately from the total timeout so unreachable hosts fail fast.
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
/// Convenience form of [`TCP_CONNECT_TIMEOUT_SECS`].
pub const TCP_CONNECT_TIMEOUT: Duration = Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS);

/// Default User-Agent string for outbound requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("hsts_check/", env!("CARGO_PKG_VERSION"));

/// Maximum URL length (2048 characters).
/// This matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Server defaults
/// Default address the HTTP endpoint binds to
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
/// Default port for the HTTP endpoint
pub const DEFAULT_PORT: u16 = 3000;
/// Default value of the `Access-Control-Allow-Origin` response header
pub const DEFAULT_CORS_ORIGIN: &str = "*";

/// Route serving the HSTS check
pub const CHECK_HSTS_ROUTE: &str = "/api/check-hsts";
/// Liveness route
pub const HEALTH_ROUTE: &str = "/health";
