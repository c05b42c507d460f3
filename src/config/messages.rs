//! Fixed response messages.

// Verdict messages returned to callers. These strings are part of the
// response contract and must not change.
/// No `Strict-Transport-Security` header was served
pub const MSG_NO_HSTS_HEADER: &str = "Site does not serve any HSTS headers.";
/// `max-age` missing or below [`crate::config::HSTS_PRELOAD_MIN_MAX_AGE`]
pub const MSG_MAX_AGE_TOO_SHORT: &str = "HSTS max-age is less than 10886400.";
/// `includeSubDomains` directive missing
pub const MSG_MISSING_INCLUDE_SUBDOMAINS: &str = "HSTS header does not include all subdomains.";
/// `preload` directive missing
pub const MSG_MISSING_PRELOAD: &str = "HSTS header does not contain the preload directive.";
/// All preload requirements satisfied
pub const MSG_COMPATIBLE: &str = "Site is compatible with the HSTS preload list!";

/// Prefix for transport failure messages
pub const MSG_REQUEST_ERROR_PREFIX: &str = "Error making request";
/// No `url` parameter was supplied to the endpoint
pub const MSG_NO_URL: &str = "No URL specified";
/// The supplied `url` parameter could not be used
pub const MSG_INVALID_URL_PREFIX: &str = "Invalid URL";
