//! Error categorization and message formatting.

use std::error::Error;

use super::types::TransportErrorKind;

/// Categorizes a `reqwest::Error` into a [`TransportErrorKind`].
///
/// Only used for log output.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> TransportErrorKind {
    if error.is_builder() {
        TransportErrorKind::Builder
    } else if error.is_redirect() {
        TransportErrorKind::Redirect
    } else if error.is_timeout() {
        TransportErrorKind::Timeout
    } else if error.is_connect() {
        TransportErrorKind::Connect
    } else if error.is_request() {
        TransportErrorKind::Request
    } else if error.is_body() {
        TransportErrorKind::Body
    } else if error.is_decode() {
        TransportErrorKind::Decode
    } else {
        TransportErrorKind::Other
    }
}

/// Renders an error and all of its sources as `outer: inner: root`.
///
/// `reqwest::Error`'s `Display` only prints the outermost layer
/// ("error sending request for url (...)"); the resolver or TLS text that
/// explains the failure lives further down the chain. Consecutive duplicate
/// messages are skipped.
pub fn describe_error_chain(error: &(dyn Error + 'static)) -> String {
    let mut parts: Vec<String> = vec![error.to_string()];
    let mut source = error.source();
    while let Some(cause) = source {
        let msg = cause.to_string();
        if parts.last() != Some(&msg) {
            parts.push(msg);
        }
        source = cause.source();
    }
    parts.join(": ")
}
