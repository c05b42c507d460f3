//! Response header extraction.

use reqwest::header::{HeaderMap, STRICT_TRANSPORT_SECURITY};

/// Returns the `Strict-Transport-Security` value(s) from a response.
///
/// Header names are matched case-insensitively by `HeaderMap`. When the
/// header is repeated, the values are joined with `", "` in the order they
/// were received. Non-UTF-8 bytes are replaced rather than dropping the
/// header.
pub fn extract_hsts_header(headers: &HeaderMap) -> Option<String> {
    let values: Vec<String> = headers
        .get_all(STRICT_TRANSPORT_SECURITY)
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}
