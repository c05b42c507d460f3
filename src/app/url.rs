//! URL validation and normalization utilities.

use log::warn;

use crate::config::MAX_URL_LENGTH;

/// Validates and normalizes a target URL.
///
/// Trims surrounding whitespace and adds an `https://` prefix if no scheme
/// is present, then validates that the URL is syntactically valid, has a host
/// and uses the http or https scheme. Rejects URLs longer than
/// `MAX_URL_LENGTH`. Logs a warning and returns `None` if the URL is unusable.
///
/// # Returns
///
/// `Some(normalized_url)` if the URL should be checked, `None` otherwise.
pub fn validate_and_normalize_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    // Normalize: add https:// prefix if missing
    let normalized = if !url.starts_with("http://") && !url.starts_with("https://") {
        format!("https://{url}")
    } else {
        url.to_string()
    };

    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            normalized.len(),
            MAX_URL_LENGTH,
            normalized.chars().take(50).collect::<String>()
        );
        return None;
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) => match (parsed.scheme(), parsed.host_str()) {
            ("http" | "https", Some(host)) if !host.is_empty() => Some(normalized),
            _ => {
                warn!("Rejecting unsupported URL: {url}");
                None
            }
        },
        Err(_) => {
            warn!("Rejecting invalid URL: {url}");
            None
        }
    }
}
