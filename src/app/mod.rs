//! Input handling shared by the HTTP endpoint and the CLI.

pub mod url;

// Re-export public API
pub use url::validate_and_normalize_url;
