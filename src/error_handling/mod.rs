//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization and the HTTP server
//! - Categorization of transport failures (used for logging only)
//! - Formatting of error source chains into a single message
//!
//! Transport failures are never distinguished in the response body: every
//! DNS, connect, TLS or timeout failure is reported the same way. The
//! categories exist so operators can tell them apart in the logs.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, describe_error_chain};
pub use types::{InitializationError, ServerError, TransportErrorKind};
