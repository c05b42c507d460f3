//! HSTS preload eligibility.
//!
//! Pure evaluation of a `Strict-Transport-Security` header value against the
//! preload list requirements:
//! - `max-age` of at least 10886400 seconds
//! - the `includeSubDomains` directive
//! - the `preload` directive
//!
//! Checks run in that order and stop at the first failure, so a header
//! missing several directives reports only the first one.

mod policy;
mod types;

pub use policy::{evaluate_header, HstsPolicy};
pub use types::{HstsVerdict, IncompatibleReason};
