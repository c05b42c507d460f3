//! The outbound request.
//!
//! One GET is issued per check. Redirects are not followed, no request body
//! is sent, and the response body is never read: the response is dropped as
//! soon as its headers have been inspected, which closes the connection.

mod checker;
mod headers;
mod types;

pub use checker::HstsChecker;
pub use types::CheckOutcome;
