//! Check outcome type.

use crate::hsts::HstsVerdict;

/// Result of one check.
///
/// Exactly one of the two is produced per call. A policy-negative verdict is
/// not an error: the site answered and simply does not qualify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The site responded and its header was evaluated
    Verdict(HstsVerdict),
    /// The exchange could not be completed (DNS, connect, TLS, timeout, ...)
    TransportError(String),
}

impl CheckOutcome {
    pub fn is_transport_error(&self) -> bool {
        matches!(self, CheckOutcome::TransportError(_))
    }
}

impl From<HstsVerdict> for CheckOutcome {
    fn from(verdict: HstsVerdict) -> Self {
        CheckOutcome::Verdict(verdict)
    }
}
