//! HSTS verdict types.

use crate::config::{
    MSG_COMPATIBLE, MSG_MAX_AGE_TOO_SHORT, MSG_MISSING_INCLUDE_SUBDOMAINS, MSG_MISSING_PRELOAD,
    MSG_NO_HSTS_HEADER,
};

/// Why a site does not qualify for preloading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncompatibleReason {
    /// No `Strict-Transport-Security` header at all
    MissingHeader,
    /// `max-age` absent or below the preload minimum
    MaxAgeTooShort,
    /// `includeSubDomains` absent
    MissingIncludeSubDomains,
    /// `preload` absent
    MissingPreload,
}

impl IncompatibleReason {
    /// Human-readable message returned to callers
    pub fn message(&self) -> &'static str {
        match self {
            IncompatibleReason::MissingHeader => MSG_NO_HSTS_HEADER,
            IncompatibleReason::MaxAgeTooShort => MSG_MAX_AGE_TOO_SHORT,
            IncompatibleReason::MissingIncludeSubDomains => MSG_MISSING_INCLUDE_SUBDOMAINS,
            IncompatibleReason::MissingPreload => MSG_MISSING_PRELOAD,
        }
    }

    /// Short code used in log lines
    pub fn code(&self) -> &'static str {
        match self {
            IncompatibleReason::MissingHeader => "missing_header",
            IncompatibleReason::MaxAgeTooShort => "max_age_too_short",
            IncompatibleReason::MissingIncludeSubDomains => "missing_include_subdomains",
            IncompatibleReason::MissingPreload => "missing_preload",
        }
    }
}

/// Outcome of evaluating a response's HSTS header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HstsVerdict {
    /// Every requirement is met; carries the raw header value verbatim
    Compatible {
        /// Raw `Strict-Transport-Security` value as served
        header: String,
    },
    /// The first requirement that failed
    Incompatible(IncompatibleReason),
}

impl HstsVerdict {
    pub fn is_compatible(&self) -> bool {
        matches!(self, HstsVerdict::Compatible { .. })
    }

    pub fn message(&self) -> &'static str {
        match self {
            HstsVerdict::Compatible { .. } => MSG_COMPATIBLE,
            HstsVerdict::Incompatible(reason) => reason.message(),
        }
    }

    /// Raw header value, present only for compatible verdicts
    pub fn header(&self) -> Option<&str> {
        match self {
            HstsVerdict::Compatible { header } => Some(header),
            HstsVerdict::Incompatible(_) => None,
        }
    }
}
