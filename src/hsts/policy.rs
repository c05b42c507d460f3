//! Header parsing and the preload decision.

use std::num::IntErrorKind;
use std::sync::LazyLock;

use regex::Regex;

use super::types::{HstsVerdict, IncompatibleReason};
use crate::config::{DIRECTIVE_INCLUDE_SUBDOMAINS, DIRECTIVE_PRELOAD, HSTS_PRELOAD_MIN_MAX_AGE};

// ASCII digits only; `\d` in `regex` also matches other Unicode digits.
static MAX_AGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"max-age=([0-9]+)").expect("max-age pattern is valid"));

/// Directives extracted from one `Strict-Transport-Security` value.
///
/// Matching is deliberately loose: `max-age` is the first `max-age=<digits>`
/// anywhere in the value, and the two flags are case-sensitive substring
/// tests. A value such as `max-age=31536000; preloaded` therefore counts as
/// having `preload`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HstsPolicy {
    /// Parsed `max-age`; `None` when no `max-age=<digits>` is present
    pub max_age: Option<u64>,
    pub include_subdomains: bool,
    pub preload: bool,
}

impl HstsPolicy {
    /// Parses a raw header value.
    ///
    /// A digit run too large for `u64` saturates to `u64::MAX`, so absurdly
    /// long lifetimes still pass the minimum check.
    pub fn parse(header: &str) -> Self {
        let max_age = MAX_AGE_RE
            .captures(header)
            .and_then(|caps| caps.get(1))
            .and_then(|digits| parse_max_age(digits.as_str()));

        Self {
            max_age,
            include_subdomains: header.contains(DIRECTIVE_INCLUDE_SUBDOMAINS),
            preload: header.contains(DIRECTIVE_PRELOAD),
        }
    }

    /// First unmet requirement, in priority order.
    pub fn first_failure(&self) -> Option<IncompatibleReason> {
        match self.max_age {
            Some(age) if age >= HSTS_PRELOAD_MIN_MAX_AGE => {}
            _ => return Some(IncompatibleReason::MaxAgeTooShort),
        }
        if !self.include_subdomains {
            return Some(IncompatibleReason::MissingIncludeSubDomains);
        }
        if !self.preload {
            return Some(IncompatibleReason::MissingPreload);
        }
        None
    }
}

fn parse_max_age(digits: &str) -> Option<u64> {
    match digits.parse::<u64>() {
        Ok(age) => Some(age),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u64::MAX),
        Err(_) => None,
    }
}

/// Evaluates an optional header value for preload eligibility.
///
/// `None` means the response carried no `Strict-Transport-Security` header.
/// An empty value is treated the same way.
pub fn evaluate_header(header: Option<&str>) -> HstsVerdict {
    let header = match header {
        Some(value) if !value.is_empty() => value,
        _ => return HstsVerdict::Incompatible(IncompatibleReason::MissingHeader),
    };

    match HstsPolicy::parse(header).first_failure() {
        Some(reason) => HstsVerdict::Incompatible(reason),
        None => HstsVerdict::Compatible {
            header: header.to_string(),
        },
    }
}
