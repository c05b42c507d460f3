//! Error type definitions.

use std::net::SocketAddr;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for the HTTP endpoint.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The listener could not be bound.
    #[error("Failed to bind server to {addr}: {source}")]
    Bind {
        /// Address that was requested
        addr: SocketAddr,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configured CORS origin is not a valid header value.
    #[error("Invalid CORS origin: {0:?}")]
    InvalidCorsOrigin(String),

    /// The server stopped with an I/O error after binding.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Categories of transport failure.
///
/// Mirrors the predicates exposed by `reqwest::Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum TransportErrorKind {
    Builder,
    Redirect,
    Timeout,
    Connect,
    Request,
    Body,
    Decode,
    Other,
}

impl std::fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TransportErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportErrorKind::Builder => "request builder error",
            TransportErrorKind::Redirect => "redirect error",
            TransportErrorKind::Timeout => "timeout",
            TransportErrorKind::Connect => "connect error",
            TransportErrorKind::Request => "request error",
            TransportErrorKind::Body => "body error",
            TransportErrorKind::Decode => "decode error",
            TransportErrorKind::Other => "other error",
        }
    }
}
