//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, preload threshold)
//! - Fixed response messages
//! - Configuration types shared by the library and the CLI

mod constants;
mod messages;
mod types;

// Re-export all constants
pub use constants::*;
pub use messages::*;
pub use types::{Config, LogFormat, LogLevel};
