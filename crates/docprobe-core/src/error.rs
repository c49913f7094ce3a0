//! Error types and handling for docprobe-core operations.
//!
//! Only a handful of things can actually fail here. Probe failures are not
//! errors at all: they collapse to "not reachable" inside [`crate::probe`], and
//! an exhausted candidate list is reported as
//! [`ResolutionResult::NotFound`](crate::ResolutionResult::NotFound) data.
//!
//! ## Error Categories
//!
//! - **Invalid input**: blank component names, rejected before normalization
//! - **Network**: the HTTP client could not be constructed
//! - **Configuration**: unreadable or invalid config files and overrides
//!
//! ```rust
//! use docprobe_core::{ComponentName, Error};
//!
//! match ComponentName::parse("   ") {
//!     Err(Error::InvalidInput(msg)) => eprintln!("rejected: {msg}"),
//!     Err(other) => eprintln!("unexpected: {other}"),
//!     Ok(_) => unreachable!(),
//! }
//! ```

use thiserror::Error;

/// The main error type for docprobe-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The component name was empty or whitespace-only.
    ///
    /// Raised at the boundary, before any normalization or probing happens.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network setup failed.
    ///
    /// Only produced while building the HTTP client. Individual probe
    /// requests never surface errors.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration is invalid or inaccessible.
    ///
    /// ## Common Causes
    ///
    /// - An unreadable config file
    /// - Invalid TOML syntax in the config file
    /// - A zero timeout or zero concurrency
    /// - An environment override that is not a number
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
