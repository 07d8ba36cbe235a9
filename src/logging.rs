//! Structured logging set-up.
//!
//! Library code only emits `tracing` events. Binaries install a subscriber
//! once at start-up through [`init`].

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Errors raised while installing the log subscriber.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoggingError {
    /// The configured filter directive does not parse.
    #[error("invalid log filter '{filter}': {reason}")]
    InvalidFilter {
        /// The rejected directive.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("a global log subscriber is already installed")]
    AlreadyInitialised,
}

/// Builds the effective filter: `RUST_LOG` when set, else `config.filter`.
///
/// # Errors
///
/// Returns [`LoggingError::InvalidFilter`] when the configured directive is
/// malformed.
pub fn filter_for(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.filter).map_err(|err| LoggingError::InvalidFilter {
        filter: config.filter.clone(),
        reason: err.to_string(),
    })
}

/// Installs the global `fmt` subscriber, writing to stderr.
///
/// # Errors
///
/// Returns [`LoggingError`] when the filter is invalid or a subscriber has
/// already been installed.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = filter_for(config)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialised)
}
