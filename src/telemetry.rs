//! Tracing subscriber bootstrap.

use crate::config::TaskflowConfig;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors returned while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter '{filter}': {reason}")]
    InvalidFilter {
        /// The rejected directive.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInstalled(String),
}

/// Installs a formatted `tracing` subscriber filtered by `filter`.
///
/// `filter` uses `EnvFilter` directive syntax, for example
/// `info,taskflow::board=debug`.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] for an unparsable directive and
/// [`TelemetryError::AlreadyInstalled`] when a global subscriber exists.
pub fn init_tracing(filter: &str) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_new(filter).map_err(|err| TelemetryError::InvalidFilter {
        filter: filter.to_owned(),
        reason: err.to_string(),
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .map_err(|err| TelemetryError::AlreadyInstalled(err.to_string()))
}

/// Installs the subscriber using the configured filter.
///
/// # Errors
///
/// See [`init_tracing`].
pub fn init_from_config(config: &TaskflowConfig) -> Result<(), TelemetryError> {
    init_tracing(config.log_filter())
}
