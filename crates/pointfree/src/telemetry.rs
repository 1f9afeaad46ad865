//! Logging setup.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the application. [`init`] is a convenience for applications and tests
//! that want the configured filter applied to a plain fmt subscriber.

use pointfree_config::LoggingConfig;
use tracing_subscriber::EnvFilter;

use crate::error::{PointfreeError, Result};

/// Parses the configured filter directive.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.filter).map_err(|e| PointfreeError::Telemetry {
        filter: config.filter.clone(),
        message: e.to_string(),
    })
}

/// Installs a global fmt subscriber for `config`.
///
/// Returns `Ok(false)` when a global subscriber was already installed, so
/// calling this more than once is harmless.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    let filter = env_filter(config)?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .try_init()
        .is_ok();
    Ok(installed)
}
