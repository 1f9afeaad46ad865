//! Error types for the pointfree facade.

use pointfree_config::ConfigError;
use pointfree_types::EvalError;
use thiserror::Error;

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, PointfreeError>;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum PointfreeError {
    /// Applying a function failed.
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// A configuration file could not be read or was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Layered configuration loading failed.
    #[error(transparent)]
    Load(#[from] anyhow::Error),

    /// The logging filter could not be parsed.
    #[error("invalid logging filter {filter:?}: {message}")]
    Telemetry { filter: String, message: String },
}
