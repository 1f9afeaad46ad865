//! Configuration management for pointfree
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. Environment variables (PF_* prefix, `__` between sections and keys)
//! 2. pointfree.local.toml (gitignored, local overrides)
//! 3. pointfree.toml (git-tracked, project config)
//! 4. ~/.config/pointfree/config.toml (user defaults)
//! 5. Built-in defaults (lowest precedence)

use pointfree_types::ExcessArgs;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;

/// Main pointfree configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointfreeConfig {
    pub curry: CurryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurryConfig {
    /// What saturated curried calls do with arguments beyond the arity.
    pub excess_args: ExcessArgs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub filter: String,
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            ansi: true,
        }
    }
}

impl PointfreeConfig {
    /// Load configuration from default locations
    pub fn load() -> anyhow::Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Read a single TOML file, without layering.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Create a strict configuration: excess arguments are errors
    pub fn strict() -> Self {
        Self {
            curry: CurryConfig {
                excess_args: ExcessArgs::Reject,
            },
            ..Default::default()
        }
    }

    /// Create a debugging configuration: every partial application is logged
    pub fn debugging() -> Self {
        Self {
            logging: LoggingConfig {
                filter: "pointfree=trace,pointfree_kernel=trace".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = PointfreeConfig::default();
        assert_eq!(config.curry.excess_args, ExcessArgs::Forward);
        assert_eq!(config.logging.filter, "warn");
        assert!(config.logging.ansi);
    }

    #[test]
    fn test_strict_config() {
        let config = PointfreeConfig::strict();
        assert_eq!(config.curry.excess_args, ExcessArgs::Reject);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_debugging_config() {
        let config = PointfreeConfig::debugging();
        assert!(config.logging.filter.contains("trace"));
        assert_eq!(config.curry.excess_args, ExcessArgs::Forward);
    }

    #[test]
    fn test_from_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("custom.toml");
        fs::write(&path, "[curry]\nexcess_args = \"truncate\"\n").expect("Failed to write config");

        let config = PointfreeConfig::from_file(&path).expect("Failed to read config");
        assert_eq!(config.curry.excess_args, ExcessArgs::Truncate);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_from_file_reports_missing_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let err = PointfreeConfig::from_file(temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn test_from_file_reports_unknown_policy() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "[curry]\nexcess_args = \"sometimes\"\n").expect("Failed to write config");

        let err = PointfreeConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_empty_filter_is_invalid() {
        let mut config = PointfreeConfig::default();
        config.logging.filter = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
