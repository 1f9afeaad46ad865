//! Layered configuration loading.

use crate::{PointfreeConfig, paths};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Merges defaults, config files and environment overrides into a
/// [`PointfreeConfig`].
///
/// Later layers win, key by key:
///
/// 1. built-in defaults
/// 2. `~/.config/pointfree/config.toml`
/// 3. `pointfree.toml` in the project directory
/// 4. `pointfree.local.toml` in the project directory
/// 5. `PF_SECTION__KEY` environment variables, e.g. `PF_CURRY__EXCESS_ARGS=reject`
///
/// Keys contain underscores, so sections and keys are separated by `__`.
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    user_config: bool,
    env_vars: Option<config::Map<String, String>>,
}

impl ConfigLoader {
    /// Loader rooted at the current directory, reading the process environment.
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "PF".to_string(),
            user_config: true,
            env_vars: None,
        }
    }

    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Replaces the `PF` prefix of environment overrides.
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Reads environment overrides from `vars` instead of the process
    /// environment. Names still need the configured prefix.
    pub fn with_env_vars<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.env_vars = Some(
            vars.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Skips the per-user config file.
    pub fn without_user_config(mut self) -> Self {
        self.user_config = false;
        self
    }

    /// Loads and validates the merged configuration.
    pub fn load(self) -> Result<PointfreeConfig> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&PointfreeConfig::default())?);

        let user_file = if self.user_config {
            paths::user_config_file()
        } else {
            None
        };
        for file in user_file
            .into_iter()
            .chain(paths::project_config_files(&self.project_dir))
        {
            builder = builder.add_source(
                config::File::from(file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(self.env_vars),
        );

        let pointfree_config: PointfreeConfig = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        pointfree_config
            .validate()
            .context("Configuration failed validation")?;

        Ok(pointfree_config)
    }

    /// Like [`load`](Self::load), falling back to defaults on any error.
    pub fn load_or_default(self) -> PointfreeConfig {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointfree_types::ExcessArgs;
    use std::fs;
    use tempfile::tempdir;

    /// Isolated from the user config and the process environment.
    fn loader(project_dir: &Path, env_vars: &[(&str, &str)]) -> ConfigLoader {
        ConfigLoader::new()
            .with_project_dir(project_dir)
            .without_user_config()
            .with_env_vars(env_vars.iter().copied())
    }

    #[test]
    fn test_load_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = loader(temp_dir.path(), &[])
            .load()
            .expect("Failed to load config");

        assert_eq!(config, PointfreeConfig::default());
    }

    #[test]
    fn test_load_project_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        let config_content = r#"
[curry]
excess_args = "reject"

[logging]
filter = "pointfree=debug"
ansi = false
"#;
        fs::write(project_dir.join("pointfree.toml"), config_content)
            .expect("Failed to write config");

        let config = loader(project_dir, &[])
            .load()
            .expect("Failed to load config");

        assert_eq!(config.curry.excess_args, ExcessArgs::Reject);
        assert_eq!(config.logging.filter, "pointfree=debug");
        assert!(!config.logging.ansi);
    }

    #[test]
    fn test_layer_precedence() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("pointfree.toml"),
            r#"
[curry]
excess_args = "reject"

[logging]
filter = "info"
ansi = false
"#,
        )
        .expect("Failed to write project config");

        fs::write(
            project_dir.join("pointfree.local.toml"),
            r#"
[curry]
excess_args = "truncate"

[logging]
filter = "pointfree=debug"
"#,
        )
        .expect("Failed to write local config");

        let config = loader(project_dir, &[("PF_LOGGING__FILTER", "pointfree=trace")])
            .load()
            .expect("Failed to load config");

        // local beats project, env beats local, untouched keys survive
        assert_eq!(config.curry.excess_args, ExcessArgs::Truncate);
        assert_eq!(config.logging.filter, "pointfree=trace");
        assert!(!config.logging.ansi);
    }

    #[test]
    fn test_env_overrides() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = loader(
            temp_dir.path(),
            &[
                ("PF_CURRY__EXCESS_ARGS", "truncate"),
                ("PF_LOGGING__ANSI", "false"),
            ],
        )
        .load()
        .expect("Failed to load config");

        assert_eq!(config.curry.excess_args, ExcessArgs::Truncate);
        assert!(!config.logging.ansi);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_env_prefix() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let vars = [
            ("PF_CURRY__EXCESS_ARGS", "reject"),
            ("APP_CURRY__EXCESS_ARGS", "truncate"),
        ];

        let config = loader(temp_dir.path(), &vars)
            .with_env_prefix("APP")
            .load()
            .expect("Failed to load config");

        assert_eq!(config.curry.excess_args, ExcessArgs::Truncate);
    }

    #[test]
    fn test_invalid_env_value_fails() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let result = loader(temp_dir.path(), &[("PF_CURRY__EXCESS_ARGS", "sometimes")]).load();

        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_project_config_fails() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("pointfree.toml"),
            "[logging]\nfilter = \"\"\n",
        )
        .expect("Failed to write config");

        assert!(loader(project_dir, &[]).load().is_err());
        assert_eq!(
            loader(project_dir, &[]).load_or_default(),
            PointfreeConfig::default()
        );
    }
}
