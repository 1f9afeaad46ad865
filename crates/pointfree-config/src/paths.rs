//! Where configuration files live.

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const PROJECT_FILE: &str = "pointfree.toml";
const LOCAL_FILE: &str = "pointfree.local.toml";

/// `~/.config/pointfree/config.toml`, or the platform's equivalent.
///
/// `None` when the platform has no notion of a home directory.
pub(crate) fn user_config_file() -> Option<PathBuf> {
    ProjectDirs::from("rs", "pointfree", "pointfree")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Files read from `project_dir`, lowest precedence first. The local file is
/// meant to stay out of version control.
pub(crate) fn project_config_files(project_dir: &Path) -> [PathBuf; 2] {
    [project_dir.join(PROJECT_FILE), project_dir.join(LOCAL_FILE)]
}
