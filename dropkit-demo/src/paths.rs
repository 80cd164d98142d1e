//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "dropkit";
const APPLICATION: &str = "dropkit-demo";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory, home of the log file.
///
/// - Linux: `$XDG_CACHE_HOME/dropkit-demo` or `~/.cache/dropkit-demo`
/// - macOS: `~/Library/Caches/dev.dropkit.dropkit-demo`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/dropkit-demo` or `~/.config/dropkit-demo`
/// - macOS: `~/Library/Application Support/dev.dropkit.dropkit-demo`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the default dropdown configuration.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("dropdown.json"))
}

/// Get the path to the log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("latest.log"))
}
