//! Path resolution for library directories.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a library path from a config file to an absolute path.
///
/// - `~` and `~/...` expand to the home directory
/// - relative paths are joined onto `config_dir`
/// - absolute paths are kept
///
/// Existing paths are canonicalized. Missing paths are returned as joined, so validation
/// can report them instead of loading failing outright.
pub fn resolve_library_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        config_dir.join(&expanded)
    };

    Ok(absolute.canonicalize().unwrap_or(absolute))
}

/// Expands a leading `~` to the home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        return Ok(home_dir()?.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}
