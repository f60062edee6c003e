//! Configuration file parsing.
//!
//! Parses individual `.sysman.toml` files into `RawConfig` values that keep every field
//! optional until merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Configuration as written in a single TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, discovery stops here and parent and global configs are ignored.
    pub root: Option<bool>,
    /// `[library]` section.
    pub library: Option<RawLibrarySettings>,
    /// `[search]` section.
    pub search: Option<RawSearchSettings>,
}

/// Raw `[library]` section.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawLibrarySettings {
    /// Manual directories. Accepts a single string or an array.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub paths: Option<Vec<String>>,
    /// Id of the manual to use when none is named.
    pub default: Option<String>,
}

/// Raw `[search]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Threshold for single-category filtering.
    pub live_min_score: Option<f64>,
    /// Threshold for cross-category search.
    pub advanced_min_score: Option<f64>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string. `path` is only used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration without path context, for checking templates.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Unreadable or unparseable files are treated as non-root; the error surfaces later when
/// the file is loaded properly.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
