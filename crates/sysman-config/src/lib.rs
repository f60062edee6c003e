//! Configuration system for sysman.
//!
//! sysman uses TOML configuration files named `.sysman.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.sysman.toml` files found, then loading `~/.sysman.toml` as the global config with lowest
//! precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{RawConfig, RawLibrarySettings, RawSearchSettings, parse_config_file, parse_config_str};
pub use resolve::resolve_library_path;
use serde::{Deserialize, Serialize};
use sysman_search::{DEFAULT_ADVANCED_MIN_SCORE, DEFAULT_LIVE_MIN_SCORE, SearchParams};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Library directory used when no configuration names one, relative to the working directory.
pub const DEFAULT_LIBRARY_DIR: &str = "sysmanuals";

/// Merged configuration for sysman.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// `[library]` scalar settings.
    pub library: LibrarySettings,
    /// `[search]` settings.
    pub search: SearchSettings,
    /// Resolved library directories, highest precedence first.
    pub libraries: Vec<LibraryDir>,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
    /// Config files that contributed, highest precedence first.
    pub sources: Vec<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging every relevant `.sysman.toml`.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of files, highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Directories to load manuals from.
    ///
    /// Falls back to [`DEFAULT_LIBRARY_DIR`] under `cwd` when nothing is configured.
    pub fn library_dirs(&self, cwd: &Path) -> Vec<PathBuf> {
        if self.libraries.is_empty() {
            return vec![cwd.join(DEFAULT_LIBRARY_DIR)];
        }
        self.libraries.iter().map(|d| d.path.clone()).collect()
    }

    /// Search thresholds for both modes.
    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            live_min_score: self.search.live_min_score,
            advanced_min_score: self.search.advanced_min_score,
        }
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - Thresholds outside `[0, 1]`
    /// - Library paths that don't exist or aren't directories
    /// - No library paths at all
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings in `.sysman.toml` form.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            library: SerializableLibrary {
                paths: self
                    .libraries
                    .iter()
                    .map(|d| d.path.display().to_string())
                    .collect(),
                default: self.library.default.as_deref(),
            },
            search: &self.search,
        };
        toml::to_string_pretty(&serializable).map_err(ConfigError::Serialize)
    }
}

/// `[library]` scalar settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Manual to use when none is named on the command line.
    pub default: Option<String>,
}

/// `[search]` settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Threshold for single-category filtering.
    pub live_min_score: f64,
    /// Threshold for cross-category search.
    pub advanced_min_score: f64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            live_min_score: DEFAULT_LIVE_MIN_SCORE,
            advanced_min_score: DEFAULT_ADVANCED_MIN_SCORE,
        }
    }
}

/// A resolved directory of manual files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryDir {
    /// Absolute path to the directory.
    pub path: PathBuf,
    /// Whether this directory came from the global `~/.sysman.toml`.
    pub is_global: bool,
}

/// Effective settings in TOML layout.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// `[library]` section.
    library: SerializableLibrary<'a>,
    /// `[search]` section.
    search: &'a SearchSettings,
}

/// `[library]` section with resolved paths.
#[derive(Serialize)]
struct SerializableLibrary<'a> {
    /// Resolved library directories.
    paths: Vec<String>,
    /// Default manual id.
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<&'a str>,
}
