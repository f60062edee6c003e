//! Configuration merging.
//!
//! Merges parsed config files into a single `Config`, applying precedence rules and resolving
//! library paths.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, LibraryDir, LibrarySettings, SearchSettings,
    discovery::is_global_config,
    parse::{RawConfig, RawSearchSettings},
    resolve::resolve_library_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges configuration files into a single `Config`.
///
/// Configs are given highest precedence first (closest to the working directory), global
/// last.
///
/// Merge rules:
/// - Scalars: the first file that sets a value wins
/// - Library paths: collected from every file, closest first, duplicates dropped
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let library = merge_library_settings(configs);
    let search = merge_search_settings(configs);
    let libraries = merge_library_dirs(configs)?;
    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(Path::to_path_buf);

    Ok(Config {
        library,
        search,
        libraries,
        config_root,
        sources: configs.iter().map(|c| c.path.clone()).collect(),
    })
}

/// Merges `[library]` scalars, taking the first defined value.
fn merge_library_settings(configs: &[ParsedConfig]) -> LibrarySettings {
    let default = configs.iter().find_map(|parsed| {
        parsed
            .config
            .library
            .as_ref()
            .and_then(|library| library.default.clone())
    });
    LibrarySettings { default }
}

/// Merges `[search]` settings.
fn merge_search_settings(configs: &[ParsedConfig]) -> SearchSettings {
    let mut result = SearchSettings::default();

    // Lowest precedence first, so closer files overwrite.
    for parsed in configs.iter().rev() {
        if let Some(ref search) = parsed.config.search {
            apply_raw_search(&mut result, search);
        }
    }

    result
}

/// Applies raw search settings to result, overwriting any present values.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.live_min_score {
        result.live_min_score = v;
    }
    if let Some(v) = raw.advanced_min_score {
        result.advanced_min_score = v;
    }
}

/// Collects library directories from every config, resolving each against its file.
fn merge_library_dirs(configs: &[ParsedConfig]) -> Result<Vec<LibraryDir>, ConfigError> {
    let mut dirs: Vec<LibraryDir> = Vec::new();

    for parsed in configs {
        let Some(paths) = parsed
            .config
            .library
            .as_ref()
            .and_then(|library| library.paths.as_ref())
        else {
            continue;
        };

        let config_dir = parsed.path.parent().unwrap_or_else(|| Path::new("."));
        let is_global = is_global_config(&parsed.path);

        for raw in paths {
            let path = resolve_library_path(raw, config_dir)?;
            if dirs.iter().any(|d| d.path == path) {
                continue;
            }
            dirs.push(LibraryDir { path, is_global });
        }
    }

    Ok(dirs)
}
