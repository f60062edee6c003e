//! Configuration validation.

use std::fmt;

use crate::Config;

/// A non-fatal problem with the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// A library path does not exist.
    LibraryPathMissing {
        /// The missing path.
        path: String,
    },
    /// A library path exists but is not a directory.
    LibraryPathNotDirectory {
        /// The offending path.
        path: String,
    },
    /// No library paths are configured.
    NoLibraryPaths,
    /// A search threshold lies outside `[0, 1]`.
    ThresholdOutOfRange {
        /// Setting name.
        setting: &'static str,
        /// Configured value.
        value: f64,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LibraryPathMissing { path } => {
                write!(f, "library path does not exist: {path}")
            }
            Self::LibraryPathNotDirectory { path } => {
                write!(f, "library path is not a directory: {path}")
            }
            Self::NoLibraryPaths => write!(f, "no library paths are configured"),
            Self::ThresholdOutOfRange { setting, value } => {
                write!(f, "search.{setting} = {value} is outside 0.0..=1.0")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    for (setting, value) in [
        ("live_min_score", config.search.live_min_score),
        ("advanced_min_score", config.search.advanced_min_score),
    ] {
        if !(0.0..=1.0).contains(&value) {
            warnings.push(ConfigWarning::ThresholdOutOfRange { setting, value });
        }
    }

    if config.libraries.is_empty() {
        warnings.push(ConfigWarning::NoLibraryPaths);
        return warnings;
    }

    for library in &config.libraries {
        let path = library.path.display().to_string();
        if !library.path.exists() {
            warnings.push(ConfigWarning::LibraryPathMissing { path });
        } else if !library.path.is_dir() {
            warnings.push(ConfigWarning::LibraryPathNotDirectory { path });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LibraryDir, test_support::TestTree};

    #[test]
    fn default_config_has_no_libraries() {
        assert_eq!(
            validate_config(&Config::default()),
            [ConfigWarning::NoLibraryPaths]
        );
    }

    #[test]
    fn bad_library_paths() {
        let tree = TestTree::new();
        let good = tree.dir("manuals");
        let file = tree.file("manual.json", "{}");
        let missing = tree.path().join("missing");

        let config = Config {
            libraries: [good, file.clone(), missing.clone()]
                .into_iter()
                .map(|path| LibraryDir {
                    path,
                    is_global: false,
                })
                .collect(),
            ..Config::default()
        };

        assert_eq!(
            validate_config(&config),
            [
                ConfigWarning::LibraryPathNotDirectory {
                    path: file.display().to_string()
                },
                ConfigWarning::LibraryPathMissing {
                    path: missing.display().to_string()
                },
            ]
        );
    }

    #[test]
    fn thresholds_out_of_range() {
        let mut config = Config::default();
        config.search.advanced_min_score = 1.5;
        let warnings = validate_config(&config);
        assert_eq!(
            warnings[0],
            ConfigWarning::ThresholdOutOfRange {
                setting: "advanced_min_score",
                value: 1.5
            }
        );
        assert_eq!(
            warnings[0].to_string(),
            "search.advanced_min_score = 1.5 is outside 0.0..=1.0"
        );
    }
}
