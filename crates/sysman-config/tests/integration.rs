//! Integration tests for sysman-config.
//!
//! Exercises the full loading pipeline: discovery, parse, resolve, merge, validate.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use sysman_config::{Config, ConfigError, ConfigWarning, DEFAULT_LIBRARY_DIR};

/// Temporary directory tree for a test.
struct TestEnv {
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory and returns its path.
    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Creates a file with content and returns its path.
    fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn no_config_uses_defaults() {
    let env = TestEnv::new();
    let project = env.create_dir("project");
    let config = Config::load_from_files(&[]).unwrap();

    assert!(config.libraries.is_empty());
    assert!(config.config_root.is_none());
    assert_eq!(config.search.live_min_score, 0.12);
    assert_eq!(config.search.advanced_min_score, 0.15);
    assert_eq!(
        config.library_dirs(&project),
        [project.join(DEFAULT_LIBRARY_DIR)]
    );
    assert_eq!(config.validate(), [ConfigWarning::NoLibraryPaths]);
}

#[test]
fn single_root_config() {
    let env = TestEnv::new();
    let manuals = env.create_dir("manuals");
    env.create_file(
        ".sysman.toml",
        r#"
root = true

[library]
paths = "manuals"
default = "net-tools"

[search]
advanced_min_score = 0.25
"#,
    );

    let config = Config::load(env.path()).unwrap();
    assert_eq!(config.libraries.len(), 1);
    assert_eq!(config.libraries[0].path, manuals.canonicalize().unwrap());
    assert_eq!(config.library.default.as_deref(), Some("net-tools"));
    assert_eq!(config.search.live_min_score, 0.12);
    assert_eq!(config.search.advanced_min_score, 0.25);
    assert_eq!(config.config_root.as_deref(), Some(env.path()));
    assert!(config.validate().is_empty());
}

#[test]
fn nested_configs_merge() {
    let env = TestEnv::new();
    let shared = env.create_dir("shared");
    let local = env.create_dir("project/manuals");
    let working_dir = env.create_dir("project/src");

    env.create_file(
        ".sysman.toml",
        r#"
root = true

[library]
paths = ["shared"]
default = "outer"

[search]
live_min_score = 0.05
advanced_min_score = 0.3
"#,
    );
    env.create_file(
        "project/.sysman.toml",
        r#"
[library]
paths = ["manuals"]

[search]
live_min_score = 0.2
"#,
    );

    let config = Config::load(&working_dir).unwrap();
    let dirs: Vec<_> = config.libraries.iter().map(|d| d.path.clone()).collect();
    assert_eq!(
        dirs,
        [local.canonicalize().unwrap(), shared.canonicalize().unwrap()]
    );
    assert_eq!(config.library.default.as_deref(), Some("outer"));
    assert_eq!(config.search.live_min_score, 0.2);
    assert_eq!(config.search.advanced_min_score, 0.3);
    assert_eq!(config.sources.len(), 2);

    let params = config.search_params();
    assert_eq!(params.live_min_score, 0.2);
    assert_eq!(params.advanced_min_score, 0.3);
}

#[test]
fn invalid_toml_is_an_error() {
    let env = TestEnv::new();
    env.create_file(".sysman.toml", "root = true\n[search\n");

    let err = Config::load(env.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseToml { .. }));
}

#[test]
fn missing_library_path_warns() {
    let env = TestEnv::new();
    env.create_file(
        ".sysman.toml",
        "root = true\n[library]\npaths = [\"gone\"]\n[search]\nlive_min_score = -0.1\n",
    );

    let config = Config::load(env.path()).unwrap();
    let warnings = config.validate();
    assert_eq!(warnings.len(), 2);
    assert!(matches!(
        warnings[0],
        ConfigWarning::ThresholdOutOfRange {
            setting: "live_min_score",
            ..
        }
    ));
    assert!(matches!(
        warnings[1],
        ConfigWarning::LibraryPathMissing { .. }
    ));
}

#[test]
fn effective_settings_render() {
    let env = TestEnv::new();
    env.create_dir("manuals");
    env.create_file(
        ".sysman.toml",
        "root = true\n[library]\npaths = [\"manuals\"]\n",
    );

    let config = Config::load(env.path()).unwrap();
    let toml = config.settings_to_toml().unwrap();
    assert!(toml.contains("manuals"));
    assert!(toml.contains("advanced_min_score = 0.15"));
}
