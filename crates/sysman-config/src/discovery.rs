//! Configuration file discovery.
//!
//! Walks up the directory tree from a starting point collecting `.sysman.toml` files, then
//! appends the global `~/.sysman.toml` if present.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".sysman.toml";

/// Discovers all configuration files relevant to `cwd`.
///
/// Returns paths in precedence order: closest to `cwd` first, global last. Discovery stops
/// at the first file with `root = true`, in which case the global file is skipped too.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();
    let mut found_root = false;

    for dir in cwd.ancestors() {
        let config_path = dir.join(CONFIG_FILENAME);
        if !config_path.is_file() {
            continue;
        }
        let is_root = is_root_config(&config_path);
        configs.push(config_path);
        if is_root {
            found_root = true;
            break;
        }
    }

    if !found_root
        && let Some(global_path) = global_config_path()
        && global_path.is_file()
        && !configs.contains(&global_path)
    {
        configs.push(global_path);
    }

    configs
}

/// Returns the path to the global configuration file (`~/.sysman.toml`).
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::TestTree;

    fn local(configs: &[PathBuf]) -> Vec<&PathBuf> {
        configs.iter().filter(|p| !is_global_config(p)).collect()
    }

    #[test]
    fn no_configs() {
        let tree = TestTree::new();
        let subdir = tree.dir("a/b/c");

        let configs = discover_config_files(&subdir);
        assert!(local(&configs).is_empty());
    }

    #[test]
    fn closest_first() {
        let tree = TestTree::new();
        let top = tree.empty_config("");
        let mid = tree.empty_config("a/b");
        let leaf = tree.empty_config("a/b/c/d");
        let working_dir = tree.dir("a/b/c/d/e");

        let configs = discover_config_files(&working_dir);
        assert_eq!(local(&configs), [&leaf, &mid, &top]);
    }

    #[test]
    fn config_in_cwd_is_found() {
        let tree = TestTree::new();
        let config = tree.empty_config("");

        let configs = discover_config_files(tree.path());
        assert_eq!(local(&configs), [&config]);
    }

    #[test]
    fn directory_named_like_config_is_skipped() {
        let tree = TestTree::new();
        fs::create_dir_all(tree.path().join(CONFIG_FILENAME)).unwrap();
        let subdir = tree.dir("subdir");

        assert!(local(&discover_config_files(&subdir)).is_empty());
    }

    #[test]
    fn root_config_stops_discovery() {
        let tree = TestTree::new();
        tree.empty_config("");
        let root_config = tree.config("project", "root = true\n");
        let child_config = tree.empty_config("project/sub");
        let working_dir = tree.dir("project/sub/deep");

        // Neither the parent nor the global config is included.
        let configs = discover_config_files(&working_dir);
        assert_eq!(configs, [child_config, root_config]);
    }

    #[test]
    fn root_false_does_not_stop_discovery() {
        let tree = TestTree::new();
        let parent = tree.empty_config("");
        let mid = tree.config("project", "root = false\n");
        let working_dir = tree.dir("project/src");

        let configs = discover_config_files(&working_dir);
        assert_eq!(local(&configs), [&mid, &parent]);
    }

    #[test]
    fn global_path_uses_config_filename() {
        let path = global_config_path().unwrap();
        assert!(path.ends_with(CONFIG_FILENAME));
        assert!(is_global_config(&path));
        assert!(!is_global_config(Path::new("/elsewhere/.sysman.toml")));
    }
}
