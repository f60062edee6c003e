//! Scratch directory trees for unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A temporary project tree that config files and library directories are written into.
pub struct TestTree {
    /// Removed on drop.
    root: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates `rel` and any missing parents.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.root.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes a file at `rel`, creating parent directories.
    pub fn file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.root.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Writes `.sysman.toml` inside `rel` (`""` for the tree root).
    pub fn config(&self, rel: &str, contents: &str) -> PathBuf {
        let dir = self.dir(rel);
        let path = dir.join(CONFIG_FILENAME);
        fs::write(&path, contents).unwrap();
        path
    }

    /// Writes a `.sysman.toml` that sets nothing.
    pub fn empty_config(&self, rel: &str) -> PathBuf {
        self.config(rel, "# no settings\n")
    }
}
