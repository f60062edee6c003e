//! Loading a set of manuals from library directories.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{Document, DocumentError, load_document};

/// File extension of manual files.
pub const MANUAL_EXTENSION: &str = "json";

/// A manual together with the file it was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Source file.
    pub path: PathBuf,
    /// The parsed manual.
    pub document: Document,
}

/// A file that could not be loaded.
#[derive(Debug)]
pub struct LoadFailure {
    /// The offending file or directory.
    pub path: PathBuf,
    /// Why it failed.
    pub error: DocumentError,
}

/// The set of manuals available to a session, keyed by manual id.
///
/// Loading never aborts on a bad file: failures are collected so callers can report them
/// alongside the manuals that did load.
#[derive(Debug, Default)]
pub struct Library {
    /// Loaded manuals in load order.
    documents: Vec<LoadedDocument>,
    /// Files that failed to load.
    failures: Vec<LoadFailure>,
}

impl Library {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every manual file in each of `dirs`.
    ///
    /// Directories are read in the order given, files within a directory in path order.
    /// Subdirectories are not descended into. Directories that do not exist are skipped.
    pub fn load_dirs(dirs: &[PathBuf]) -> Self {
        let mut library = Self::new();
        for dir in dirs {
            library.load_dir(dir);
        }
        library
    }

    /// Loads every manual file in `dir`.
    pub fn load_dir(&mut self, dir: &Path) {
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "library directory missing, skipping");
            return;
        }

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(source) => {
                self.failures.push(LoadFailure {
                    path: dir.to_path_buf(),
                    error: DocumentError::ReadDir {
                        path: dir.to_path_buf(),
                        source,
                    },
                });
                return;
            }
        };

        let mut files: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| is_manual_file(path))
            .collect();
        files.sort();

        for path in files {
            self.load_file(&path);
        }
    }

    /// Loads a single manual file, recording a failure if it cannot be used.
    ///
    /// Returns the id of the loaded manual on success.
    pub fn load_file(&mut self, path: &Path) -> Option<&str> {
        match load_document(path) {
            Ok(document) => self.insert(path.to_path_buf(), document),
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to load manual");
                self.failures.push(LoadFailure {
                    path: path.to_path_buf(),
                    error,
                });
                None
            }
        }
    }

    /// Adds an already-parsed manual. Rejects ids that are already loaded.
    pub fn insert(&mut self, path: PathBuf, document: Document) -> Option<&str> {
        if let Some(existing) = self.get(&document.id) {
            let error = DocumentError::DuplicateDocumentId {
                id: document.id.clone(),
                path: path.clone(),
                existing: existing.path.clone(),
            };
            warn!(%error, "skipping manual");
            self.failures.push(LoadFailure { path, error });
            return None;
        }

        debug!(
            id = %document.id,
            path = %path.display(),
            categories = document.categories.len(),
            entries = document.entry_count(),
            "loaded manual"
        );
        self.documents.push(LoadedDocument { path, document });
        self.documents.last().map(|d| d.document.id.as_str())
    }

    /// Returns the manual with the given id.
    pub fn get(&self, id: &str) -> Option<&LoadedDocument> {
        self.documents.iter().find(|d| d.document.id == id)
    }

    /// Returns the first loaded manual.
    pub fn first(&self) -> Option<&LoadedDocument> {
        self.documents.first()
    }

    /// Loaded manuals in load order.
    pub fn documents(&self) -> &[LoadedDocument] {
        &self.documents
    }

    /// Files that failed to load.
    pub fn failures(&self) -> &[LoadFailure] {
        &self.failures
    }

    /// Returns true if no manual loaded.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of loaded manuals.
    pub fn len(&self) -> usize {
        self.documents.len()
    }
}

/// Returns true for regular files carrying the manual extension.
fn is_manual_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(MANUAL_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manual(id: &str) -> String {
        format!(r#"{{"id": "{id}", "name": "{id}", "description": "", "categories": []}}"#)
    }

    #[test]
    fn loads_json_files_in_path_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.json"), manual("beta")).unwrap();
        fs::write(dir.path().join("a.json"), manual("alpha")).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let library = Library::load_dirs(&[dir.path().to_path_buf()]);
        let ids: Vec<_> = library.documents().iter().map(|d| d.document.id.as_str()).collect();
        assert_eq!(ids, ["alpha", "beta"]);
        assert!(library.failures().is_empty());
        assert_eq!(library.first().unwrap().document.id, "alpha");
    }

    #[test]
    fn bad_files_are_collected_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("good.json"), manual("good")).unwrap();
        fs::write(dir.path().join("bad.json"), "{ not json").unwrap();

        let library = Library::load_dirs(&[dir.path().to_path_buf()]);
        assert_eq!(library.len(), 1);
        assert_eq!(library.failures().len(), 1);
        assert!(library.failures()[0].path.ends_with("bad.json"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let one = tempfile::tempdir().unwrap();
        let two = tempfile::tempdir().unwrap();
        fs::write(one.path().join("m.json"), manual("same")).unwrap();
        fs::write(two.path().join("m.json"), manual("same")).unwrap();

        let library = Library::load_dirs(&[one.path().to_path_buf(), two.path().to_path_buf()]);
        assert_eq!(library.len(), 1);
        assert!(library.get("same").unwrap().path.starts_with(one.path()));
        assert!(matches!(
            library.failures()[0].error,
            DocumentError::DuplicateDocumentId { .. }
        ));
    }

    #[test]
    fn missing_directory_is_skipped() {
        let library = Library::load_dirs(&[PathBuf::from("/nonexistent/sysman")]);
        assert!(library.is_empty());
        assert!(library.failures().is_empty());
    }
}
