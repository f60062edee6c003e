//! Error types for manual documents.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading, saving, or editing manual documents.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to read a manual file.
    #[error("failed to read manual {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to list a library directory.
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        /// Directory that could not be listed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file is not a well-formed manual.
    #[error("invalid manual {path}: {source}")]
    ParseJson {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Failed to serialize a manual.
    #[error("failed to serialize manual: {0}")]
    SerializeJson(#[source] serde_json::Error),

    /// Failed to write a manual file.
    #[error("failed to write manual {path}: {source}")]
    WriteFile {
        /// Path to the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Two files in a library declare the same manual id.
    #[error("manual id '{id}' in {path} is already loaded from {existing}")]
    DuplicateDocumentId {
        /// The clashing manual id.
        id: String,
        /// File that was rejected.
        path: PathBuf,
        /// File that was loaded first.
        existing: PathBuf,
    },

    /// A category index is out of range.
    #[error("no category at index {index}")]
    CategoryNotFound {
        /// The requested category index.
        index: usize,
    },

    /// An entry index is out of range within its category.
    #[error("no entry at index {index} in category {category}")]
    EntryNotFound {
        /// Index of the category that was searched.
        category: usize,
        /// The requested entry index.
        index: usize,
    },
}
