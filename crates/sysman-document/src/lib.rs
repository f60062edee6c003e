//! Manual documents for sysman.
//!
//! This crate owns the manual data model and everything that touches it structurally:
//! - JSON loading and saving of manual files
//! - Loading a library of manuals from directories
//! - Structural validation (identifier uniqueness and non-empty ids)
//! - Collision-free name/id generation and the duplicate/add operations built on it
//! - Removing and reordering categories and entries, and the new-manual template

#![warn(missing_docs)]

mod edit;
mod error;
mod io;
mod library;
mod model;
mod unique;
mod validate;

pub use edit::{
    Direction, NEW_CATEGORY_ID, NEW_CATEGORY_NAME, NEW_DOCUMENT_ID, NEW_DOCUMENT_NAME,
    NEW_ENTRY_ID, NEW_ENTRY_NAME, add_category, add_entry, copy_category, copy_entry,
    duplicate_category, duplicate_entry, move_category, move_entry, new_document,
    remove_category, remove_entry,
};
pub use error::DocumentError;
pub use io::{load_document, parse_document, save_document, to_json};
pub use library::{Library, LoadFailure, LoadedDocument, MANUAL_EXTENSION};
pub use model::{Category, Detail, Document, Entry, Example, Theme};
pub use unique::{IdSet, NameAndId, unique_name_and_id};
pub use validate::{ValidationIssue, validate_document};
