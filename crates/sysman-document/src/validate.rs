//! Structural validation of manuals.
//!
//! Deserialization already enforces the shape of a manual. This module checks the invariants
//! that the type system cannot express: identifiers must be non-empty, category ids unique
//! within the manual, and entry ids unique across the whole manual.

use std::{collections::HashMap, fmt};

use crate::Document;

/// A non-fatal problem found in a manual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The manual id is empty.
    EmptyDocumentId,
    /// A category has an empty id.
    EmptyCategoryId {
        /// Position of the category.
        index: usize,
    },
    /// An entry has an empty id.
    EmptyEntryId {
        /// Id of the category holding the entry.
        category: String,
        /// Position of the entry within the category.
        index: usize,
    },
    /// Two categories share an id.
    DuplicateCategoryId {
        /// The repeated id.
        id: String,
    },
    /// Two entries share an id.
    DuplicateEntryId {
        /// The repeated id.
        id: String,
        /// Category of the first occurrence.
        first: String,
        /// Category of the repeated occurrence.
        second: String,
    },
    /// An example has no command text.
    EmptyExampleCommand {
        /// Id of the entry holding the example.
        entry: String,
        /// Position of the example.
        index: usize,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDocumentId => write!(f, "manual id is empty"),
            Self::EmptyCategoryId { index } => write!(f, "category #{index} has an empty id"),
            Self::EmptyEntryId { category, index } => {
                write!(f, "entry #{index} in category '{category}' has an empty id")
            }
            Self::DuplicateCategoryId { id } => write!(f, "category id '{id}' is used twice"),
            Self::DuplicateEntryId { id, first, second } => write!(
                f,
                "entry id '{id}' appears in category '{first}' and again in '{second}'"
            ),
            Self::EmptyExampleCommand { entry, index } => {
                write!(f, "example #{index} of entry '{entry}' has no command")
            }
        }
    }
}

/// Checks a manual and returns every issue found, in document order.
pub fn validate_document(document: &Document) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if document.id.trim().is_empty() {
        issues.push(ValidationIssue::EmptyDocumentId);
    }

    let mut category_seen: HashMap<&str, usize> = HashMap::new();
    let mut entry_seen: HashMap<&str, &str> = HashMap::new();

    for (ci, category) in document.categories.iter().enumerate() {
        if category.id.trim().is_empty() {
            issues.push(ValidationIssue::EmptyCategoryId { index: ci });
        } else if category_seen.insert(category.id.as_str(), ci).is_some() {
            issues.push(ValidationIssue::DuplicateCategoryId {
                id: category.id.clone(),
            });
        }

        for (ei, entry) in category.entries.iter().enumerate() {
            if entry.id.trim().is_empty() {
                issues.push(ValidationIssue::EmptyEntryId {
                    category: category.id.clone(),
                    index: ei,
                });
            } else if let Some(first) = entry_seen.get(entry.id.as_str()) {
                issues.push(ValidationIssue::DuplicateEntryId {
                    id: entry.id.clone(),
                    first: (*first).to_string(),
                    second: category.id.clone(),
                });
            } else {
                entry_seen.insert(entry.id.as_str(), category.id.as_str());
            }

            for (xi, example) in entry.examples.iter().enumerate() {
                if example.command().trim().is_empty() {
                    issues.push(ValidationIssue::EmptyExampleCommand {
                        entry: entry.id.clone(),
                        index: xi,
                    });
                }
            }
        }
    }

    issues
}
