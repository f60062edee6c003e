//! Structural edits on a manual.
//!
//! Duplication and creation deep-copy or create a node, rename it through
//! [`unique_name_and_id`](crate::unique_name_and_id) against the right id scope, and insert
//! it into the document. Category ids are scoped to the document; entry ids are scoped to the
//! whole document across all categories. Removal and moves address nodes by position and
//! never rename anything.

use std::collections::HashSet;

use tracing::debug;

use crate::{
    Category, Document, DocumentError, Entry, Theme,
    unique::{NameAndId, unique_name_and_id},
};

/// Base name for categories created with [`add_category`].
pub const NEW_CATEGORY_NAME: &str = "New Category";
/// Base id for categories created with [`add_category`].
pub const NEW_CATEGORY_ID: &str = "new-category";
/// Base name for entries created with [`add_entry`].
pub const NEW_ENTRY_NAME: &str = "New Entry";
/// Base id for entries created with [`add_entry`].
pub const NEW_ENTRY_ID: &str = "new-entry";
/// Placeholder description for new entries.
const NEW_ENTRY_DESCRIPTION: &str = "Description";

/// Returns a renamed deep copy of `category`.
///
/// The category is renamed against `category_ids`. Every entry inside the copy is renamed
/// against `entry_ids`, and each freshly minted entry id is added to the exclusion set before
/// the next entry is processed, so two entries in the same copy cannot collide. The caller's
/// sets are left untouched.
pub fn copy_category(
    category: &Category,
    category_ids: &HashSet<String>,
    entry_ids: &HashSet<String>,
) -> Category {
    let mut copy = category.clone();
    let renamed = unique_name_and_id(&copy.name, &copy.id, category_ids);
    copy.name = renamed.name;
    copy.id = renamed.id;

    let mut taken = entry_ids.clone();
    for entry in &mut copy.entries {
        let renamed = unique_name_and_id(&entry.name, &entry.id, &taken);
        taken.insert(renamed.id.clone());
        entry.name = renamed.name;
        entry.id = renamed.id;
    }
    copy
}

/// Returns a deep copy of `entry` renamed against `entry_ids`.
pub fn copy_entry(entry: &Entry, entry_ids: &HashSet<String>) -> Entry {
    let mut copy = entry.clone();
    let renamed = unique_name_and_id(&copy.name, &copy.id, entry_ids);
    copy.name = renamed.name;
    copy.id = renamed.id;
    copy
}

/// Duplicates the category at `index`, inserting the copy right after the original.
///
/// Returns the new category's name and id.
pub fn duplicate_category(
    document: &mut Document,
    index: usize,
) -> Result<NameAndId, DocumentError> {
    let original = document
        .categories
        .get(index)
        .ok_or(DocumentError::CategoryNotFound { index })?;

    let copy = copy_category(original, &document.category_ids(), &document.entry_ids());
    let result = NameAndId::new(&copy.name, &copy.id);
    debug!(
        from = %original.id,
        to = %copy.id,
        entries = copy.entries.len(),
        "duplicated category"
    );
    document.categories.insert(index + 1, copy);
    Ok(result)
}

/// Duplicates an entry, inserting the copy right after the original in the same category.
///
/// Returns the new entry's name and id.
pub fn duplicate_entry(
    document: &mut Document,
    category: usize,
    index: usize,
) -> Result<NameAndId, DocumentError> {
    let entry_ids = document.entry_ids();
    let entries = &mut document
        .categories
        .get_mut(category)
        .ok_or(DocumentError::CategoryNotFound { index: category })?
        .entries;
    let original = entries
        .get(index)
        .ok_or(DocumentError::EntryNotFound { category, index })?;

    let copy = copy_entry(original, &entry_ids);
    let result = NameAndId::new(&copy.name, &copy.id);
    debug!(from = %original.id, to = %copy.id, "duplicated entry");
    entries.insert(index + 1, copy);
    Ok(result)
}

/// Appends an empty category named from [`NEW_CATEGORY_NAME`].
pub fn add_category(document: &mut Document) -> NameAndId {
    let named = unique_name_and_id(NEW_CATEGORY_NAME, NEW_CATEGORY_ID, &document.category_ids());
    document.categories.push(Category {
        id: named.id.clone(),
        name: named.name.clone(),
        entries: Vec::new(),
    });
    named
}

/// Appends a placeholder entry named from [`NEW_ENTRY_NAME`] to the category at `category`.
pub fn add_entry(document: &mut Document, category: usize) -> Result<NameAndId, DocumentError> {
    let named = unique_name_and_id(NEW_ENTRY_NAME, NEW_ENTRY_ID, &document.entry_ids());
    let target = document
        .categories
        .get_mut(category)
        .ok_or(DocumentError::CategoryNotFound { index: category })?;
    target.entries.push(Entry {
        id: named.id.clone(),
        name: named.name.clone(),
        description: NEW_ENTRY_DESCRIPTION.to_string(),
        ..Entry::default()
    });
    Ok(named)
}

/// Id of a manual created with [`new_document`].
pub const NEW_DOCUMENT_ID: &str = "new-sysmanual";
/// Name of a manual created with [`new_document`].
pub const NEW_DOCUMENT_NAME: &str = "New SysManual";
/// Default primary theme colour of a new manual.
const NEW_DOCUMENT_PRIMARY: &str = "#4CAF50";
/// Default accent theme colour of a new manual.
const NEW_DOCUMENT_ACCENT: &str = "#2196F3";

/// Returns an empty manual with placeholder name and the default theme.
pub fn new_document() -> Document {
    Document {
        id: NEW_DOCUMENT_ID.to_string(),
        name: NEW_DOCUMENT_NAME.to_string(),
        description: NEW_ENTRY_DESCRIPTION.to_string(),
        theme: Some(Theme {
            primary: Some(NEW_DOCUMENT_PRIMARY.to_string()),
            accent: Some(NEW_DOCUMENT_ACCENT.to_string()),
        }),
        categories: Vec::new(),
    }
}

/// Removes the category at `index`, entries included, and returns it.
pub fn remove_category(document: &mut Document, index: usize) -> Result<Category, DocumentError> {
    if index >= document.categories.len() {
        return Err(DocumentError::CategoryNotFound { index });
    }
    let removed = document.categories.remove(index);
    debug!(id = %removed.id, entries = removed.entries.len(), "removed category");
    Ok(removed)
}

/// Removes an entry and returns it.
pub fn remove_entry(
    document: &mut Document,
    category: usize,
    index: usize,
) -> Result<Entry, DocumentError> {
    let entries = entries_mut(document, category)?;
    if index >= entries.len() {
        return Err(DocumentError::EntryNotFound { category, index });
    }
    let removed = entries.remove(index);
    debug!(id = %removed.id, "removed entry");
    Ok(removed)
}

/// Direction to move a node among its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the start.
    Up,
    /// Towards the end.
    Down,
}

/// Swaps the category at `index` with its neighbour.
///
/// Returns the category's new index, or `None` when it is already first (moving up) or last
/// (moving down) and nothing changed.
pub fn move_category(
    document: &mut Document,
    index: usize,
    direction: Direction,
) -> Result<Option<usize>, DocumentError> {
    if index >= document.categories.len() {
        return Err(DocumentError::CategoryNotFound { index });
    }
    Ok(swap_with_neighbour(&mut document.categories, index, direction))
}

/// Swaps an entry with its neighbour in the same category.
///
/// Entries never cross into another category. Returns the new index, or `None` at the
/// boundary.
pub fn move_entry(
    document: &mut Document,
    category: usize,
    index: usize,
    direction: Direction,
) -> Result<Option<usize>, DocumentError> {
    let entries = entries_mut(document, category)?;
    if index >= entries.len() {
        return Err(DocumentError::EntryNotFound { category, index });
    }
    Ok(swap_with_neighbour(entries, index, direction))
}

/// Entries of the category at `category`.
fn entries_mut(document: &mut Document, category: usize) -> Result<&mut Vec<Entry>, DocumentError> {
    document
        .categories
        .get_mut(category)
        .map(|c| &mut c.entries)
        .ok_or(DocumentError::CategoryNotFound { index: category })
}

/// Swaps `items[index]` with the neighbour in `direction`, if there is one.
fn swap_with_neighbour<T>(items: &mut [T], index: usize, direction: Direction) -> Option<usize> {
    let target = match direction {
        Direction::Up => index.checked_sub(1)?,
        Direction::Down => Some(index + 1).filter(|&i| i < items.len())?,
    };
    items.swap(index, target);
    Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Example;

    fn entry(id: &str, name: &str) -> Entry {
        Entry {
            id: id.into(),
            name: name.into(),
            description: format!("{name} description"),
            examples: vec![Example::from(name)],
            ..Entry::default()
        }
    }

    fn document() -> Document {
        Document {
            id: "ops".into(),
            name: "Ops".into(),
            description: "Operations".into(),
            theme: None,
            categories: vec![
                Category {
                    id: "net".into(),
                    name: "Network".into(),
                    entries: vec![entry("ping", "ping"), entry("curl", "curl")],
                },
                Category {
                    id: "fs".into(),
                    name: "Files".into(),
                    entries: vec![entry("ls", "ls")],
                },
            ],
        }
    }

    #[test]
    fn duplicate_entry_inserts_after_original() {
        let mut doc = document();
        let named = duplicate_entry(&mut doc, 0, 0).unwrap();
        assert_eq!(named, NameAndId::new("ping (1)", "ping_1"));

        let ids: Vec<_> = doc.categories[0].entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["ping", "ping_1", "curl"]);
        assert_eq!(doc.categories[0].entries[1].examples, doc.categories[0].entries[0].examples);
    }

    #[test]
    fn duplicating_a_copy_counts_up() {
        let mut doc = document();
        duplicate_entry(&mut doc, 0, 0).unwrap();
        let named = duplicate_entry(&mut doc, 0, 1).unwrap();
        assert_eq!(named, NameAndId::new("ping (2)", "ping_2"));
    }

    #[test]
    fn entry_ids_are_document_wide() {
        let mut doc = document();
        doc.categories[1].entries.push(entry("ping_1", "ping (1)"));
        let named = duplicate_entry(&mut doc, 0, 0).unwrap();
        assert_eq!(named.id, "ping_2");
    }

    #[test]
    fn duplicate_category_renames_children() {
        let mut doc = document();
        let named = duplicate_category(&mut doc, 0).unwrap();
        assert_eq!(named, NameAndId::new("Network (1)", "net_1"));
        assert_eq!(doc.categories[1].id, "net_1");

        let copied: Vec<_> = doc.categories[1].entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(copied, ["ping_1", "curl_1"]);
        assert_eq!(doc.categories[1].entries[0].name, "ping (1)");
        assert_eq!(doc.categories[0].entries[0].id, "ping");
        assert_eq!(doc.entry_ids().len(), 5);
    }

    #[test]
    fn children_of_a_copy_cannot_collide_with_each_other() {
        let mut doc = document();
        // Two entries whose stripped bases coincide.
        doc.categories[1].entries = vec![entry("tar_1", "tar (1)"), entry("tar_2", "tar (2)")];
        let copy = copy_category(&doc.categories[1], &doc.category_ids(), &doc.entry_ids());
        let ids: Vec<_> = copy.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["tar_3", "tar_4"]);
    }

    #[test]
    fn copy_leaves_original_untouched() {
        let doc = document();
        let before = doc.clone();
        let _copy = copy_entry(&doc.categories[0].entries[0], &doc.entry_ids());
        assert_eq!(doc, before);
    }

    #[test]
    fn add_nodes_use_placeholder_names() {
        let mut doc = document();
        assert_eq!(
            add_category(&mut doc),
            NameAndId::new(NEW_CATEGORY_NAME, NEW_CATEGORY_ID)
        );
        assert_eq!(
            add_category(&mut doc),
            NameAndId::new("New Category (1)", "new-category_1")
        );

        let first = add_entry(&mut doc, 2).unwrap();
        let second = add_entry(&mut doc, 0).unwrap();
        assert_eq!(first.id, NEW_ENTRY_ID);
        assert_eq!(second.id, "new-entry_1");
        assert_eq!(doc.categories[2].entries[0].description, "Description");
    }

    #[test]
    fn out_of_range_indices_are_errors() {
        let mut doc = document();
        assert!(matches!(
            duplicate_category(&mut doc, 9),
            Err(DocumentError::CategoryNotFound { index: 9 })
        ));
        assert!(matches!(
            duplicate_entry(&mut doc, 0, 9),
            Err(DocumentError::EntryNotFound { category: 0, index: 9 })
        ));
        assert!(matches!(
            add_entry(&mut doc, 5),
            Err(DocumentError::CategoryNotFound { index: 5 })
        ));
    }

    #[test]
    fn new_document_template() {
        let doc = new_document();
        assert_eq!(doc.id, NEW_DOCUMENT_ID);
        assert_eq!(doc.name, "New SysManual");
        assert!(doc.categories.is_empty());
        let theme = doc.theme.unwrap();
        assert_eq!(theme.primary.as_deref(), Some("#4CAF50"));
        assert_eq!(theme.accent.as_deref(), Some("#2196F3"));
    }

    #[test]
    fn remove_nodes() {
        let mut doc = document();
        let entry = remove_entry(&mut doc, 0, 1).unwrap();
        assert_eq!(entry.id, "curl");
        assert_eq!(doc.categories[0].entries.len(), 1);

        let category = remove_category(&mut doc, 0).unwrap();
        assert_eq!(category.id, "net");
        assert_eq!(doc.categories.len(), 1);
        assert_eq!(doc.categories[0].id, "fs");
        assert!(!doc.entry_ids().contains("ping"));
    }

    #[test]
    fn remove_out_of_range_is_an_error() {
        let mut doc = document();
        let before = doc.clone();
        assert!(matches!(
            remove_category(&mut doc, 2),
            Err(DocumentError::CategoryNotFound { index: 2 })
        ));
        assert!(matches!(
            remove_entry(&mut doc, 1, 1),
            Err(DocumentError::EntryNotFound { category: 1, index: 1 })
        ));
        assert!(matches!(
            remove_entry(&mut doc, 4, 0),
            Err(DocumentError::CategoryNotFound { index: 4 })
        ));
        assert_eq!(doc, before);
    }

    #[test]
    fn move_swaps_with_neighbour() {
        let mut doc = document();
        assert_eq!(move_entry(&mut doc, 0, 0, Direction::Down).unwrap(), Some(1));
        let ids: Vec<_> = doc.categories[0].entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["curl", "ping"]);

        assert_eq!(move_category(&mut doc, 1, Direction::Up).unwrap(), Some(0));
        assert_eq!(doc.categories[0].id, "fs");
        assert_eq!(doc.categories[1].id, "net");
    }

    #[test]
    fn move_at_boundary_is_a_no_op() {
        let mut doc = document();
        let before = doc.clone();
        assert_eq!(move_category(&mut doc, 0, Direction::Up).unwrap(), None);
        assert_eq!(move_category(&mut doc, 1, Direction::Down).unwrap(), None);
        assert_eq!(move_entry(&mut doc, 0, 0, Direction::Up).unwrap(), None);
        assert_eq!(move_entry(&mut doc, 0, 1, Direction::Down).unwrap(), None);
        assert_eq!(move_entry(&mut doc, 1, 0, Direction::Down).unwrap(), None);
        assert_eq!(doc, before);
    }

    #[test]
    fn move_out_of_range_is_an_error() {
        let mut doc = document();
        assert!(matches!(
            move_category(&mut doc, 3, Direction::Up),
            Err(DocumentError::CategoryNotFound { index: 3 })
        ));
        assert!(matches!(
            move_entry(&mut doc, 0, 2, Direction::Up),
            Err(DocumentError::EntryNotFound { category: 0, index: 2 })
        ));
    }
}
