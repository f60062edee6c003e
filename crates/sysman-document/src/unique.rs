//! Collision-free name and id generation for duplicated nodes.
//!
//! Copies are named after their original with a numeric suffix: names get ` (N)` and ids get
//! `_N`. Any suffix already present on the original is stripped first, so duplicating a copy
//! yields `ping (2)` rather than `ping (1) (1)`.
//!
//! The first copy of an item whose id is not yet taken keeps the bare base name and id; the
//! counter only starts once the original id is in use.

use std::{
    collections::{BTreeSet, HashSet},
    hash::BuildHasher,
};

/// A set of identifiers that are already taken.
pub trait IdSet {
    /// Returns true if `id` is taken.
    fn contains_id(&self, id: &str) -> bool;
}

impl<S: BuildHasher> IdSet for HashSet<String, S> {
    fn contains_id(&self, id: &str) -> bool {
        self.contains(id)
    }
}

impl IdSet for BTreeSet<String> {
    fn contains_id(&self, id: &str) -> bool {
        self.contains(id)
    }
}

impl IdSet for [String] {
    fn contains_id(&self, id: &str) -> bool {
        self.iter().any(|existing| existing == id)
    }
}

impl IdSet for Vec<String> {
    fn contains_id(&self, id: &str) -> bool {
        self.as_slice().contains_id(id)
    }
}

/// A display name paired with its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameAndId {
    /// Display name.
    pub name: String,
    /// Identifier.
    pub id: String,
}

impl NameAndId {
    /// Creates a pair from borrowed parts.
    pub fn new(name: &str, id: &str) -> Self {
        Self {
            name: name.to_string(),
            id: id.to_string(),
        }
    }
}

/// Produces a `(name, id)` pair whose id does not collide with `existing`.
///
/// 1. Strips a trailing ` (N)` from the name and a trailing `_N` from the id.
/// 2. If `original_id` itself is free, returns the stripped base pair.
/// 3. Otherwise tries `base (1)` / `base_1`, `base (2)` / `base_2`, ... and returns the first
///    candidate whose id is free.
///
/// The function is pure. Callers must add the returned id to `existing` before generating the
/// next sibling.
pub fn unique_name_and_id<S>(original_name: &str, original_id: &str, existing: &S) -> NameAndId
where
    S: IdSet + ?Sized,
{
    let base_name = strip_name_suffix(original_name);
    let base_id = strip_id_suffix(original_id);

    if !existing.contains_id(original_id) {
        return NameAndId::new(base_name, base_id);
    }

    // A finite set cannot hold every counter value, so this terminates.
    (1_usize..)
        .map(|n| NameAndId {
            name: format!("{base_name} ({n})"),
            id: format!("{base_id}_{n}"),
        })
        .find(|candidate| !existing.contains_id(&candidate.id))
        .unwrap_or_else(|| NameAndId::new(base_name, base_id))
}

/// Removes a trailing ` (N)` counter from a display name.
fn strip_name_suffix(name: &str) -> &str {
    if let Some(rest) = name.strip_suffix(')')
        && let Some(open) = rest.rfind(" (")
        && is_counter(&rest[open + 2..])
    {
        return name[..open].trim();
    }
    name.trim()
}

/// Removes a trailing `_N` counter from an identifier.
fn strip_id_suffix(id: &str) -> &str {
    if let Some(underscore) = id.rfind('_')
        && is_counter(&id[underscore + 1..])
    {
        return id[..underscore].trim();
    }
    id.trim()
}

/// Returns true for a non-empty run of ASCII digits.
fn is_counter(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
