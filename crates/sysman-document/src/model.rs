//! The manual data model.
//!
//! A [`Document`] holds ordered [`Category`] values, each holding ordered [`Entry`] values.
//! Category ids are unique within a document; entry ids are unique across the whole document,
//! not just within their category.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

/// A manual: the top-level container of categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Manual identifier, unique within a loaded library.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description shown under the title.
    pub description: String,
    /// Optional colour theme. Preserved across load/save, otherwise unused.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    /// Categories in display order.
    pub categories: Vec<Category>,
}

/// Colour theme attached to a manual.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Primary colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    /// Accent colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

/// A named group of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier, unique within its document.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Entries in display order.
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// The leaf content unit of a manual.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Entry identifier, unique across the whole document.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Key/value content (for example `syntax` or `path`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub content: BTreeMap<String, String>,
    /// Command examples.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
    /// Expandable label/value annotations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<Detail>,
    /// Free-text notes.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

/// A command example.
///
/// Manuals write examples either as a bare command string or as an object with a command and
/// an optional explanation. Both carry the same content; use [`Example::parts`] to read them
/// uniformly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Example {
    /// A bare command string.
    Command(String),
    /// A command with an optional explanation.
    Described {
        /// The command text.
        command: String,
        /// What the command does.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl Example {
    /// Returns the command text.
    pub fn command(&self) -> &str {
        self.parts().0
    }

    /// Returns the explanation, if any.
    pub fn description(&self) -> Option<&str> {
        self.parts().1
    }

    /// Normalizes both representations to `(command, description)`.
    pub fn parts(&self) -> (&str, Option<&str>) {
        match self {
            Self::Command(command) => (command, None),
            Self::Described {
                command,
                description,
            } => (command, description.as_deref()),
        }
    }
}

impl From<&str> for Example {
    fn from(command: &str) -> Self {
        Self::Command(command.to_string())
    }
}

/// An expandable annotation on an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    /// Heading for the annotation.
    #[serde(default)]
    pub label: String,
    /// Annotation body.
    #[serde(default)]
    pub value: String,
}

impl Document {
    /// Returns the ids of every category in this document.
    pub fn category_ids(&self) -> HashSet<String> {
        self.categories.iter().map(|c| c.id.clone()).collect()
    }

    /// Returns the ids of every entry across all categories.
    pub fn entry_ids(&self) -> HashSet<String> {
        self.entries().map(|(_, e)| e.id.clone()).collect()
    }

    /// Iterates over every entry together with its category, in display order.
    pub fn entries(&self) -> impl Iterator<Item = (&Category, &Entry)> {
        self.categories
            .iter()
            .flat_map(|c| c.entries.iter().map(move |e| (c, e)))
    }

    /// Total number of entries across all categories.
    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    /// Returns the index of the category with the given id.
    pub fn category_position(&self, id: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.id == id)
    }

    /// Returns the category with the given id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Returns `(category_index, entry_index)` for the entry with the given id.
    pub fn entry_position(&self, id: &str) -> Option<(usize, usize)> {
        self.categories.iter().enumerate().find_map(|(ci, c)| {
            c.entries
                .iter()
                .position(|e| e.id == id)
                .map(|ei| (ci, ei))
        })
    }

    /// Returns the entry with the given id and the category holding it.
    pub fn entry(&self, id: &str) -> Option<(&Category, &Entry)> {
        self.entries().find(|(_, e)| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        serde_json::from_str(
            r#"{
                "id": "ops",
                "name": "Ops",
                "description": "Operations manual",
                "categories": [
                    {"id": "net", "name": "Network", "entries": [
                        {"id": "e1", "name": "ping", "description": "send ICMP echo",
                         "examples": ["ping -c 4 host", {"command": "ping -6 host", "description": "IPv6"}]}
                    ]},
                    {"id": "fs", "name": "Files", "entries": [
                        {"id": "e2", "name": "ls", "description": "list files",
                         "content": {"syntax": "ls [opts]"},
                         "details": [{"label": "Flags", "value": "-l long"}],
                         "notes": "GNU coreutils"}
                    ]}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let doc = sample();
        let (_, ping) = doc.entry("e1").unwrap();
        assert!(ping.content.is_empty());
        assert!(ping.details.is_empty());
        assert!(ping.notes.is_empty());
        assert!(doc.theme.is_none());
    }

    #[test]
    fn example_forms_normalize() {
        let doc = sample();
        let (_, ping) = doc.entry("e1").unwrap();
        assert_eq!(ping.examples[0].parts(), ("ping -c 4 host", None));
        assert_eq!(ping.examples[1].parts(), ("ping -6 host", Some("IPv6")));
        assert_eq!(ping.examples[1].command(), "ping -6 host");
    }

    #[test]
    fn described_example_without_description() {
        let ex: Example = serde_json::from_str(r#"{"command": "uptime"}"#).unwrap();
        assert_eq!(ex.command(), "uptime");
        assert!(ex.description().is_none());
    }

    #[test]
    fn ids_span_categories() {
        let doc = sample();
        let entry_ids = doc.entry_ids();
        assert!(entry_ids.contains("e1"));
        assert!(entry_ids.contains("e2"));
        assert_eq!(doc.entry_count(), 2);
        assert_eq!(doc.category_ids().len(), 2);
    }

    #[test]
    fn positions() {
        let doc = sample();
        assert_eq!(doc.category_position("fs"), Some(1));
        assert_eq!(doc.entry_position("e2"), Some((1, 0)));
        assert!(doc.entry_position("missing").is_none());
        assert_eq!(doc.entry("e2").unwrap().0.id, "fs");
    }

    #[test]
    fn serialization_skips_empty_fields() {
        let entry = Entry {
            id: "x".into(),
            name: "X".into(),
            description: "d".into(),
            ..Entry::default()
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"id":"x","name":"X","description":"d"}"#);
    }
}
