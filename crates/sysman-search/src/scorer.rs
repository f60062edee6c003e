//! Weighted multi-field relevance scoring for entries.

use std::{fmt, iter};

use serde::Serialize;
use sysman_document::Entry;

use crate::matcher::match_score;

/// A searchable text surface of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// The entry name.
    Name,
    /// The entry description.
    Description,
    /// All content values, space-joined.
    Content,
    /// Example commands and their explanations, space-joined.
    Examples,
    /// Free-text notes.
    Notes,
}

impl Field {
    /// Every field, in scoring order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Description,
        Self::Content,
        Self::Examples,
        Self::Notes,
    ];

    /// Relative weight of a match in this field.
    pub const fn weight(self) -> f64 {
        match self {
            Self::Name => NAME_WEIGHT,
            Self::Description => DESCRIPTION_WEIGHT,
            Self::Content => CONTENT_WEIGHT,
            Self::Examples => EXAMPLES_WEIGHT,
            Self::Notes => NOTES_WEIGHT,
        }
    }

    /// Lowercase field name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Content => "content",
            Self::Examples => "examples",
            Self::Notes => "notes",
        }
    }

    /// Extracts this field's text from an entry.
    pub fn surface(self, entry: &Entry) -> String {
        match self {
            Self::Name => entry.name.clone(),
            Self::Description => entry.description.clone(),
            Self::Content => entry
                .content
                .values()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" "),
            Self::Examples => entry
                .examples
                .iter()
                .flat_map(|example| {
                    let (command, description) = example.parts();
                    iter::once(command).chain(description)
                })
                .collect::<Vec<_>>()
                .join(" "),
            Self::Notes => entry.notes.clone(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight of the name field.
pub const NAME_WEIGHT: f64 = 3.0;
/// Weight of the description field.
pub const DESCRIPTION_WEIGHT: f64 = 1.8;
/// Weight of the content field.
pub const CONTENT_WEIGHT: f64 = 1.5;
/// Weight of the examples field.
pub const EXAMPLES_WEIGHT: f64 = 1.2;
/// Weight of the notes field.
pub const NOTES_WEIGHT: f64 = 1.0;
/// Sum of all field weights; the per-token normalizer.
pub const TOTAL_WEIGHT: f64 =
    NAME_WEIGHT + DESCRIPTION_WEIGHT + CONTENT_WEIGHT + EXAMPLES_WEIGHT + NOTES_WEIGHT;

/// Per-field contributions to an entry's score.
///
/// Each value is already weighted and normalized, so the fields sum to [`FieldScores::total`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FieldScores {
    /// Contribution of the name field.
    pub name: f64,
    /// Contribution of the description field.
    pub description: f64,
    /// Contribution of the content field.
    pub content: f64,
    /// Contribution of the examples field.
    pub examples: f64,
    /// Contribution of the notes field.
    pub notes: f64,
}

impl FieldScores {
    /// Returns the contribution of `field`.
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Name => self.name,
            Field::Description => self.description,
            Field::Content => self.content,
            Field::Examples => self.examples,
            Field::Notes => self.notes,
        }
    }

    /// Mutable access to the contribution of `field`.
    fn get_mut(&mut self, field: Field) -> &mut f64 {
        match field {
            Field::Name => &mut self.name,
            Field::Description => &mut self.description,
            Field::Content => &mut self.content,
            Field::Examples => &mut self.examples,
            Field::Notes => &mut self.notes,
        }
    }

    /// The entry's relevance score.
    pub fn total(&self) -> f64 {
        Field::ALL.iter().map(|&field| self.get(field)).sum()
    }

    /// Fields that contributed anything, in scoring order.
    pub fn nonzero(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        Field::ALL
            .into_iter()
            .map(|field| (field, self.get(field)))
            .filter(|(_, score)| *score > 0.0)
    }
}

/// Scores `entry` against query `tokens`.
///
/// An empty token list matches everything and scores 1.0. Otherwise every token is matched
/// against each field, weighted, and the sum divided by `tokens.len() × TOTAL_WEIGHT`. A token
/// that matches several fields strongly is rewarded for each of them.
pub fn score_entry<T: AsRef<str>>(entry: &Entry, tokens: &[T]) -> f64 {
    if tokens.is_empty() {
        return 1.0;
    }
    score_entry_detailed(entry, tokens).total()
}

/// Like [`score_entry`] but keeps the per-field breakdown.
///
/// An empty token list yields all zeros, since no field did any matching.
pub fn score_entry_detailed<T: AsRef<str>>(entry: &Entry, tokens: &[T]) -> FieldScores {
    let mut scores = FieldScores::default();
    if tokens.is_empty() {
        return scores;
    }

    let normalizer = tokens.len() as f64 * TOTAL_WEIGHT;
    for field in Field::ALL {
        let surface = field.surface(entry);
        let raw: f64 = tokens
            .iter()
            .map(|token| match_score(token.as_ref(), &surface))
            .sum();
        *scores.get_mut(field) = raw * field.weight() / normalizer;
    }
    scores
}
