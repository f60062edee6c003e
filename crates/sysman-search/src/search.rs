//! Ranking entries against a query.

use std::cmp::Ordering;

use serde::{Serialize, Serializer, ser::SerializeStruct};
use sysman_document::{Category, Document, Entry};
use tracing::debug;

use crate::{scorer::score_entry, tokenize::tokenize};

/// An entry that survived filtering.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoredEntry<'a> {
    /// The matched entry.
    pub entry: &'a Entry,
    /// Relevance score, or `None` when the query had no tokens and nothing was scored.
    pub score: Option<f64>,
    /// Position of the entry in the input slice.
    pub index: usize,
}

/// Matches within one category of an advanced search.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryMatches<'a> {
    /// The searched category.
    #[serde(serialize_with = "serialize_category_ref")]
    pub category: &'a Category,
    /// Surviving entries, best first.
    pub entries: Vec<ScoredEntry<'a>>,
}

/// Serializes a category as its id and name only.
fn serialize_category_ref<S: Serializer>(
    category: &&Category,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("Category", 2)?;
    state.serialize_field("id", &category.id)?;
    state.serialize_field("name", &category.name)?;
    state.end()
}

/// Filters and ranks `entries` against `query`.
///
/// A query with no tokens returns every entry in input order. Otherwise entries scoring at
/// least `min_score` are returned, best first; entries with equal scores keep input order.
pub fn search_entries<'a>(entries: &'a [Entry], query: &str, min_score: f64) -> Vec<&'a Entry> {
    search_entries_scored(entries, query, min_score)
        .into_iter()
        .map(|scored| scored.entry)
        .collect()
}

/// Like [`search_entries`] but keeps each entry's score and input position.
pub fn search_entries_scored<'a>(
    entries: &'a [Entry],
    query: &str,
    min_score: f64,
) -> Vec<ScoredEntry<'a>> {
    let tokens = if query.trim().is_empty() {
        Vec::new()
    } else {
        tokenize(query)
    };

    if tokens.is_empty() {
        debug!(entries = entries.len(), "empty query, passing entries through");
        return entries
            .iter()
            .enumerate()
            .map(|(index, entry)| ScoredEntry {
                entry,
                score: None,
                index,
            })
            .collect();
    }

    let mut results: Vec<ScoredEntry<'a>> = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let score = score_entry(entry, &tokens);
            (score >= min_score).then_some(ScoredEntry {
                entry,
                score: Some(score),
                index,
            })
        })
        .collect();

    // Stable, so equal scores stay in input order.
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    debug!(
        ?tokens,
        candidates = entries.len(),
        matched = results.len(),
        min_score,
        "searched entries"
    );
    results
}

/// Searches every category of `document` independently.
///
/// Groups come back in category order, each ranked like [`search_entries`]. Categories with
/// no surviving entries are left out.
pub fn search_document<'a>(
    document: &'a Document,
    query: &str,
    min_score: f64,
) -> Vec<CategoryMatches<'a>> {
    let groups: Vec<CategoryMatches<'a>> = document
        .categories
        .iter()
        .filter_map(|category| {
            let entries = search_entries_scored(&category.entries, query, min_score);
            (!entries.is_empty()).then_some(CategoryMatches { category, entries })
        })
        .collect();

    debug!(
        document = %document.id,
        categories = document.categories.len(),
        groups = groups.len(),
        "searched document"
    );
    groups
}
