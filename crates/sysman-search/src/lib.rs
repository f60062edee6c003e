//! Fuzzy, relevance-ranked search over manual entries.
//!
//! Scoring runs in three layers:
//! - [`tokenize`] splits a query into lowercase word tokens
//! - [`match_score`] scores one token against one text field
//! - [`score_entry`] combines token scores over five weighted entry fields
//!
//! [`search_entries`] filters and ranks a single category's entries, and [`search_document`]
//! runs the same ranking over every category of a manual, grouped by category.

#![warn(missing_docs)]

mod matcher;
mod params;
mod scorer;
mod search;
mod similarity;
mod tokenize;

pub use matcher::{EXACT_MATCH, FUZZY_PENALTY, PARTIAL_WORD_MATCH, SUBSTRING_MATCH, match_score};
pub use params::{DEFAULT_ADVANCED_MIN_SCORE, DEFAULT_LIVE_MIN_SCORE, SearchMode, SearchParams};
pub use scorer::{
    CONTENT_WEIGHT, DESCRIPTION_WEIGHT, EXAMPLES_WEIGHT, Field, FieldScores, NAME_WEIGHT,
    NOTES_WEIGHT, TOTAL_WEIGHT, score_entry, score_entry_detailed,
};
pub use search::{CategoryMatches, ScoredEntry, search_document, search_entries, search_entries_scored};
pub use similarity::similarity_ratio;
pub use tokenize::tokenize;
