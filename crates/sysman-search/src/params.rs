//! Search modes and their thresholds.

use std::fmt;

use serde::Serialize;

/// Default threshold for live, single-category filtering.
pub const DEFAULT_LIVE_MIN_SCORE: f64 = 0.12;
/// Default threshold for advanced, cross-category search.
pub const DEFAULT_ADVANCED_MIN_SCORE: f64 = 0.15;

/// Which search call site a query comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Keystroke-by-keystroke filtering of one category. Inclusive threshold.
    Live,
    /// Search over every category, results grouped per category.
    Advanced,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live => f.write_str("live"),
            Self::Advanced => f.write_str("advanced"),
        }
    }
}

/// Thresholds for both search modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParams {
    /// Minimum score in live mode.
    pub live_min_score: f64,
    /// Minimum score in advanced mode.
    pub advanced_min_score: f64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            live_min_score: DEFAULT_LIVE_MIN_SCORE,
            advanced_min_score: DEFAULT_ADVANCED_MIN_SCORE,
        }
    }
}

impl SearchParams {
    /// Returns the threshold for `mode`.
    pub fn min_score(&self, mode: SearchMode) -> f64 {
        match mode {
            SearchMode::Live => self.live_min_score,
            SearchMode::Advanced => self.advanced_min_score,
        }
    }

    /// Replaces both thresholds with `min_score`, if given.
    pub fn with_override(self, min_score: Option<f64>) -> Self {
        match min_score {
            Some(min_score) => Self {
                live_min_score: min_score,
                advanced_min_score: min_score,
            },
            None => self,
        }
    }
}
