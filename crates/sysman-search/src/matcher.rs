//! Scoring a single query token against a single text field.

use crate::{similarity::similarity_ratio, tokenize::words};

/// Score for a token equal to the whole field, or to one of its words.
pub const EXACT_MATCH: f64 = 1.0;
/// Score for a token contained somewhere in the field text.
pub const SUBSTRING_MATCH: f64 = 0.6;
/// Candidate score for a token contained in a word, or a word contained in the token.
pub const PARTIAL_WORD_MATCH: f64 = 0.7;
/// Multiplier applied to word-level fuzzy matches.
pub const FUZZY_PENALTY: f64 = 0.9;

/// Scores how well `token` matches `text`, in `[0.0, 1.0]`.
///
/// Checks run in a fixed order, and the first one that applies decides:
/// 1. An empty token or text scores 0.0.
/// 2. A token equal to the whole text (ignoring case) scores [`EXACT_MATCH`].
/// 3. A token contained in the text scores [`SUBSTRING_MATCH`].
/// 4. Otherwise each word of the text is compared. A word equal to the token returns
///    [`EXACT_MATCH`] immediately. A word containing the token, or contained in it, is a
///    [`PARTIAL_WORD_MATCH`] candidate. Any other word contributes its similarity ratio. The
///    best candidate, scaled by [`FUZZY_PENALTY`], is the result.
pub fn match_score(token: &str, text: &str) -> f64 {
    if token.is_empty() || text.is_empty() {
        return 0.0;
    }

    let token = token.to_lowercase();
    let text = text.to_lowercase();

    if token == text {
        return EXACT_MATCH;
    }
    if text.contains(&token) {
        return SUBSTRING_MATCH;
    }

    let mut best: f64 = 0.0;
    for word in words(&text) {
        if word == token {
            return EXACT_MATCH;
        }
        let candidate = if word.contains(&token) || token.contains(word) {
            PARTIAL_WORD_MATCH
        } else {
            similarity_ratio(&token, word)
        };
        best = best.max(candidate);
    }

    best * FUZZY_PENALTY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_inputs_score_zero() {
        assert!(approx(match_score("", "anything"), 0.0));
        assert!(approx(match_score("ping", ""), 0.0));
        assert!(approx(match_score("", ""), 0.0));
    }

    #[test]
    fn whole_text_match_ignores_case() {
        assert!(approx(match_score("PING", "ping"), 1.0));
        assert!(approx(match_score("curl", "CuRl"), 1.0));
    }

    #[test]
    fn substring_of_text() {
        assert!(approx(match_score("ping", "ping -c 4 host"), SUBSTRING_MATCH));
        assert!(approx(match_score("alpha", "alpha-widget"), SUBSTRING_MATCH));
    }

    #[test]
    fn substring_wins_over_later_exact_word() {
        // "host" is a substring of the text, so the word loop never runs.
        assert!(approx(match_score("host", "ping -c 4 host"), SUBSTRING_MATCH));
    }

    #[test]
    fn word_containing_token_is_partial() {
        // "widgets" is contained in no part of the text, but "widget" is inside the token.
        assert!(approx(
            match_score("widgets", "alpha widget"),
            PARTIAL_WORD_MATCH * FUZZY_PENALTY
        ));
    }

    #[test]
    fn fuzzy_word_match_is_penalized() {
        // "netsat" vs "netstat": 12/13 similarity.
        let score = match_score("netsat", "show netstat output");
        assert!(approx(score, 12.0 / 13.0 * FUZZY_PENALTY));
    }

    #[test]
    fn partial_beats_weaker_fuzzy_words() {
        let score = match_score("configs", "xyz config");
        assert!(approx(score, PARTIAL_WORD_MATCH * FUZZY_PENALTY));
    }

    #[test]
    fn unrelated_text_scores_zero() {
        assert!(approx(match_score("alpha", "zzz"), 0.0));
    }

    #[test]
    fn results_are_bounded() {
        for (token, text) in [
            ("ping", "send ICMP echo"),
            ("transfer", "transfer data from a URL"),
            ("x", "x"),
            ("longtoken", "a b c d"),
        ] {
            let score = match_score(token, text);
            assert!((0.0..=1.0).contains(&score), "{token} vs {text}: {score}");
        }
    }
}
