//! Word tokenization shared by queries and entry text.

/// Returns true for characters that belong to a word: letters, digits, and underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Splits already-lowercased text into word slices.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty())
}

/// Splits text into lowercase word tokens.
///
/// A word is a maximal run of letters, digits, or underscores; everything else separates
/// words. Empty input yields no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    words(&text.to_lowercase()).map(str::to_string).collect()
}
