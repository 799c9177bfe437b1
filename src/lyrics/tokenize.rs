//! Word validation and lyric tokenization.

use crate::error::InvalidWordReason;
use crate::lyrics::StopwordSet;
use crate::types::WordSet;

/// Check a single (already lowercased) word against the validity rules.
///
/// A word is valid when it is non-empty, made only of alphabetic characters
/// and not a stopword.
pub fn check_word(word: &str, stopwords: &StopwordSet) -> Result<(), InvalidWordReason> {
    if word.is_empty() || !word.chars().all(char::is_alphabetic) {
        return Err(InvalidWordReason::NonAlphabetic);
    }
    if stopwords.contains(word) {
        return Err(InvalidWordReason::Stopword);
    }
    Ok(())
}

/// Whether `word` may appear in a [`WordSet`].
pub fn is_valid_word(word: &str, stopwords: &StopwordSet) -> bool {
    check_word(word, stopwords).is_ok()
}

/// Lowercase a raw token and strip surrounding whitespace and ASCII punctuation.
///
/// Interior punctuation (`don't`, `rock-n-roll`) is left in place.
fn normalize_token(token: &str) -> String {
    token
        .to_lowercase()
        .trim()
        .trim_matches(|c: char| c.is_ascii_punctuation())
        .to_string()
}

/// Split lyric text into the set of distinct valid words it contains.
pub fn tokenize_lyrics(text: &str, stopwords: &StopwordSet) -> WordSet {
    text.split_whitespace()
        .map(normalize_token)
        .filter(|word| is_valid_word(word, stopwords))
        .collect()
}
