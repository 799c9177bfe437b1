//! Lyrics processing.
//!
//! Normalizes raw lyric text into the set of distinct valid words a song uses,
//! filtered through a stopword list.

pub mod stopwords;
pub mod tokenize;

pub use stopwords::StopwordSet;
pub use tokenize::{check_word, is_valid_word, tokenize_lyrics};
