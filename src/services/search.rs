//! Word-set song search.
//!
//! A song matches a query when every query word appears in the song's
//! vocabulary. Queries are validated before they can be built, so the search
//! itself cannot fail.

use serde::Serialize;

use crate::corpus::CorpusIndex;
use crate::error::{Error, Result};
use crate::lyrics::{check_word, StopwordSet};
use crate::types::{ArtistName, SongTitle, WordSet};

/// A non-empty set of valid words to search for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    words: WordSet,
}

impl Query {
    /// Validate `words` and wrap them as a query.
    ///
    /// Words are checked in sorted order and the first invalid one is reported.
    pub fn new(words: WordSet, stopwords: &StopwordSet) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::EmptyQuery);
        }
        for word in words.iter() {
            check_word(word, stopwords).map_err(|reason| Error::invalid_word(word, reason))?;
        }
        Ok(Self { words })
    }

    /// The validated words.
    pub const fn words(&self) -> &WordSet {
        &self.words
    }
}

/// What the user asked for with one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryRequest {
    /// Blank input: stop searching.
    Exit,
    /// Run this search.
    Search(Query),
}

/// Interpret one line of interactive input.
///
/// The line is lowercased and split on whitespace. Punctuation is not
/// stripped, so `cat,` is rejected rather than silently corrected.
pub fn parse_request(line: &str, stopwords: &StopwordSet) -> Result<QueryRequest> {
    let words: WordSet = line.to_lowercase().split_whitespace().map(str::to_string).collect();
    if words.is_empty() {
        return Ok(QueryRequest::Exit);
    }
    Query::new(words, stopwords).map(QueryRequest::Search)
}

/// A song that matched a query.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct SongMatch {
    /// The performing artist.
    pub artist: ArtistName,
    /// The matching song.
    pub song: SongTitle,
}

/// Matches ordered by artist, then song.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchResult {
    matches: Vec<SongMatch>,
}

impl SearchResult {
    /// Number of matching songs.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// All matches in order.
    pub fn matches(&self) -> &[SongMatch] {
        &self.matches
    }

    /// At most the first `n` matches.
    pub fn first(&self, n: usize) -> &[SongMatch] {
        &self.matches[..n.min(self.matches.len())]
    }

    /// Whether `(artist, song)` is among the matches.
    pub fn contains(&self, artist: &ArtistName, song: &SongTitle) -> bool {
        self.matches
            .binary_search_by(|m| (&m.artist, &m.song).cmp(&(artist, song)))
            .is_ok()
    }
}

/// Find every song whose vocabulary contains all of the query's words.
pub fn search(index: &CorpusIndex, query: &Query) -> SearchResult {
    let mut matches: Vec<SongMatch> = index
        .entries()
        .filter(|(_, _, words)| query.words().is_subset(words))
        .map(|(artist, song, _)| SongMatch {
            artist: artist.clone(),
            song: song.clone(),
        })
        .collect();
    matches.sort();

    tracing::debug!("Query [{}] matched {} songs", query.words().join(" "), matches.len());
    SearchResult { matches }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::corpus::SongRow;
    use crate::error::InvalidWordReason;

    fn stopwords() -> StopwordSet {
        StopwordSet::from_lines(["the", "a"])
    }

    fn query(words: &[&str]) -> Query {
        Query::new(words.iter().copied().collect(), &stopwords()).unwrap()
    }

    fn pairs(result: &SearchResult) -> Vec<(&str, &str)> {
        result
            .matches()
            .iter()
            .map(|m| (m.artist.as_str(), m.song.as_str()))
            .collect()
    }

    fn example_index() -> CorpusIndex {
        let rows = vec![
            SongRow::new("Art1", "S1", "the cat sat"),
            SongRow::new("Art1", "S2", "a dog ran fast"),
        ];
        CorpusIndex::build(&rows, &stopwords())
    }

    fn mixed_index() -> CorpusIndex {
        let rows = vec![
            SongRow::new("Zappa", "Zoot", "love and the night"),
            SongRow::new("Abba", "SOS", "love me night and day"),
            SongRow::new("Abba", "Mamma Mia", "love again night"),
            SongRow::new("Cher", "Believe", "life after love"),
            SongRow::new("Abba", "Chiquitita", "sorrow"),
        ];
        CorpusIndex::build(&rows, &stopwords())
    }

    #[test]
    fn test_example_search() {
        let index = example_index();
        assert_eq!(pairs(&search(&index, &query(&["cat"]))), vec![("Art1", "S1")]);
        assert!(search(&index, &query(&["cat", "dog"])).is_empty());
    }

    #[test]
    fn test_results_sorted_by_artist_then_song() {
        let result = search(&mixed_index(), &query(&["love"]));
        assert_eq!(
            pairs(&result),
            vec![
                ("Abba", "Mamma Mia"),
                ("Abba", "SOS"),
                ("Cher", "Believe"),
                ("Zappa", "Zoot"),
            ]
        );
    }

    #[test]
    fn test_uppercase_sorts_before_lowercase() {
        let rows = vec![
            SongRow::new("abba", "x", "word"),
            SongRow::new("Abba", "y", "word"),
            SongRow::new("ABBA", "z", "word"),
        ];
        let index = CorpusIndex::build(&rows, &stopwords());
        let result = search(&index, &query(&["word"]));
        assert_eq!(pairs(&result), vec![("ABBA", "z"), ("Abba", "y"), ("abba", "x")]);
    }

    #[test]
    fn test_search_is_monotonic() {
        let index = mixed_index();
        let narrow = search(&index, &query(&["love", "night", "again"]));
        let wide = search(&index, &query(&["love", "night"]));
        let widest = search(&index, &query(&["love"]));

        assert!(!narrow.is_empty());
        for m in narrow.matches() {
            assert!(wide.contains(&m.artist, &m.song));
        }
        for m in wide.matches() {
            assert!(widest.contains(&m.artist, &m.song));
        }
    }

    #[test]
    fn test_search_is_repeatable() {
        let index = mixed_index();
        let q = query(&["night"]);
        assert_eq!(search(&index, &q), search(&index, &q));
    }

    #[test]
    fn test_first_caps_at_length() {
        let result = search(&mixed_index(), &query(&["love"]));
        assert_eq!(result.first(2).len(), 2);
        assert_eq!(result.first(50).len(), result.len());
    }

    #[test]
    fn test_query_rejects_empty() {
        assert!(matches!(
            Query::new(WordSet::new(), &stopwords()),
            Err(Error::EmptyQuery)
        ));
    }

    #[test]
    fn test_query_rejects_invalid_words() {
        let err = Query::new(["cat", "the"].into_iter().collect(), &stopwords()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidQueryWord { ref word, reason: InvalidWordReason::Stopword } if word == "the"
        ));

        let err = Query::new(["c4t"].into_iter().collect(), &stopwords()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidQueryWord { reason: InvalidWordReason::NonAlphabetic, .. }
        ));
    }

    #[test]
    fn test_parse_request_blank_is_exit() {
        assert_eq!(parse_request("", &stopwords()).unwrap(), QueryRequest::Exit);
        assert_eq!(parse_request("   \t ", &stopwords()).unwrap(), QueryRequest::Exit);
    }

    #[test]
    fn test_parse_request_lowercases_and_dedups() {
        let request = parse_request("Love  NIGHT love", &stopwords()).unwrap();
        match request {
            QueryRequest::Search(q) => assert_eq!(q.words().join(" "), "love night"),
            QueryRequest::Exit => panic!("Expected a search"),
        }
    }

    #[test]
    fn test_parse_request_keeps_punctuation() {
        let err = parse_request("cat,", &stopwords()).unwrap_err();
        assert!(err.is_retryable());
        assert!(matches!(
            err,
            Error::InvalidQueryWord { reason: InvalidWordReason::NonAlphabetic, .. }
        ));
    }

    #[test]
    fn test_parse_request_rejects_stopword() {
        let err = parse_request("The cat", &stopwords()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidQueryWord { reason: InvalidWordReason::Stopword, .. }
        ));
    }
}
