//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Why a query word was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidWordReason {
    /// The word contains a digit, punctuation or other non-letter.
    NonAlphabetic,
    /// The word is on the stopword list.
    Stopword,
}

impl fmt::Display for InvalidWordReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonAlphabetic => write!(f, "contains non-alphabetic token"),
            Self::Stopword => write!(f, "contains stopword"),
        }
    }
}

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<PathBuf>,
    },

    /// CSV syntax or encoding error in the song data
    #[error("Song data error in {path:?}: {source}")]
    Csv {
        /// The underlying CSV error.
        source: csv::Error,
        /// File being read, if known.
        path: Option<PathBuf>,
    },

    /// A song record without exactly three fields
    #[error("Malformed row at line {line}: expected 3 fields (artist, title, lyrics), found {fields}")]
    MalformedRow {
        /// Line in the source where the record starts.
        line: u64,
        /// Number of fields actually present.
        fields: usize,
    },

    /// A query word failed validation
    #[error("Invalid query word {word:?}: {reason}")]
    InvalidQueryWord {
        /// The offending word.
        word: String,
        /// Which rule it broke.
        reason: InvalidWordReason,
    },

    /// A search was attempted with no words
    #[error("Query contains no words")]
    EmptyQuery,

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a CSV error with file context
    pub fn csv(source: csv::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Csv { source, path: path.into() }
    }

    /// Create an invalid query word error
    pub fn invalid_word(word: impl Into<String>, reason: InvalidWordReason) -> Self {
        Self::InvalidQueryWord { word: word.into(), reason }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Whether the caller can recover by asking the user again.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::InvalidQueryWord { .. } | Self::EmptyQuery)
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Self::Csv { source: e, path: None }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Msg(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn invalid_word_reports_reason() {
        let err = Error::invalid_word("c4t", InvalidWordReason::NonAlphabetic);
        assert!(err.to_string().contains("contains non-alphabetic token"));

        let err = Error::invalid_word("the", InvalidWordReason::Stopword);
        assert!(err.to_string().contains("contains stopword"));
    }

    #[test]
    fn only_query_errors_are_retryable() {
        assert!(Error::invalid_word("x1", InvalidWordReason::NonAlphabetic).is_retryable());
        assert!(Error::EmptyQuery.is_retryable());
        assert!(!Error::MalformedRow { line: 3, fields: 2 }.is_retryable());
        assert!(!Error::config("bad", "fix it").is_retryable());
    }

    #[test]
    fn malformed_row_names_line_and_field_count() {
        let err = Error::MalformedRow { line: 7, fields: 2 };
        let msg = err.to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("found 2"));
    }
}
