//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Corpus ingestion constants.
pub mod corpus {
    /// Fields per song record: artist, title, lyrics.
    pub const SONG_FIELDS: usize = 3;

    /// Rows indexed per parallel chunk before merging.
    pub const BUILD_CHUNK_ROWS: usize = 1024;
}

/// Ranking and search output constants.
pub mod display {
    /// Default number of artists in the ranking table.
    pub const DEFAULT_TOP_ARTISTS: usize = 10;

    /// Default number of search matches printed after the count.
    pub const DEFAULT_PREVIEW_ROWS: usize = 5;

    /// Width of each column in the ranking and search tables.
    pub const COLUMN_WIDTH: usize = 20;

    /// Total width of the ranking table.
    pub const TABLE_WIDTH: usize = 80;
}

/// Environment variable names read by [`crate::config::Config::load`].
pub mod env {
    /// Default stopword file path.
    pub const STOPWORDS: &str = "LYRICSTATS_STOPWORDS";

    /// Default song data file path.
    pub const SONGDATA: &str = "LYRICSTATS_SONGDATA";

    /// Number of artists in the ranking table.
    pub const TOP_ARTISTS: &str = "LYRICSTATS_TOP_ARTISTS";

    /// Number of search matches to print.
    pub const PREVIEW_ROWS: &str = "LYRICSTATS_PREVIEW_ROWS";
}
