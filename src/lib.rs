//! `lyricstats` - per-artist lyric vocabulary statistics and word-set song search.
//!
//! Builds an in-memory index of every song's distinct valid words, ranks
//! artists by average vocabulary per song, and finds songs containing all of
//! a set of query words.


// Re-export public modules for use in integration tests and as a library
pub mod app;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod error;
pub mod lyrics;
pub mod services;
pub mod types;
pub mod ui;
