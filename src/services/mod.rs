//! Query services over a built corpus.
//!
//! Statistics, ranking and search are pure functions of a
//! [`CorpusIndex`](crate::corpus::CorpusIndex); none of them mutate it.

pub mod ranking;
pub mod search;
pub mod stats;

pub use ranking::{rank_artists, top_artists};
pub use search::{parse_request, search, Query, QueryRequest, SearchResult, SongMatch};
pub use stats::{artist_stats, average_word_count, distinct_vocabulary, ArtistStats};
