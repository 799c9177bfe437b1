//! Index construction.
//!
//! Rows are split into chunks, each chunk is indexed on its own, and the
//! partial indices are merged in input order. Because merging lets the later
//! chunk win, the result is the same as inserting every row sequentially.

use rayon::prelude::*;

use crate::constants::corpus::BUILD_CHUNK_ROWS;
use crate::corpus::{CorpusIndex, SongRow};
use crate::lyrics::{tokenize_lyrics, StopwordSet};

impl CorpusIndex {
    /// Build an index from song rows (header already removed).
    pub fn build(rows: &[SongRow], stopwords: &StopwordSet) -> Self {
        let index = rows
            .par_chunks(BUILD_CHUNK_ROWS)
            .map(|chunk| Self::build_chunk(chunk, stopwords))
            .reduce(Self::default, Self::merge);

        tracing::info!(
            "Indexed {} rows into {} songs by {} artists",
            rows.len(),
            index.len(),
            index.artist_count()
        );
        index
    }

    /// Index one contiguous run of rows sequentially.
    fn build_chunk(rows: &[SongRow], stopwords: &StopwordSet) -> Self {
        let mut index = Self::default();
        for row in rows {
            let words = tokenize_lyrics(&row.lyrics.to_lowercase(), stopwords);
            index.insert(row.artist.clone(), row.song.clone(), words);
        }
        index
    }

    /// Combine two indices built from consecutive parts of the input.
    ///
    /// Songs in `later` replace same-keyed songs in `self`. Artists keep their
    /// first appearance across `self` then `later`.
    #[must_use]
    pub fn merge(mut self, later: Self) -> Self {
        for artist in later.artist_order {
            if !self.contains_artist(&artist) {
                self.artist_order.push(artist);
            }
        }
        self.songs.extend(later.songs);
        self
    }
}
