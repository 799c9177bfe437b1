//! Per-artist statistics derived from a [`CorpusIndex`].
//!
//! Everything here is a pure function of the index. Artists are independent,
//! so each function maps over them in parallel.

use std::collections::HashMap;

use rayon::prelude::*;
use serde::Serialize;

use crate::corpus::CorpusIndex;
use crate::types::{ArtistName, WordSet};

/// Summary of one artist's vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistStats {
    /// The artist.
    pub artist: ArtistName,
    /// Mean number of distinct valid words per song.
    pub average_word_count: f64,
    /// Distinct valid words across all of the artist's songs.
    pub vocabulary_size: usize,
    /// Number of distinct song titles.
    pub song_count: usize,
}

/// Sum of word set sizes divided by song count.
#[allow(clippy::cast_precision_loss)]
fn average_for(index: &CorpusIndex, artist: &ArtistName) -> f64 {
    let (songs, words) = index
        .songs_of(artist)
        .fold((0usize, 0usize), |(songs, words), (_, ws)| (songs + 1, words + ws.len()));
    words as f64 / songs as f64
}

fn vocabulary_for(index: &CorpusIndex, artist: &ArtistName) -> WordSet {
    let mut vocab = WordSet::new();
    for (_, words) in index.songs_of(artist) {
        vocab.union_with(words);
    }
    vocab
}

fn artist_list(index: &CorpusIndex) -> Vec<&ArtistName> {
    index.artists().collect()
}

/// Average distinct-word count per song, for every artist.
pub fn average_word_count(index: &CorpusIndex) -> HashMap<ArtistName, f64> {
    artist_list(index)
        .into_par_iter()
        .map(|artist| (artist.clone(), average_for(index, artist)))
        .collect()
}

/// Union of all song word sets, for every artist.
pub fn distinct_vocabulary(index: &CorpusIndex) -> HashMap<ArtistName, WordSet> {
    artist_list(index)
        .into_par_iter()
        .map(|artist| (artist.clone(), vocabulary_for(index, artist)))
        .collect()
}

/// All statistics for every artist, in first-appearance order.
pub fn artist_stats(index: &CorpusIndex) -> Vec<ArtistStats> {
    artist_list(index)
        .into_par_iter()
        .map(|artist| ArtistStats {
            artist: artist.clone(),
            average_word_count: average_for(index, artist),
            vocabulary_size: vocabulary_for(index, artist).len(),
            song_count: index.song_count(artist),
        })
        .collect()
}
