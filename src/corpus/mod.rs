//! In-memory song corpus.
//!
//! The corpus is one flat map from `(artist, song)` to the song's word set.
//! Per-artist views are derived on demand from the key ordering, so there is
//! no nested container to keep in sync.

pub mod builder;
pub mod reader;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{ArtistName, SongTitle, WordSet};

pub use reader::{load_corpus, read_song_rows};

/// One record of the song data: artist, title and raw lyrics, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRow {
    /// Performing artist.
    pub artist: ArtistName,
    /// Song title.
    pub song: SongTitle,
    /// Raw lyric text.
    pub lyrics: String,
}

impl SongRow {
    /// Create a row from its three fields.
    pub fn new(artist: impl Into<ArtistName>, song: impl Into<SongTitle>, lyrics: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            song: song.into(),
            lyrics: lyrics.into(),
        }
    }
}

/// Read-only index of every song's vocabulary, keyed by artist then title.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    songs: BTreeMap<(ArtistName, SongTitle), WordSet>,
    /// Artists in the order they first appeared in the data.
    artist_order: Vec<ArtistName>,
}

impl CorpusIndex {
    /// Total number of distinct `(artist, song)` entries.
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Whether the index holds no songs.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Number of distinct artists.
    pub fn artist_count(&self) -> usize {
        self.artist_order.len()
    }

    /// Artists in first-appearance order.
    pub fn artists(&self) -> impl Iterator<Item = &ArtistName> {
        self.artist_order.iter()
    }

    /// Whether `artist` has at least one song.
    pub fn contains_artist(&self, artist: &ArtistName) -> bool {
        self.songs_of(artist).next().is_some()
    }

    /// Songs of one artist, ordered by title.
    pub fn songs_of<'a>(
        &'a self,
        artist: &'a ArtistName,
    ) -> impl Iterator<Item = (&'a SongTitle, &'a WordSet)> + 'a {
        self.songs
            .range((artist.clone(), SongTitle::default())..)
            .take_while(move |((a, _), _)| a == artist)
            .map(|((_, song), words)| (song, words))
    }

    /// Number of songs recorded for `artist`.
    pub fn song_count(&self, artist: &ArtistName) -> usize {
        self.songs_of(artist).count()
    }

    /// Word set of a single song.
    pub fn word_set(&self, artist: &ArtistName, song: &SongTitle) -> Option<&WordSet> {
        self.songs.get(&(artist.clone(), song.clone()))
    }

    /// Every entry, ordered by artist then title.
    pub fn entries(&self) -> impl Iterator<Item = (&ArtistName, &SongTitle, &WordSet)> {
        self.songs.iter().map(|((artist, song), words)| (artist, song, words))
    }

    /// Insert or replace a song's word set.
    ///
    /// A repeated `(artist, song)` key replaces the earlier word set entirely.
    fn insert(&mut self, artist: ArtistName, song: SongTitle, words: WordSet) {
        if !self.contains_artist(&artist) {
            self.artist_order.push(artist.clone());
        }
        self.songs.insert((artist, song), words);
    }
}
