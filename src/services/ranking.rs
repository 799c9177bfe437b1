//! Artist ranking by vocabulary density.

use std::cmp::Ordering;

use crate::services::stats::ArtistStats;

/// Descending by average word count, then by song count.
fn by_rank(a: &ArtistStats, b: &ArtistStats) -> Ordering {
    b.average_word_count
        .total_cmp(&a.average_word_count)
        .then_with(|| b.song_count.cmp(&a.song_count))
}

/// Sort artists best-first.
///
/// The sort is stable: artists with equal keys keep their input order.
pub fn rank_artists(mut stats: Vec<ArtistStats>) -> Vec<ArtistStats> {
    stats.sort_by(by_rank);
    stats
}

/// The `n` best-ranked artists.
pub fn top_artists(stats: Vec<ArtistStats>, n: usize) -> Vec<ArtistStats> {
    let mut ranked = rank_artists(stats);
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn entry(artist: &str, average: f64, songs: usize) -> ArtistStats {
        ArtistStats {
            artist: artist.into(),
            average_word_count: average,
            vocabulary_size: 0,
            song_count: songs,
        }
    }

    fn names(stats: &[ArtistStats]) -> Vec<&str> {
        stats.iter().map(|s| s.artist.as_str()).collect()
    }

    #[test]
    fn test_average_descending() {
        let ranked = rank_artists(vec![entry("low", 1.0, 9), entry("high", 9.5, 1), entry("mid", 4.0, 3)]);
        assert_eq!(names(&ranked), vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_song_count_breaks_average_ties() {
        let ranked = rank_artists(vec![entry("few", 3.0, 2), entry("many", 3.0, 8)]);
        assert_eq!(names(&ranked), vec!["many", "few"]);
    }

    #[test]
    fn test_full_ties_keep_input_order() {
        let ranked = rank_artists(vec![
            entry("first", 2.0, 4),
            entry("second", 2.0, 4),
            entry("third", 2.0, 4),
        ]);
        assert_eq!(names(&ranked), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_top_truncates() {
        let stats: Vec<_> = (0..15).map(|i| entry(&format!("a{i}"), f64::from(i), 1)).collect();
        let top = top_artists(stats, 10);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].artist.as_str(), "a14");
        assert_eq!(top[9].artist.as_str(), "a5");
    }

    #[test]
    fn test_top_with_fewer_artists() {
        let top = top_artists(vec![entry("solo", 1.0, 1)], 10);
        assert_eq!(names(&top), vec!["solo"]);
    }
}
