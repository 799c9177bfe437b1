use unicode_width::UnicodeWidthStr;

use crate::constants::display::{COLUMN_WIDTH, TABLE_WIDTH};
use crate::services::{ArtistStats, SearchResult};

/// Left-align `text` in a cell of `width` display columns. Longer text is not cut.
fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

/// Right-align `text` in a cell of `width` display columns.
fn pad_left(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{text}", " ".repeat(fill))
}

/// Centre `text`, putting the odd column of padding on the right.
fn center(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    let left = fill / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(fill - left))
}

/// Render the ranking table for already-ranked artists.
pub fn render_ranking(ranked: &[ArtistStats], top: usize) -> String {
    let mut lines = vec![
        center(&format!("Singers by Average Word Count (TOP - {top})"), TABLE_WIDTH),
        [
            pad_right("Singer", COLUMN_WIDTH),
            pad_left("Average Word Count", COLUMN_WIDTH),
            pad_left("Vocabulary Size", COLUMN_WIDTH),
            pad_left("Number of Songs", COLUMN_WIDTH),
        ]
        .concat(),
        "-".repeat(TABLE_WIDTH),
    ];

    lines.extend(ranked.iter().take(top).map(|s| {
        [
            pad_right(s.artist.as_str(), COLUMN_WIDTH),
            pad_left(&format!("{:.2}", s.average_word_count), COLUMN_WIDTH),
            pad_left(&s.vocabulary_size.to_string(), COLUMN_WIDTH),
            pad_left(&s.song_count.to_string(), COLUMN_WIDTH),
        ]
        .concat()
    }));

    lines.join("\n")
}

/// Render the match count and the first `preview` matches.
pub fn render_matches(result: &SearchResult, preview: usize) -> String {
    let mut lines = vec![format!(
        "There are {} songs containing the given words!",
        result.len()
    )];

    if !result.is_empty() {
        lines.push(format!("{} Song", pad_right("Singer", COLUMN_WIDTH)));
        lines.extend(
            result
                .first(preview)
                .iter()
                .map(|m| format!("{} {}", pad_right(m.artist.as_str(), COLUMN_WIDTH), m.song)),
        );
    }

    lines.join("\n")
}

/// Guidance shown when a query word is rejected.
pub fn render_word_error() -> String {
    [
        "Error in words!",
        "1-) Words should not have any digit or punctuation",
        "2-) Word list should not include any stop-word",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::corpus::{CorpusIndex, SongRow};
    use crate::lyrics::StopwordSet;
    use crate::services::{search, Query};

    fn stats(artist: &str, average: f64, vocab: usize, songs: usize) -> ArtistStats {
        ArtistStats {
            artist: artist.into(),
            average_word_count: average,
            vocabulary_size: vocab,
            song_count: songs,
        }
    }

    #[test]
    fn test_ranking_layout() {
        let text = render_ranking(&[stats("Art1", 2.5, 5, 2)], 10);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].trim(), "Singers by Average Word Count (TOP - 10)");
        assert_eq!(lines[0].len(), TABLE_WIDTH);
        assert_eq!(
            lines[1],
            "Singer                Average Word Count     Vocabulary Size     Number of Songs"
        );
        assert_eq!(lines[2], "-".repeat(80));
        assert_eq!(
            lines[3],
            "Art1                                2.50                   5                   2"
        );
    }

    #[test]
    fn test_ranking_respects_top() {
        let ranked: Vec<_> = (0..4).map(|i| stats(&format!("a{i}"), 1.0, 1, 1)).collect();
        let text = render_ranking(&ranked, 2);
        assert_eq!(text.lines().count(), 3 + 2);
    }

    #[test]
    fn test_wide_characters_align() {
        let text = render_ranking(&[stats("宇多田ヒカル", 10.0, 20, 3)], 10);
        let row = text.lines().nth(3).unwrap();
        assert_eq!(row.width(), TABLE_WIDTH);
        assert!(row.starts_with("宇多田ヒカル        "));
    }

    #[test]
    fn test_long_name_is_not_truncated() {
        let name = "The Artist With A Really Long Name";
        let text = render_ranking(&[stats(name, 1.0, 1, 1)], 10);
        assert!(text.lines().nth(3).unwrap().starts_with(name));
    }

    #[test]
    fn test_center_odd_padding() {
        assert_eq!(center("ab", 5), " ab  ");
    }

    #[test]
    fn test_matches_preview() {
        let rows = vec![
            SongRow::new("Art1", "S1", "cat"),
            SongRow::new("Art1", "S2", "cat"),
            SongRow::new("Art2", "S3", "cat"),
        ];
        let sw = StopwordSet::default();
        let index = CorpusIndex::build(&rows, &sw);
        let result = search(&index, &Query::new(["cat"].into_iter().collect(), &sw).unwrap());

        let text = render_matches(&result, 2);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "There are 3 songs containing the given words!");
        assert_eq!(lines[1], "Singer               Song");
        assert_eq!(lines[2], "Art1                 S1");
        assert_eq!(lines[3], "Art1                 S2");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_no_matches_prints_count_only() {
        let text = render_matches(&SearchResult::default(), 5);
        assert_eq!(text, "There are 0 songs containing the given words!");
    }

    #[test]
    fn test_word_error_lists_rules() {
        let text = render_word_error();
        assert!(text.starts_with("Error in words!"));
        assert_eq!(text.lines().count(), 3);
    }
}
