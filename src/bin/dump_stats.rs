//! Dump every artist's vocabulary statistics as JSON for analysis.
//!
//! Usage: cargo run --bin dump_stats -- <stopwords.txt> <songdata.csv> [--ranked]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use lyricstats::corpus::load_corpus;
use lyricstats::lyrics::StopwordSet;
use lyricstats::services::{artist_stats, rank_artists};

#[derive(Parser)]
#[command(name = "dump_stats", about = "Print per-artist lyric statistics as JSON")]
struct Cli {
    /// Stopword list, one word per line
    stopwords: PathBuf,

    /// Song data CSV with columns artist, title, lyrics
    songdata: PathBuf,

    /// Sort by average word count instead of first appearance
    #[arg(long)]
    ranked: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let stopwords = StopwordSet::load(&cli.stopwords).context("Failed to read stopwords")?;
    let index = load_corpus(&cli.songdata, &stopwords).context("Failed to read song data")?;

    let mut stats = artist_stats(&index);
    if cli.ranked {
        stats = rank_artists(stats);
    }

    println!("{}", serde_json::to_string_pretty(&stats)?);
    eprintln!("{} artists, {} songs", index.artist_count(), index.len());
    Ok(())
}
