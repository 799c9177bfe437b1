//! `lyricstats` - interactive artist ranking and lyric search.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lyricstats::app::App;
use lyricstats::config::Config;

#[derive(Parser)]
#[command(name = "lyricstats", version, about = "Rank artists by lyric vocabulary and search songs by words")]
struct Cli {
    /// Stopword list, one word per line
    #[arg(short = 's', long)]
    stopwords: Option<PathBuf>,

    /// Song data CSV with columns artist, title, lyrics
    #[arg(short = 'd', long)]
    songdata: Option<PathBuf>,

    /// Number of artists in the ranking table
    #[arg(long)]
    top: Option<usize>,

    /// Number of search matches to print
    #[arg(long)]
    preview: Option<usize>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(path) = cli.stopwords {
        config.stopwords_path = Some(path);
    }
    if let Some(path) = cli.songdata {
        config.songdata_path = Some(path);
    }
    if let Some(top) = cli.top {
        config.set_top_artists(top)?;
    }
    if let Some(preview) = cli.preview {
        config.preview_rows = preview;
    }
    config.color = io::stdout().is_terminal();

    tracing::info!("{} {}", config.app_name(), config.app_version());

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    let app = App::open(config, &mut input, &mut out).context("Failed to load song data")?;
    app.run(&mut input, &mut out)?;
    Ok(())
}
