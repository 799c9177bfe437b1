//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::display::{DEFAULT_PREVIEW_ROWS, DEFAULT_TOP_ARTISTS};
use crate::constants::env as keys;
use crate::error::{Error, Result};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Stopword list to use without prompting
    pub stopwords_path: Option<PathBuf>,
    /// Song data CSV to use without prompting
    pub songdata_path: Option<PathBuf>,
    /// Number of artists in the ranking table
    pub top_artists: usize,
    /// Number of search matches printed after the count
    pub preview_rows: usize,
    /// Whether error messages are colored
    pub color: bool,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            stopwords_path: None,
            songdata_path: None,
            top_artists: DEFAULT_TOP_ARTISTS,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            color: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        config.stopwords_path = env::var(keys::STOPWORDS)
            .ok()
            .map(|p| expand_path(&p))
            .or_else(|| default_data_file("stopwords.txt"));

        config.songdata_path = env::var(keys::SONGDATA)
            .ok()
            .map(|p| expand_path(&p))
            .or_else(|| default_data_file("songdata.csv"));

        if let Ok(value) = env::var(keys::TOP_ARTISTS) {
            config.top_artists = parse_count(keys::TOP_ARTISTS, &value)?;
        }

        if let Ok(value) = env::var(keys::PREVIEW_ROWS) {
            match value.trim().parse::<usize>() {
                Ok(rows) => config.preview_rows = rows,
                Err(e) => tracing::warn!("Ignoring {}={value:?}: {e}", keys::PREVIEW_ROWS),
            }
        }

        Ok(config)
    }

    /// Override the ranking size, rejecting zero.
    pub fn set_top_artists(&mut self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(Error::config(
                "ranking size must be at least 1",
                "Pass --top with a positive number",
            ));
        }
        self.top_artists = n;
        Ok(())
    }
}

/// Expand `~` in a user-supplied path.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path.trim()).to_string())
}

/// Look for a data file under the platform data directory (`~/.local/share/lyricstats/` on Linux).
fn default_data_file(name: &str) -> Option<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join(env!("CARGO_PKG_NAME")).join(name))
        .filter(|p| p.is_file())
}

fn parse_count(key: &str, value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::config(
            format!("{key} must be a positive integer, got {value:?}"),
            "Unset it to use the default of 10",
        )),
    }
}
