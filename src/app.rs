//! Interactive session.
//!
//! Loads the stopwords and song data (prompting for any path not supplied),
//! prints the artist ranking, then answers one search request per input line
//! until the user submits a blank line.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

use crate::config::{expand_path, Config};
use crate::corpus::{load_corpus, CorpusIndex};
use crate::error::{Error, InvalidWordReason, Result};
use crate::lyrics::StopwordSet;
use crate::services::{artist_stats, parse_request, search, top_artists, ArtistStats, QueryRequest, SearchResult};
use crate::ui::{render_matches, render_ranking, render_word_error};

const STOPWORDS_PROMPT: &str = "\nEnter a filename for the stopwords: ";
const SONGDATA_PROMPT: &str = "\nEnter a filename for the song data: ";
const SEARCH_PROMPT: &str = "\nInput a set of words (space separated), press enter to exit: ";

/// Result of handling one line of search input.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// Blank line: leave the search loop.
    Exit,
    /// A word failed validation; ask again.
    Rejected {
        /// The first offending word.
        word: String,
        /// Why it was rejected.
        reason: InvalidWordReason,
    },
    /// The search ran.
    Matches(SearchResult),
}

/// A loaded corpus plus the settings used to present it.
pub struct App {
    config: Config,
    stopwords: StopwordSet,
    index: CorpusIndex,
}

impl App {
    /// Wrap an already built index.
    pub const fn new(config: Config, stopwords: StopwordSet, index: CorpusIndex) -> Self {
        Self { config, stopwords, index }
    }

    /// Load both input files, prompting on `input` for any path that is
    /// missing from `config` or does not exist.
    pub fn open<R: BufRead, W: Write>(config: Config, input: &mut R, out: &mut W) -> Result<Self> {
        let color = config.color;

        let stopwords_path = resolve_path(config.stopwords_path.as_deref(), STOPWORDS_PROMPT, color, input, out)?;
        let stopwords = StopwordSet::load(&stopwords_path)?;

        let songdata_path = resolve_path(config.songdata_path.as_deref(), SONGDATA_PROMPT, color, input, out)?;
        let index = load_corpus(&songdata_path, &stopwords)?;

        Ok(Self::new(config, stopwords, index))
    }

    /// The loaded index.
    pub const fn index(&self) -> &CorpusIndex {
        &self.index
    }

    /// The best artists, ranked, limited to the configured size.
    pub fn ranking(&self) -> Vec<ArtistStats> {
        top_artists(artist_stats(&self.index), self.config.top_artists)
    }

    /// Answer one line of search input.
    pub fn handle_query(&self, line: &str) -> Result<QueryOutcome> {
        match parse_request(line, &self.stopwords) {
            Ok(QueryRequest::Exit) => Ok(QueryOutcome::Exit),
            Ok(QueryRequest::Search(query)) => Ok(QueryOutcome::Matches(search(&self.index, &query))),
            Err(Error::InvalidQueryWord { word, reason }) => Ok(QueryOutcome::Rejected { word, reason }),
            Err(e) => Err(e),
        }
    }

    /// Print the ranking, then run the search loop until a blank line or end of input.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<()> {
        writeln!(out, "\n{}", render_ranking(&self.ranking(), self.config.top_artists))?;

        writeln!(out, "\nSearch Lyrics by Words")?;
        loop {
            write!(out, "{SEARCH_PROMPT}")?;
            out.flush()?;

            let Some(line) = read_line(input)? else {
                break;
            };

            match self.handle_query(&line)? {
                QueryOutcome::Exit => break,
                QueryOutcome::Rejected { word, reason } => {
                    tracing::debug!("Rejected query word {word:?}: {reason}");
                    writeln!(out)?;
                    write_error(out, &render_word_error(), self.config.color)?;
                }
                QueryOutcome::Matches(result) => {
                    writeln!(out, "\n{}", render_matches(&result, self.config.preview_rows))?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// Use the configured path when it names a file, otherwise ask for one.
fn resolve_path<R: BufRead, W: Write>(
    configured: Option<&Path>,
    message: &str,
    color: bool,
    input: &mut R,
    out: &mut W,
) -> Result<PathBuf> {
    if let Some(path) = configured {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        tracing::warn!("Configured file {} not found, prompting instead", path.display());
    }
    prompt_for_file(message, color, input, out)
}

/// Keep asking until the user names an existing file.
pub fn prompt_for_file<R: BufRead, W: Write>(
    message: &str,
    color: bool,
    input: &mut R,
    out: &mut W,
) -> Result<PathBuf> {
    loop {
        write!(out, "{message}")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Err(Error::Msg("Input closed before a file was chosen".to_string()));
        };

        let path = expand_path(&line);
        if path.is_file() {
            return Ok(path);
        }
        writeln!(out)?;
        write_error(out, "File is not found! Try Again!", color)?;
    }
}

/// Read one line without its terminator; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn write_error<W: Write>(out: &mut W, text: &str, color: bool) -> Result<()> {
    if color {
        queue!(out, SetForegroundColor(Color::Red), Print(text), ResetColor, Print("\n"))?;
    } else {
        writeln!(out, "{text}")?;
    }
    Ok(())
}
