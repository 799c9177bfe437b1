//! Stopword list loading.

use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use crate::error::{Error, Result};

/// Words excluded from every song's vocabulary.
///
/// Entries are stored lowercased and trimmed; lookups expect the caller to
/// have lowercased the word already.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build a stopword set from one entry per line.
    ///
    /// Each line is lowercased and trimmed. Blank lines are skipped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Read a stopword list from any buffered reader.
    pub fn read<R: BufRead>(reader: R) -> Result<Self> {
        let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
        Ok(Self::from_lines(lines))
    }

    /// Load a stopword list from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = fs_err::File::open(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
        let set = Self::read(std::io::BufReader::new(file))
            .map_err(|e| match e {
                Error::Io { source, .. } => Error::io(source, path.to_path_buf()),
                other => other,
            })?;
        tracing::info!("Loaded {} stopwords from {}", set.len(), path.display());
        Ok(set)
    }

    /// Whether `word` is a stopword.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
