//! Song data ingestion from CSV.

use std::io::Read;
use std::path::Path;

use crate::constants::corpus::SONG_FIELDS;
use crate::corpus::{CorpusIndex, SongRow};
use crate::error::{Error, Result};
use crate::lyrics::StopwordSet;

/// Parse song rows from CSV, discarding the header record.
///
/// Every record must have exactly three fields (artist, title, lyrics). The
/// first record that does not aborts the read with [`Error::MalformedRow`];
/// no rows are returned in that case.
pub fn read_song_rows<R: Read>(reader: R) -> Result<Vec<SongRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if record.len() != SONG_FIELDS {
            let line = record.position().map_or(0, csv::Position::line);
            tracing::warn!("Rejecting song data: line {line} has {} fields", record.len());
            return Err(Error::MalformedRow { line, fields: record.len() });
        }
        rows.push(record.deserialize::<SongRow>(None)?);
    }
    Ok(rows)
}

/// Read a song data file and build its index.
pub fn load_corpus(path: &Path, stopwords: &StopwordSet) -> Result<CorpusIndex> {
    let file = fs_err::File::open(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    let rows = read_song_rows(std::io::BufReader::new(file)).map_err(|e| match e {
        Error::Csv { source, .. } => Error::csv(source, path.to_path_buf()),
        other => other,
    })?;
    tracing::info!("Read {} song rows from {}", rows.len(), path.display());
    Ok(CorpusIndex::build(&rows, stopwords))
}
