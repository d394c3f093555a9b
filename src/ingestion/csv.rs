//! CSV ingestion implementation.

use std::path::Path;

use crate::error::{CatalogError, CatalogResult};
use crate::types::Song;

/// Columns a song catalog CSV must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = ["title", "artist", "album", "runtime_in_seconds"];

/// Ingest a CSV file into an in-memory song list.
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain all of [`REQUIRED_COLUMNS`] (order can differ).
/// - `runtime_in_seconds` must parse as a non-negative whole number.
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> CatalogResult<Vec<Song>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    ingest_csv_from_reader(&mut rdr)
}

/// Ingest CSV data from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> CatalogResult<Vec<Song>> {
    let headers = rdr.headers()?.clone();

    // Map required columns -> CSV column indexes (allows re-ordered CSV columns).
    let mut col_idxs = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, column) in col_idxs.iter_mut().zip(REQUIRED_COLUMNS) {
        match headers.iter().position(|h| h == column) {
            Some(idx) => *slot = idx,
            None => {
                return Err(CatalogError::SchemaMismatch {
                    message: format!(
                        "missing required column '{column}'. headers={:?}",
                        headers.iter().collect::<Vec<_>>()
                    ),
                });
            }
        }
    }
    let [title_idx, artist_idx, album_idx, runtime_idx] = col_idxs;

    let mut songs: Vec<Song> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row numbers for users; +1 again because the header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;

        let cell = |idx: usize| record.get(idx).unwrap_or("").trim().to_owned();

        let raw_runtime = record.get(runtime_idx).unwrap_or("").trim();
        let runtime_in_seconds =
            raw_runtime
                .parse::<u32>()
                .map_err(|e| CatalogError::ParseError {
                    row: user_row,
                    column: "runtime_in_seconds".to_owned(),
                    raw: raw_runtime.to_owned(),
                    message: e.to_string(),
                })?;

        songs.push(Song {
            title: cell(title_idx),
            artist: cell(artist_idx),
            album: cell(album_idx),
            runtime_in_seconds,
        });
    }

    Ok(songs)
}
