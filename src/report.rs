//! Line-oriented report writers.
//!
//! Each writer formats one of the catalog rollups into `out`, one line per
//! item. Pass `std::io::stdout().lock()` for console output, or any other
//! [`io::Write`] sink (a `Vec<u8>` in tests, a log file, ...).

use std::io;

use crate::queries::{album_summaries, artists_with_multiple_songs, longest_title, titles_by_runtime};
use crate::types::Song;

/// Writes the artists with more than one song, one per line, in first-seen order.
pub fn write_artists_with_multiple_songs(out: &mut impl io::Write, songs: &[Song]) -> io::Result<()> {
    for artist in artists_with_multiple_songs(songs) {
        writeln!(out, "{artist}")?;
    }
    Ok(())
}

/// Writes the longest song title on a single line.
///
/// Writes nothing for an empty catalog.
pub fn write_longest_title(out: &mut impl io::Write, songs: &[Song]) -> io::Result<()> {
    if let Some(title) = longest_title(songs) {
        writeln!(out, "{title}")?;
    }
    Ok(())
}

/// Writes every title, one per line, in ascending runtime order.
pub fn write_titles_by_runtime(out: &mut impl io::Write, songs: &[Song]) -> io::Result<()> {
    for title in titles_by_runtime(songs) {
        writeln!(out, "{title}")?;
    }
    Ok(())
}

/// Writes one summary line per album: name, song count, and total runtime.
///
/// Albums appear in first-seen input order.
pub fn write_album_summaries(out: &mut impl io::Write, songs: &[Song]) -> io::Result<()> {
    for summary in album_summaries(songs) {
        writeln!(
            out,
            "{}: {} songs, {}s total",
            summary.album, summary.songs, summary.total_runtime_in_seconds
        )?;
    }
    Ok(())
}
