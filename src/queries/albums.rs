//! Per-album filtering, tallies, and rollups.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::types::Song;

use super::most_common;

/// Per-album rollup of song count and total runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumSummary {
    /// Album name.
    pub album: String,
    /// Number of songs on the album.
    pub songs: usize,
    /// Summed runtime of the album's songs, in seconds.
    pub total_runtime_in_seconds: u32,
}

/// Returns the titles of all songs from `album`, in input order.
pub fn titles_in_album(songs: &[Song], album: &str) -> Vec<String> {
    songs
        .iter()
        .filter(|s| s.album == album)
        .map(|s| s.title.clone())
        .collect()
}

/// Returns the first song from `album`, in input order.
pub fn first_song_in_album<'a>(songs: &'a [Song], album: &str) -> Option<&'a Song> {
    songs.iter().find(|s| s.album == album)
}

/// Returns the album holding the most songs.
///
/// When several albums tie, the one seen first in input order wins.
pub fn album_with_most_songs(songs: &[Song]) -> Option<&str> {
    most_common(songs.iter().map(|s| s.album.as_str()))
}

/// Returns each distinct album name once, in reverse alphabetical order.
pub fn albums_reverse_alphabetical(songs: &[Song]) -> Vec<String> {
    let mut albums: Vec<String> = Vec::new();
    for song in songs {
        if !albums.iter().any(|a| a == &song.album) {
            albums.push(song.album.clone());
        }
    }
    albums.sort_by(|a, b| b.cmp(a));
    albums
}

/// Maps each album to the summed runtime of its songs, in seconds.
pub fn album_runtimes(songs: &[Song]) -> BTreeMap<String, u32> {
    let mut totals: BTreeMap<String, u32> = BTreeMap::new();
    for song in songs {
        *totals.entry(song.album.clone()).or_insert(0) += song.runtime_in_seconds;
    }
    totals
}

/// Returns the album whose songs have the longest mean runtime.
///
/// When several albums tie, the one seen first in input order wins.
pub fn album_with_longest_average_runtime(songs: &[Song]) -> Option<&str> {
    let mut totals: HashMap<&str, (u32, usize)> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for song in songs {
        let entry = totals.entry(song.album.as_str()).or_insert((0, 0));
        if entry.1 == 0 {
            order.push(song.album.as_str());
        }
        entry.0 += song.runtime_in_seconds;
        entry.1 += 1;
    }

    let mut best: Option<(&str, f64)> = None;
    for album in order {
        let (total, count) = totals[album];
        let mean = f64::from(total) / count as f64;
        if best.is_none_or(|(_, max)| mean > max) {
            best = Some((album, mean));
        }
    }
    best.map(|(album, _)| album)
}

/// Rolls up each album's song count and total runtime.
///
/// Albums appear in first-seen input order.
pub fn album_summaries(songs: &[Song]) -> Vec<AlbumSummary> {
    let mut summaries: Vec<AlbumSummary> = Vec::new();
    for song in songs {
        match summaries.iter_mut().find(|s| s.album == song.album) {
            Some(summary) => {
                summary.songs += 1;
                summary.total_runtime_in_seconds += song.runtime_in_seconds;
            }
            None => summaries.push(AlbumSummary {
                album: song.album.clone(),
                songs: 1,
                total_runtime_in_seconds: song.runtime_in_seconds,
            }),
        }
    }
    summaries
}
