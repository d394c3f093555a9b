//! Per-artist tallies and groupings.

use std::collections::{BTreeMap, HashMap};

use crate::types::Song;

use super::most_common;

/// Sums the runtime of every song by `artist`, in seconds.
///
/// An artist with no songs in the catalog sums to 0.
pub fn artist_total_runtime(songs: &[Song], artist: &str) -> u32 {
    songs
        .iter()
        .filter(|s| s.artist == artist)
        .map(|s| s.runtime_in_seconds)
        .sum()
}

/// Returns the artists with more than one song, in first-seen order.
pub fn artists_with_multiple_songs(songs: &[Song]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for song in songs {
        let count = counts.entry(song.artist.as_str()).or_insert(0);
        if *count == 0 {
            order.push(song.artist.as_str());
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter(|artist| counts[*artist] > 1)
        .map(str::to_owned)
        .collect()
}

/// Returns a copy of the catalog sorted by artist, then title, ascending.
pub fn sorted_by_artist_then_title(songs: &[Song]) -> Vec<Song> {
    let mut sorted = songs.to_vec();
    sorted.sort_by(|a, b| a.artist.cmp(&b.artist).then_with(|| a.title.cmp(&b.title)));
    sorted
}

/// Maps each artist to the titles of their songs.
///
/// Titles keep their input order within each artist's list.
pub fn titles_by_artist(songs: &[Song]) -> BTreeMap<String, Vec<String>> {
    let mut by_artist: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for song in songs {
        by_artist
            .entry(song.artist.clone())
            .or_default()
            .push(song.title.clone());
    }
    by_artist
}

/// Returns the artist holding the most songs.
///
/// When several artists tie, the one seen first in input order wins.
pub fn artist_with_most_songs(songs: &[Song]) -> Option<&str> {
    most_common(songs.iter().map(|s| s.artist.as_str()))
}
