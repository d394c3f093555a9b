//! Title sorting, search, and lookups.

use crate::types::Song;

/// Returns every song title, sorted ascending.
pub fn sorted_titles(songs: &[Song]) -> Vec<String> {
    let mut titles: Vec<String> = songs.iter().map(|s| s.title.clone()).collect();
    titles.sort();
    titles
}

/// Returns the titles containing `word`, case-insensitively, in input order.
///
/// An empty `word` matches every title.
pub fn titles_containing(songs: &[Song], word: &str) -> Vec<String> {
    let needle = word.to_lowercase();
    songs
        .iter()
        .filter(|s| s.title.to_lowercase().contains(&needle))
        .map(|s| s.title.clone())
        .collect()
}

/// Returns the longest title by character count.
///
/// Ties keep the earlier song. An empty catalog yields `None`.
pub fn longest_title(songs: &[Song]) -> Option<&str> {
    let mut longest: Option<&str> = None;
    for song in songs {
        let len = song.title.chars().count();
        if longest.is_none_or(|t| len > t.chars().count()) {
            longest = Some(&song.title);
        }
    }
    longest
}

/// Finds the first song whose title starts with `letter`, case-insensitively.
pub fn first_song_starting_with(songs: &[Song], letter: char) -> Option<&Song> {
    songs.iter().find(|s| {
        s.title
            .chars()
            .next()
            .is_some_and(|first| first.to_lowercase().eq(letter.to_lowercase()))
    })
}

/// Returns every title, sorted by ascending runtime.
///
/// The sort is stable: songs with equal runtimes keep their input order.
pub fn titles_by_runtime(songs: &[Song]) -> Vec<String> {
    let mut by_runtime: Vec<&Song> = songs.iter().collect();
    by_runtime.sort_by_key(|s| s.runtime_in_seconds);
    by_runtime.into_iter().map(|s| s.title.clone()).collect()
}
