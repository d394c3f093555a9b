//! Song query operations.
//!
//! Every operation takes a read-only slice of [`crate::types::Song`] records
//! (plus scalar parameters where stated) and returns a fresh derived value.
//! None mutate the input, none hold state across calls, and "no match" is
//! always a neutral value (`None`, an empty collection, or a zero sum)
//! rather than an error.
//!
//! Operations are grouped by the dimension they pivot on:
//!
//! - [`titles`]: title sorting, search, and lookups
//! - [`albums`]: per-album filtering, tallies, and rollups
//! - [`artists`]: per-artist tallies and groupings
//! - [`runtime`]: duration bucketing, thresholds, and unit conversion
//!
//! ## Example
//!
//! ```rust
//! use song_catalog::queries::{runtime_breakdown, sorted_titles, titles_in_album};
//! use song_catalog::types::Song;
//!
//! let songs = vec![
//!     Song::new("Pathways", "Saib", "Around the World", 210),
//!     Song::new("Endless Love", "Evelyn Hart", "First Light", 305),
//!     Song::new("Morning Dew", "Saib", "Around the World", 165),
//! ];
//!
//! assert_eq!(titles_in_album(&songs, "Around the World"), vec!["Pathways", "Morning Dew"]);
//! assert_eq!(sorted_titles(&songs)[0], "Endless Love");
//!
//! let buckets = runtime_breakdown(&songs);
//! assert_eq!((buckets.short, buckets.medium, buckets.long), (1, 1, 1));
//! ```

pub mod albums;
pub mod artists;
pub mod runtime;
pub mod titles;

pub use albums::{
    album_runtimes, album_summaries, album_with_longest_average_runtime, album_with_most_songs,
    albums_reverse_alphabetical, first_song_in_album, titles_in_album, AlbumSummary,
};
pub use artists::{
    artist_total_runtime, artist_with_most_songs, artists_with_multiple_songs,
    sorted_by_artist_then_title, titles_by_artist,
};
pub use runtime::{
    durations_in_minutes, has_song_longer_than, runtime_breakdown, RuntimeBreakdown, SongDuration,
};
pub use titles::{
    first_song_starting_with, longest_title, sorted_titles, titles_by_runtime, titles_containing,
};

use std::collections::HashMap;

/// Tally `keys` and return the first key, in first-seen order, holding the
/// highest count. Later keys that only tie an earlier maximum never win.
pub(crate) fn most_common<'a>(keys: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for key in keys {
        let count = counts.entry(key).or_insert(0);
        if *count == 0 {
            order.push(key);
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for key in order {
        let count = counts[key];
        if best.is_none_or(|(_, max)| count > max) {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key)
}
