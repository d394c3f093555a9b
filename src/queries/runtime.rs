//! Duration bucketing, thresholds, and unit conversion.

use serde::Serialize;

use crate::types::Song;

/// Boundary (exclusive) below which a song counts as short, in seconds.
pub const SHORT_BELOW_SECONDS: u32 = 180;
/// Boundary (inclusive) up to which a song counts as medium, in seconds.
pub const MEDIUM_UP_TO_SECONDS: u32 = 300;

/// Song counts per runtime bucket.
///
/// Every song falls into exactly one bucket: short (`< 180s`), medium
/// (`180..=300s`), or long (`> 300s`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RuntimeBreakdown {
    /// Songs shorter than [`SHORT_BELOW_SECONDS`].
    pub short: usize,
    /// Songs between the two boundaries, inclusive on both ends.
    pub medium: usize,
    /// Songs longer than [`MEDIUM_UP_TO_SECONDS`].
    pub long: usize,
}

/// A song title paired with its runtime in minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongDuration {
    /// Track title.
    pub title: String,
    /// Runtime in minutes, unrounded.
    pub minutes: f64,
}

/// Counts songs per runtime bucket.
pub fn runtime_breakdown(songs: &[Song]) -> RuntimeBreakdown {
    let mut breakdown = RuntimeBreakdown::default();
    for song in songs {
        if song.runtime_in_seconds < SHORT_BELOW_SECONDS {
            breakdown.short += 1;
        } else if song.runtime_in_seconds <= MEDIUM_UP_TO_SECONDS {
            breakdown.medium += 1;
        } else {
            breakdown.long += 1;
        }
    }
    breakdown
}

/// Returns `true` iff at least one song runs strictly longer than `seconds`.
pub fn has_song_longer_than(songs: &[Song], seconds: u32) -> bool {
    songs.iter().any(|s| s.runtime_in_seconds > seconds)
}

/// Pairs every title with its runtime in minutes, in input order.
pub fn durations_in_minutes(songs: &[Song]) -> Vec<SongDuration> {
    songs
        .iter()
        .map(|s| SongDuration {
            title: s.title.clone(),
            minutes: s.runtime_in_minutes(),
        })
        .collect()
}
