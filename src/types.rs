//! Core data model types.
//!
//! The crate operates on a flat, in-memory sequence of [`Song`] records
//! produced by ingestion. Query operations never mutate the sequence; each
//! call traverses it and returns a fresh value.

use serde::{Deserialize, Serialize};

/// A single song record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Track title. Not guaranteed unique across a catalog.
    pub title: String,
    /// Primary performing artist.
    pub artist: String,
    /// Containing album.
    pub album: String,
    /// Track duration in whole seconds.
    pub runtime_in_seconds: u32,
}

impl Song {
    /// Create a new song record.
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        runtime_in_seconds: u32,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            runtime_in_seconds,
        }
    }

    /// Runtime expressed in minutes, unrounded.
    pub fn runtime_in_minutes(&self) -> f64 {
        f64::from(self.runtime_in_seconds) / 60.0
    }
}
