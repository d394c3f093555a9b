//! `song-catalog` is a small library for ingesting song records into an
//! in-memory catalog and answering questions about it with a flat set of
//! pure query operations.
//!
//! The primary ingestion entrypoint is [`ingestion::ingest_songs_from_path`],
//! which can auto-detect the ingestion format from the file extension (or you
//! can force a format via [`ingestion::IngestionOptions`]).
//!
//! ## What you can ingest
//!
//! **File formats (auto-detected by extension):**
//!
//! - **CSV**: `.csv` — headered, with required columns `title`, `artist`,
//!   `album`, `runtime_in_seconds` (column order can differ)
//! - **JSON**: `.json` (array-of-objects) and `.ndjson` (newline-delimited
//!   objects), same required fields
//!
//! Ingestion produces a `Vec<`[`types::Song`]`>`; runtimes must parse as
//! non-negative whole seconds.
//!
//! ## Quick example: ingest then query
//!
//! ```no_run
//! use song_catalog::ingestion::{ingest_songs_from_path, IngestionOptions};
//! use song_catalog::queries::{album_with_most_songs, sorted_titles};
//!
//! # fn main() -> Result<(), song_catalog::CatalogError> {
//! // Auto-detects by extension (.csv/.json/.ndjson).
//! let songs = ingest_songs_from_path("songs.csv", &IngestionOptions::default())?;
//! println!("titles={:?}", sorted_titles(&songs));
//! println!("biggest album={:?}", album_with_most_songs(&songs));
//! # Ok(())
//! # }
//! ```
//!
//! ## Queries
//!
//! The [`queries`] module is a flat set of independent operations over
//! `&[Song]` — sorting, filtering, bucketing, rollups, and lookups. Every
//! operation returns a fresh value and leaves the input untouched, and "no
//! match" is never an error:
//!
//! ```rust
//! use song_catalog::queries::{first_song_in_album, has_song_longer_than, runtime_breakdown};
//! use song_catalog::types::Song;
//!
//! let songs = vec![
//!     Song::new("A", "Ada", "X", 100),
//!     Song::new("B", "Ada", "X", 200),
//!     Song::new("C", "Grace", "Y", 400),
//! ];
//!
//! let buckets = runtime_breakdown(&songs);
//! assert_eq!((buckets.short, buckets.medium, buckets.long), (1, 1, 1));
//! assert!(has_song_longer_than(&songs, 350));
//! assert!(first_song_in_album(&songs, "Z").is_none());
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: unified ingestion entrypoints and format-specific implementations
//! - [`types`]: the [`types::Song`] record
//! - [`queries`]: pure query operations over `&[Song]`
//! - [`report`]: line-oriented writers for the summary-style queries
//! - [`error`]: error types used across ingestion

pub mod error;
pub mod ingestion;
pub mod queries;
pub mod report;
pub mod types;

pub use error::{CatalogError, CatalogResult};
