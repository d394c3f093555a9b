//! JSON ingestion implementation.
//!
//! Supported inputs:
//! - A JSON array of song objects: `[{"title":"..",..}, ...]`
//! - Newline-delimited JSON (NDJSON): one song object per line
//!
//! Each object must carry the fields `title`, `artist`, `album`, and
//! `runtime_in_seconds`.

use std::fs;
use std::path::Path;

use crate::error::{CatalogError, CatalogResult};
use crate::types::Song;

/// Ingest JSON into an in-memory song list.
pub fn ingest_json_from_path(path: impl AsRef<Path>) -> CatalogResult<Vec<Song>> {
    let text = fs::read_to_string(path)?;
    ingest_json_from_str(&text)
}

/// Ingest JSON from an in-memory string.
pub fn ingest_json_from_str(input: &str) -> CatalogResult<Vec<Song>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::SchemaMismatch {
            message: "json input is empty".to_string(),
        });
    }

    // First try parsing as a single JSON value (array or object).
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        match v {
            serde_json::Value::Array(items) => ingest_json_values(&items),
            serde_json::Value::Object(_) => ingest_json_values(std::slice::from_ref(&v)),
            _ => Err(CatalogError::SchemaMismatch {
                message: "json must be an object, an array of objects, or NDJSON".to_string(),
            }),
        }
    } else {
        // Fall back to NDJSON.
        let mut values = Vec::new();
        for (i, line) in trimmed.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let v = serde_json::from_str::<serde_json::Value>(line).map_err(|e| {
                CatalogError::SchemaMismatch {
                    message: format!("invalid ndjson at line {}: {}", i + 1, e),
                }
            })?;
            values.push(v);
        }
        ingest_json_values(&values)
    }
}

fn ingest_json_values(values: &[serde_json::Value]) -> CatalogResult<Vec<Song>> {
    let mut songs: Vec<Song> = Vec::with_capacity(values.len());

    for (idx0, v) in values.iter().enumerate() {
        let row = idx0 + 1;
        let obj = v.as_object().ok_or_else(|| CatalogError::SchemaMismatch {
            message: format!("row {row} is not a json object"),
        })?;

        songs.push(Song {
            title: required_string(obj, row, "title")?,
            artist: required_string(obj, row, "artist")?,
            album: required_string(obj, row, "album")?,
            runtime_in_seconds: required_runtime(obj, row)?,
        });
    }

    Ok(songs)
}

fn required_field<'a>(
    obj: &'a serde_json::Map<String, serde_json::Value>,
    row: usize,
    field: &str,
) -> CatalogResult<&'a serde_json::Value> {
    obj.get(field).ok_or_else(|| CatalogError::SchemaMismatch {
        message: format!("row {row} missing required field '{field}'"),
    })
}

fn required_string(
    obj: &serde_json::Map<String, serde_json::Value>,
    row: usize,
    field: &str,
) -> CatalogResult<String> {
    let v = required_field(obj, row, field)?;
    v.as_str()
        .map(str::to_owned)
        .ok_or_else(|| CatalogError::ParseError {
            row,
            column: field.to_owned(),
            raw: v.to_string(),
            message: "expected string".to_string(),
        })
}

fn required_runtime(obj: &serde_json::Map<String, serde_json::Value>, row: usize) -> CatalogResult<u32> {
    let v = required_field(obj, row, "runtime_in_seconds")?;
    let n = v.as_u64().ok_or_else(|| CatalogError::ParseError {
        row,
        column: "runtime_in_seconds".to_owned(),
        raw: v.to_string(),
        message: "expected non-negative integer".to_string(),
    })?;
    u32::try_from(n).map_err(|_| CatalogError::ParseError {
        row,
        column: "runtime_in_seconds".to_owned(),
        raw: v.to_string(),
        message: "u64 out of range for u32".to_string(),
    })
}
