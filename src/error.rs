use thiserror::Error;

/// Convenience result type for catalog ingestion operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error type returned by ingestion functions.
///
/// This is a single error enum shared across CSV and JSON ingestion. Query
/// operations never return it: "no match" is an empty collection, a zero
/// sum, or `None`, not an error.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV ingestion error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input does not have the shape of a song catalog (missing required
    /// columns/fields, wrong top-level JSON value, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be parsed into the required field type.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}
