//! Error types for the degrees library.

use std::path::PathBuf;

/// Errors surfaced by loading, configuration and name resolution.
///
/// A search that finds no connection is not an error; see
/// [`SearchOutcome::NotConnected`](crate::search::SearchOutcome).
#[derive(Debug, thiserror::Error)]
pub enum DegreesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Dataset file not found: {0}")]
    MissingFile(PathBuf),

    /// Raised by the prompt layer when a name has no match, or when an
    /// ambiguous name is followed by an id outside the candidate list.
    #[error("Person not found.")]
    PersonNotFound { name: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, DegreesError>;
