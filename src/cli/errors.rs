//! CLI-specific error types

use std::io;

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by the command-line layer
#[derive(Debug, Error)]
pub enum CliError {
    /// A schema or value file could not be read
    #[error("Cannot read '{path}': {source}")]
    FileRead {
        /// Path as given on the command line
        path: String,
        #[source]
        source: io::Error,
    },

    /// A schema or value file held invalid JSON
    #[error("Invalid JSON in '{path}': {source}")]
    InvalidJson {
        /// Path as given on the command line
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A response could not be encoded or written
    #[error("JSON encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// Stdout could not be written
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The library reported a fatal schema error
    #[error("{0}")]
    Schema(#[from] crate::schema::SchemaError),
}
