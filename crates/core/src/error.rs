//! Error types for the kevinify libraries.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the kevinify libraries.
#[derive(Error, Debug)]
pub enum KevinError {
    /// `peek_min`/`extract_min` on an empty priority queue
    #[error("Priority queue is empty")]
    EmptyContainer,

    /// Invalid configuration or input to the tree builder
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Coded text that does not match the tree decoding it
    #[error("Malformed code at position {position}: {reason}")]
    MalformedCode { position: usize, reason: String },

    /// Error loading a frequency table
    #[error("Load error: {0}")]
    Load(String),

    /// Error saving a frequency or path table
    #[error("Save error: {0}")]
    Save(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for kevinify operations.
pub type Result<T> = std::result::Result<T, KevinError>;
