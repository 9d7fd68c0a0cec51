//! Error types for blogmark

use thiserror::Error;

/// Main error type for blogmark operations
#[derive(Error, Debug)]
pub enum BlogmarkError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The document library could not be used; the message names the file
    #[error("Library error: {0}")]
    Library(String),
}

/// Result type alias for blogmark operations
pub type Result<T> = std::result::Result<T, BlogmarkError>;
