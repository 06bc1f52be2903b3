//! Error types for strmerge-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in strmerge-core
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A block comment was still open when the input ended
    #[error("line {line}: unterminated block comment")]
    UnterminatedComment { line: usize },

    /// The line after a comment block is not a `"key" = "value";` pair
    #[error("line {line}: expected translation line, found '{text}'")]
    InvalidTranslation { line: usize, text: String },

    /// An external string extractor failed to produce table text
    #[error("string extraction failed: {0}")]
    Extraction(String),

    /// Directory traversal error
    #[error("failed to traverse directory: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error is a violation of the strings-table grammar
    /// (as opposed to an IO or collaborator failure).
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Error::UnterminatedComment { .. } | Error::InvalidTranslation { .. }
        )
    }
}
