//! Error types for archive reading and export.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scanner operations.
#[derive(Error, Debug)]
pub enum Error {
    /// File does not exist or cannot be accessed
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Invalid magic bytes at start of file
    #[error("Invalid Alembic file: expected Ogawa magic bytes")]
    InvalidMagic,

    /// Unsupported file format version
    #[error("Unsupported Alembic version: {0}")]
    UnsupportedVersion(i32),

    /// File is truncated or corrupted
    #[error("Unexpected end of file at position {0}")]
    UnexpectedEof(u64),

    /// Invalid data structure in file
    #[error("Invalid file structure: {0}")]
    InvalidStructure(String),

    /// Type mismatch when reading a node
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Child index out of bounds
    #[error("Child index {index} out of bounds (count: {count})")]
    ChildOutOfBounds { index: usize, count: usize },

    /// Memory mapping failed
    #[error("Memory mapping failed: {0}")]
    MmapFailed(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// CSV export error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an "other" error from a string.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Create an invalid structure error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidStructure(msg.into())
    }
}

/// Result type alias for scanner operations.
pub type Result<T> = std::result::Result<T, Error>;
