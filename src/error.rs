//! Error handling for the huffpack library
//!
//! This module provides the crate-wide error type with detailed error
//! information for all compression and decompression operations.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the huffpack library
#[derive(Error, Debug)]
pub enum HuffpackError {
    /// I/O failure while reading or writing an already-open stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A source stream could not be opened
    #[error("cannot open {}: {source}", path.display())]
    SourceUnavailable {
        /// Path of the stream that failed to open
        path: PathBuf,
        /// The underlying system error
        source: std::io::Error,
    },

    /// All 256 symbol frequencies are zero where a tree is required
    #[error("empty alphabet: input contains no symbols")]
    EmptyAlphabet,

    /// A bitstream ended before a structurally complete value was read
    #[error("truncated stream: {message}")]
    TruncatedStream {
        /// Description of what was being read when the stream ended
        message: String,
    },

    /// Invalid data format or corruption
    #[error("invalid data: {message}")]
    InvalidData {
        /// Error message describing the issue
        message: String,
    },
}

impl HuffpackError {
    /// Create a source-unavailable error for a path that failed to open
    pub fn source_unavailable<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a truncated-stream error
    pub fn truncated<S: Into<String>>(message: S) -> Self {
        Self::TruncatedStream {
            message: message.into(),
        }
    }

    /// Create an invalid data error
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }
}

/// Result type alias for huffpack operations
pub type Result<T> = std::result::Result<T, HuffpackError>;
