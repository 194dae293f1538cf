//! Error types for Huffman compression and decompression.

use std::path::PathBuf;

use thiserror::Error;

/// Error variants surfaced by the codec and the file helpers around it.
#[derive(Debug, Error)]
pub enum Error {
    /// The source path does not exist.
    #[error("input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The container header is truncated, malformed or inconsistent.
    #[error("corrupt container: {0}")]
    CorruptContainer(String),

    /// The payload ran out of bits before the recorded character count was reached.
    #[error("truncated payload: decoded {decoded} of {expected} characters")]
    TruncatedPayload { decoded: u64, expected: u64 },

    /// A character has no code in the table derived from its own text.
    #[error("no code for character {0:?}")]
    MissingCode(char),

    /// A file was handed to an operation that expects another extension.
    #[error("expected a .{expected} file, got {}", .path.display())]
    UnexpectedExtension {
        path: PathBuf,
        expected: &'static str,
    },

    /// A session accessor was called before any text was loaded.
    #[error("no input loaded")]
    NothingLoaded,

    /// An I/O error occurred while reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        Error::CorruptContainer(reason.into())
    }
}

/// A specialized Result type for huffpack operations.
pub type Result<T> = std::result::Result<T, Error>;
