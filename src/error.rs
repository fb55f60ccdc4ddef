//! Global error handling for dumptree

use std::io;
use thiserror::Error;

/// Global error type for dumptree operations
#[derive(Error, Debug)]
pub enum DumpTreeError {
    /// Root directory or output parent directory missing
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for dumptree operations
pub type Result<T> = std::result::Result<T, DumpTreeError>;

// Allow converting DumpTreeError to io::Error for tests that stay in io::Result
impl From<DumpTreeError> for io::Error {
    fn from(err: DumpTreeError) -> Self {
        match err {
            DumpTreeError::Io(e) => e,
            DumpTreeError::PathNotFound(msg) => io::Error::new(io::ErrorKind::NotFound, msg),
        }
    }
}
