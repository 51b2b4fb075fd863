//! I/O error types

use thiserror::Error;

/// I/O error type
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid bitmap data
    #[error("invalid bitmap data: {0}")]
    InvalidData(String),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] mazekit_core::Error),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
