//! Error types for mazekit-algo

use thiserror::Error;

/// Errors that can occur during maze and path construction
#[derive(Debug, Error)]
pub enum AlgoError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] mazekit_core::Error),

    /// Grid too wide for the ring-buffered label pool
    #[error("maze width {0} exceeds the label pool capacity")]
    PoolOverflow(u32),
}

/// Result type for construction operations
pub type AlgoResult<T> = Result<T, AlgoError>;
