//! Error types for mazekit-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Mazekit core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {height}x{width}")]
    InvalidDimension { height: u64, width: u64 },

    /// Cell out of bounds
    #[error("cell ({row}, {column}) out of bounds for {height}x{width} grid")]
    CellOutOfBounds {
        row: u32,
        column: u32,
        height: u32,
        width: u32,
    },

    /// A path step leaves the grid
    #[error("path leaves the grid at step {step}")]
    StepOutOfBounds { step: usize },

    /// Ragged or inconsistent wall bitmaps
    #[error("inconsistent wall bitmaps: {0}")]
    MalformedWalls(&'static str),
}

/// Result type alias for mazekit-core operations
pub type Result<T> = std::result::Result<T, Error>;
