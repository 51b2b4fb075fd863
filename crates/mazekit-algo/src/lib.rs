//! mazekit-algo - Path generation, maze construction and solving
//!
//! This crate provides the randomized constructions over the
//! `mazekit-core` data model:
//!
//! - **Path generation** - random self-avoiding walks whose every prefix
//!   provably leaves the target reachable, biased by recent direction
//!   history
//! - **Tree mazes** - perfect mazes embedding a prescribed solution
//!   path, carved row by row through a ring-buffered union-find
//! - **Density mazes** - independent per-wall coin flips around a forced
//!   solution path
//! - **Solving** - the left-hand wall follower
//!
//! All constructions thread a `mazekit_core::Lcg` cursor by mutable
//! reference; byte consumption order is fixed per algorithm, so equal
//! seeds reproduce equal results.

pub mod density;
pub mod error;
pub mod generator;
mod pool;
pub mod solver;
pub mod tree;

pub use density::density_maze;
pub use error::{AlgoError, AlgoResult};
pub use generator::{PathGenOptions, random_path};
pub use solver::solve;
pub use tree::{ProbabilityProfile, tree_maze};
