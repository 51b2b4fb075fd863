//! Mazekit - rectangular grid maze generation and solving
//!
//! Mazekit builds and solves orthogonal grid mazes:
//!
//! - guided self-avoiding path generation that provably never walls the
//!   target off
//! - perfect ("tree") maze construction embedding a prescribed solution
//!   path, shaped by a six-byte probability profile
//! - random-density maze construction
//! - a left-hand wall-following solver
//! - monochrome BMP persistence for both paths and mazes
//!
//! # Example
//!
//! ```
//! use mazekit::{Lcg, PathGenOptions, ProbabilityProfile, random_path, solve, tree_maze};
//!
//! let options = PathGenOptions::new(8, 8).with_start(0, 0).with_target(7, 7);
//! let path = random_path(&options, &mut Lcg::new(7)).unwrap();
//! let maze = tree_maze(&path, &ProbabilityProfile::default(), &mut Lcg::new(42)).unwrap();
//! assert_eq!(solve(&maze, (0, 0), (7, 7)), path);
//! ```

// Re-export core types
pub use mazekit_core::*;

// Re-export construction and solving
pub use mazekit_algo::{
    AlgoError, AlgoResult, PathGenOptions, ProbabilityProfile, density_maze, random_path, solve,
    tree_maze,
};

// Re-export BMP persistence
pub use mazekit_io::{
    IoError, IoResult, bmp, read_maze_file, read_path_file, write_maze_file, write_path_file,
};
