//! mazekit-core - Grid, path and maze data structures
//!
//! This crate holds the immutable data model shared by the rest of the
//! workspace:
//!
//! - **`Lcg`** - the deterministic random byte/word cursor every
//!   randomized construction threads through its calls
//! - **`Direction`** - orthogonal steps on the cell grid
//! - **`Path`** - a walk stored as start cell plus direction sequence,
//!   with its per-row cell view and signed-area integral
//! - **`Maze`** - vertical/horizontal wall bitmaps with implicit closed
//!   outer boundary
//!
//! Construction of interesting paths and mazes lives in `mazekit-algo`;
//! BMP persistence lives in `mazekit-io`.

pub mod direction;
pub mod error;
pub mod maze;
pub mod path;
pub mod rng;

pub use direction::Direction;
pub use error::{Error, Result};
pub use maze::Maze;
pub use path::{Path, PathCell};
pub use rng::Lcg;
