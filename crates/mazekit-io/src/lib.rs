//! mazekit-io - BMP persistence for paths and mazes
//!
//! Mazes and paths are serialized as monochrome (1-bit) bottom-up Windows
//! BMP images with a fixed 62-byte prologue; see the [`bmp`] module for
//! the exact pixel encoding. Streaming functions operate on any
//! `io::Read`/`io::Write`; the `*_file` helpers wrap them in buffered
//! file handles.

pub mod bmp;
pub mod error;

pub use error::{IoError, IoResult};

use mazekit_core::{Maze, Path};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

/// Read a maze from a BMP file.
pub fn read_maze_file<P: AsRef<std::path::Path>>(path: P) -> IoResult<Maze> {
    let file = File::open(path)?;
    bmp::read_maze(BufReader::new(file))
}

/// Write a maze to a BMP file, replacing any existing file.
pub fn write_maze_file<P: AsRef<std::path::Path>>(maze: &Maze, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    bmp::write_maze(maze, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Read a path from a BMP file.
pub fn read_path_file<P: AsRef<std::path::Path>>(path: P) -> IoResult<Path> {
    let file = File::open(path)?;
    bmp::read_path(BufReader::new(file))
}

/// Write a path to a BMP file, replacing any existing file.
pub fn write_path_file<P: AsRef<std::path::Path>>(walk: &Path, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    bmp::write_path(walk, &mut writer)?;
    writer.flush()?;
    Ok(())
}
