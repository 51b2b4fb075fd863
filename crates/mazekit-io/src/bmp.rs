//! Monochrome BMP codec
//!
//! Reads and writes the fixed 1-bit-per-pixel, bottom-up Windows BMP
//! layout used to persist paths and mazes: 14-byte file header, 40-byte
//! BITMAPINFOHEADER, 8-byte black/white palette, then pixel rows padded
//! to 4 bytes, bit 7 leftmost, bit value 0 black and 1 white.
//!
//! A maze of H x W cells maps onto a (2W+1) x (2H+1) pixel image: cells
//! at odd pixel coordinates, corridors at the even offsets between them,
//! wall nodes at even/even positions. A maze is drawn as white corridors
//! on a black background with one-pixel entrance/exit gaps in the outer
//! border; a path is drawn as black marks on a white background.
//!
//! The reader is strict: every fixed header byte is validated, and only
//! the exact {black, white} palette in that order is accepted.

use crate::error::{IoError, IoResult};
use mazekit_core::{Direction, Maze, Path};
use std::io::{Read, Write};

/// Offset of the pixel data: file header + info header + palette
const PIXEL_OFFSET: u32 = 62;

/// Fixed 1-bit palette: black, then white
const PALETTE: [u8; 8] = [0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0x00];

/// Largest cell-grid dimension whose pixel dimension 2n+1 fits in `u32`
const MAX_CELL_DIM: u32 = (u32::MAX - 1) / 2;

/// Bytes per pixel row, padded to a multiple of 4.
#[inline]
fn row_bytes(width_px: u32) -> usize {
    ((((width_px - 1) >> 5) + 1) << 2) as usize
}

#[inline]
fn set_white(row: &mut [u8], x: u32) {
    row[(x >> 3) as usize] |= 1u8 << (7 - (x & 7));
}

#[inline]
fn flip(row: &mut [u8], x: u32) {
    row[(x >> 3) as usize] ^= 1u8 << (7 - (x & 7));
}

#[inline]
fn is_black(row: &[u8], x: u32) -> bool {
    (row[(x >> 3) as usize] & (1u8 << (7 - (x & 7)))) == 0
}

/// Write the 62-byte BMP prologue for a `width_px` x `height_px` image.
///
/// The caller follows up with `height_px` padded pixel rows, bottom row
/// first.
pub fn write_header<W: Write>(writer: &mut W, width_px: u32, height_px: u32) -> IoResult<()> {
    let image_size = (height_px).wrapping_mul(row_bytes(width_px) as u32);
    let file_size = image_size.wrapping_add(PIXEL_OFFSET);

    // File header
    writer.write_all(b"BM")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(&[0u8; 4])?; // Reserved
    writer.write_all(&PIXEL_OFFSET.to_le_bytes())?;

    // Info header
    writer.write_all(&40u32.to_le_bytes())?; // Info header size
    writer.write_all(&(width_px as i32).to_le_bytes())?;
    writer.write_all(&(height_px as i32).to_le_bytes())?; // Bottom-up
    writer.write_all(&1u16.to_le_bytes())?; // Planes
    writer.write_all(&1u16.to_le_bytes())?; // Bits per pixel
    writer.write_all(&0u32.to_le_bytes())?; // No compression
    writer.write_all(&image_size.to_le_bytes())?;
    writer.write_all(&0i32.to_le_bytes())?; // X pixels per meter
    writer.write_all(&0i32.to_le_bytes())?; // Y pixels per meter
    writer.write_all(&0u32.to_le_bytes())?; // Colors used
    writer.write_all(&0u32.to_le_bytes())?; // Important colors

    writer.write_all(&PALETTE)?;
    Ok(())
}

/// Read and validate the 62-byte BMP prologue.
///
/// Returns the pixel dimensions `(width_px, height_px)` and leaves the
/// stream positioned at the first (bottom) pixel row. Every fixed byte is
/// checked against the layout `write_header` produces; the resolution
/// fields are the only bytes left unchecked.
pub fn read_header<R: Read>(reader: &mut R) -> IoResult<(u32, u32)> {
    let mut header = [0u8; PIXEL_OFFSET as usize];
    reader.read_exact(&mut header)?;

    if &header[0..2] != b"BM" {
        return Err(IoError::InvalidData("not a BMP file".to_string()));
    }

    let width = i32::from_le_bytes([header[18], header[19], header[20], header[21]]);
    let height = i32::from_le_bytes([header[22], header[23], header[24], header[25]]);
    if width <= 0 || height <= 0 {
        return Err(IoError::InvalidData(format!(
            "unsupported bitmap dimensions: {width}x{height}"
        )));
    }
    let width = width as u32;
    let height = height as u32;

    let image_size = height.wrapping_mul(row_bytes(width) as u32);
    let file_size = image_size.wrapping_add(PIXEL_OFFSET);

    let fixed_ok = header[2..6] == file_size.to_le_bytes()
        && header[10..14] == PIXEL_OFFSET.to_le_bytes()
        && header[14..18] == 40u32.to_le_bytes()
        && header[26..28] == 1u16.to_le_bytes() // planes
        && header[28..30] == 1u16.to_le_bytes() // bits per pixel
        && header[30..34] == [0u8; 4] // compression
        && header[34..38] == image_size.to_le_bytes()
        && header[46..54] == [0u8; 8] // color counts
        && header[54..62] == PALETTE;
    if !fixed_ok {
        return Err(IoError::InvalidData(
            "not a monochrome maze bitmap".to_string(),
        ));
    }

    Ok((width, height))
}

/// Write a maze as a monochrome BMP.
pub fn write_maze<W: Write>(maze: &Maze, mut writer: W) -> IoResult<()> {
    let height = maze.height();
    let width = maze.width();
    if height > MAX_CELL_DIM || width > MAX_CELL_DIM {
        return Err(IoError::InvalidData(format!(
            "maze too large for bitmap: {height}x{width}"
        )));
    }
    let width_px = 2 * width + 1;
    let row_len = row_bytes(width_px);
    write_header(&mut writer, width_px, 2 * height + 1)?;

    // Bottom border, with the exit gap below the bottom-right cell.
    let mut corridor_row = vec![0u8; row_len];
    set_white(&mut corridor_row, width_px - 2);
    writer.write_all(&corridor_row)?;

    for i in (1..height).rev() {
        let mut cell_row = vec![0u8; row_len];
        corridor_row.fill(0);
        for j in 0..width {
            if !maze.wall_above(i, j) {
                set_white(&mut corridor_row, 2 * j + 1);
            }
            if j != 0 && !maze.wall_left(i, j) {
                set_white(&mut cell_row, 2 * j);
            }
            set_white(&mut cell_row, 2 * j + 1);
        }
        writer.write_all(&cell_row)?;
        writer.write_all(&corridor_row)?;
    }

    // Row 0 and the top border with the entrance gap above cell (0, 0).
    let mut cell_row = vec![0u8; row_len];
    corridor_row.fill(0);
    set_white(&mut corridor_row, 1);
    for j in 0..width {
        if j != 0 && !maze.wall_left(0, j) {
            set_white(&mut cell_row, 2 * j);
        }
        set_white(&mut cell_row, 2 * j + 1);
    }
    writer.write_all(&cell_row)?;
    writer.write_all(&corridor_row)?;
    Ok(())
}

/// Read a maze from a monochrome BMP.
///
/// Both pixel dimensions must be odd. A black pixel at a corridor
/// position means the corresponding wall is present.
pub fn read_maze<R: Read>(mut reader: R) -> IoResult<Maze> {
    let (width_px, height_px) = read_header(&mut reader)?;
    if width_px & 1 == 0 || height_px & 1 == 0 {
        return Err(IoError::InvalidData(
            "maze bitmap dimensions must be odd".to_string(),
        ));
    }
    let row_len = row_bytes(width_px);
    let mut cell_row = vec![0u8; row_len];
    let mut corridor_row = vec![0u8; row_len];
    // Bottom border row carries no wall information.
    reader.read_exact(&mut corridor_row)?;

    let height = (height_px >> 1) as usize;
    let width = (width_px >> 1) as usize;
    let mut vertical_walls = vec![vec![false; width]; height];
    let mut horizontal_walls = vec![vec![false; width]; height];
    for i in (1..=height).rev() {
        reader.read_exact(&mut cell_row)?;
        reader.read_exact(&mut corridor_row)?;
        for j in 0..width {
            horizontal_walls[i - 1][j] = is_black(&corridor_row, 2 * j as u32 + 1) && i != 1;
            vertical_walls[i - 1][j] = is_black(&cell_row, 2 * j as u32) && j != 0;
        }
    }
    Ok(Maze::from_walls(vertical_walls, horizontal_walls)?)
}

/// Write a path as a monochrome BMP: black marks on a white background.
pub fn write_path<W: Write>(path: &Path, mut writer: W) -> IoResult<()> {
    let height = path.height();
    let width = path.width();
    if height > MAX_CELL_DIM || width > MAX_CELL_DIM {
        return Err(IoError::InvalidData(format!(
            "path grid too large for bitmap: {height}x{width}"
        )));
    }
    let width_px = 2 * width + 1;
    let row_len = row_bytes(width_px);
    write_header(&mut writer, width_px, 2 * height + 1)?;

    let mut white_row = vec![0u8; row_len];
    for x in 0..width_px {
        set_white(&mut white_row, x);
    }
    writer.write_all(&white_row)?;

    let cells = path.cells();
    for i in (1..=height as usize).rev() {
        let mut corridor_row = white_row.clone();
        let mut cell_row = white_row.clone();
        for cell in &cells[i - 1] {
            if cell.above {
                flip(&mut corridor_row, 2 * cell.column + 1);
            }
            if cell.left {
                flip(&mut cell_row, 2 * cell.column);
            }
            flip(&mut cell_row, 2 * cell.column + 1);
        }
        writer.write_all(&cell_row)?;
        writer.write_all(&corridor_row)?;
    }
    Ok(())
}

/// Read a path from a monochrome BMP.
///
/// The black marks must form a simple path: no cell of degree three or
/// more, and at least one cell of degree one. The walk starts at the
/// first degree-1 cell in scan order, consuming connections in the order
/// Up, Down, Left, Right.
pub fn read_path<R: Read>(mut reader: R) -> IoResult<Path> {
    let (width_px, height_px) = read_header(&mut reader)?;
    if width_px & 1 == 0 || height_px & 1 == 0 {
        return Err(IoError::InvalidData(
            "path bitmap dimensions must be odd".to_string(),
        ));
    }
    let row_len = row_bytes(width_px);
    let mut cell_row = vec![0u8; row_len];
    let mut corridor_row = vec![0u8; row_len];
    reader.read_exact(&mut corridor_row)?;

    let height = (height_px >> 1) as usize;
    let width = (width_px >> 1) as usize;
    // horizontal[i][j]: cell (i, j) joined to (i-1, j); vertical[i][j]: to (i, j-1)
    let mut horizontal = vec![vec![false; width]; height];
    let mut vertical = vec![vec![false; width]; height];
    for i in (1..=height).rev() {
        reader.read_exact(&mut cell_row)?;
        reader.read_exact(&mut corridor_row)?;
        for j in 0..width {
            horizontal[i - 1][j] = i != 1 && is_black(&corridor_row, 2 * j as u32 + 1);
            vertical[i - 1][j] = j != 0 && is_black(&cell_row, 2 * j as u32);
        }
    }

    let mut start = None;
    for i in 0..height {
        for j in 0..width {
            let mut degree = 0u8;
            if horizontal[i][j] {
                degree += 1;
            }
            if vertical[i][j] {
                degree += 1;
            }
            if i != height - 1 && horizontal[i + 1][j] {
                degree += 1;
            }
            if j != width - 1 && vertical[i][j + 1] {
                degree += 1;
            }
            if degree >= 3 {
                return Err(IoError::InvalidData(
                    "bitmap does not encode a simple path".to_string(),
                ));
            }
            if degree == 1 && start.is_none() {
                start = Some((i, j));
            }
        }
    }
    let Some((start_row, start_column)) = start else {
        return Err(IoError::InvalidData(
            "path bitmap has no endpoint cell".to_string(),
        ));
    };

    let mut directions = Vec::new();
    let (mut i, mut j) = (start_row, start_column);
    loop {
        if i != 0 && horizontal[i][j] {
            directions.push(Direction::Up);
            horizontal[i][j] = false;
            i -= 1;
        } else if i != height - 1 && horizontal[i + 1][j] {
            directions.push(Direction::Down);
            horizontal[i + 1][j] = false;
            i += 1;
        } else if j != 0 && vertical[i][j] {
            directions.push(Direction::Left);
            vertical[i][j] = false;
            j -= 1;
        } else if j != width - 1 && vertical[i][j + 1] {
            directions.push(Direction::Right);
            vertical[i][j + 1] = false;
            j += 1;
        } else {
            break;
        }
    }
    Ok(Path::new(
        height as u32,
        width as u32,
        start_row as u32,
        start_column as u32,
        directions,
    )?)
}
