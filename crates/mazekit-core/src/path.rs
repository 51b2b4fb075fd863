//! Path on a cell grid
//!
//! A `Path` is an ordered walk over orthogonally adjacent cells of an
//! `height` x `width` grid, stored as a start cell plus a direction
//! sequence. Paths produced by the generators are self-avoiding; the
//! wall-following solver may produce a walk that revisits cells on mazes
//! with cycles, so only in-bounds replay is enforced here.

use crate::direction::Direction;
use crate::error::{Error, Result};
use std::fmt;

/// One path cell inside a row view, sorted by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathCell {
    /// Column index of the cell
    pub column: u32,
    /// True if the cell is joined to its upper neighbour along the path
    pub above: bool,
    /// True if the cell is joined to its left neighbour along the path
    pub left: bool,
}

/// An orthogonal walk on a cell grid.
///
/// The degenerate default is the empty path on a 1x1 grid, which doubles
/// as the total-failure fallback object at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    height: u32,
    width: u32,
    start_row: u32,
    start_column: u32,
    directions: Vec<Direction>,
}

impl Default for Path {
    fn default() -> Self {
        Path {
            height: 1,
            width: 1,
            start_row: 0,
            start_column: 0,
            directions: Vec::new(),
        }
    }
}

impl Path {
    /// Create a path from its parts, validating that the replay from the
    /// start cell stays inside the grid.
    ///
    /// Self-avoidance is not checked; see the module documentation.
    pub fn new(
        height: u32,
        width: u32,
        start_row: u32,
        start_column: u32,
        directions: Vec<Direction>,
    ) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::InvalidDimension {
                height: height as u64,
                width: width as u64,
            });
        }
        if start_row >= height || start_column >= width {
            return Err(Error::CellOutOfBounds {
                row: start_row,
                column: start_column,
                height,
                width,
            });
        }
        let (mut row, mut column) = (start_row, start_column);
        for (step, dir) in directions.iter().enumerate() {
            (row, column) = dir
                .checked_step(row, column, height, width)
                .ok_or(Error::StepOutOfBounds { step })?;
        }
        Ok(Path {
            height,
            width,
            start_row,
            start_column,
            directions,
        })
    }

    /// Create a path without replay validation.
    ///
    /// # Caller contract
    ///
    /// The dimensions must be nonzero, the start cell in bounds, and every
    /// step of `directions` must stay inside the grid. The builders and
    /// the solver uphold this by construction.
    pub fn new_unchecked(
        height: u32,
        width: u32,
        start_row: u32,
        start_column: u32,
        directions: Vec<Direction>,
    ) -> Self {
        Path {
            height,
            width,
            start_row,
            start_column,
            directions,
        }
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Start cell as `(row, column)`
    #[inline]
    pub fn start(&self) -> (u32, u32) {
        (self.start_row, self.start_column)
    }

    /// Number of steps in the path
    #[inline]
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    /// True for a zero-length path
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    /// The direction sequence
    #[inline]
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// End cell as `(row, column)`, obtained by replaying the directions.
    pub fn end(&self) -> (u32, u32) {
        let (mut row, mut column) = (self.start_row, self.start_column);
        for dir in &self.directions {
            match dir {
                Direction::Up => row -= 1,
                Direction::Down => row += 1,
                Direction::Left => column -= 1,
                Direction::Right => column += 1,
            }
        }
        (row, column)
    }

    /// Cells contained in the path, one vector per grid row, each sorted
    /// ascending by column.
    ///
    /// The `above`/`left` flags record which of a cell's corridors the
    /// path actually uses, which is what the maze builders carve around.
    pub fn cells(&self) -> Vec<Vec<PathCell>> {
        let mut rows: Vec<Vec<PathCell>> = vec![Vec::new(); self.height as usize];
        let (mut i, mut j) = (self.start_row, self.start_column);
        rows[i as usize].push(PathCell {
            column: j,
            above: false,
            left: false,
        });
        for dir in &self.directions {
            match dir {
                Direction::Up => {
                    // The connection upward belongs to the cell being left.
                    if let Some(cell) = rows[i as usize].last_mut() {
                        cell.above = true;
                    }
                    i -= 1;
                    rows[i as usize].push(PathCell {
                        column: j,
                        above: false,
                        left: false,
                    });
                }
                Direction::Down => {
                    i += 1;
                    rows[i as usize].push(PathCell {
                        column: j,
                        above: true,
                        left: false,
                    });
                }
                Direction::Left => {
                    if let Some(cell) = rows[i as usize].last_mut() {
                        cell.left = true;
                    }
                    j -= 1;
                    rows[i as usize].push(PathCell {
                        column: j,
                        above: false,
                        left: false,
                    });
                }
                Direction::Right => {
                    j += 1;
                    rows[i as usize].push(PathCell {
                        column: j,
                        above: false,
                        left: true,
                    });
                }
            }
        }
        for row in &mut rows {
            row.sort_by_key(|cell| cell.column);
        }
        rows
    }

    /// Signed area under the path: the sum of origin rows over `Right`
    /// steps minus the sum of origin rows over `Left` steps.
    pub fn integral(&self) -> i64 {
        let mut result: i64 = 0;
        let mut i = self.start_row;
        for dir in &self.directions {
            match dir {
                Direction::Up => i -= 1,
                Direction::Down => i += 1,
                Direction::Left => result -= i as i64,
                Direction::Right => result += i as i64,
            }
        }
        result
    }
}

const BLOCK: char = '\u{2588}';

impl fmt::Display for Path {
    /// Renders a (2H+1)-line, (2W+1)-column diagram: cells on odd
    /// positions, corridors at even offsets, with the top-left and
    /// bottom-right boundary markers the maze diagram uses for its
    /// entrance and exit.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = (self.width as usize) * 2 + 1;
        let mut lines: Vec<Vec<char>> = Vec::with_capacity((self.height as usize) * 2 + 1);
        for row_cells in self.cells() {
            let mut corridor_line = vec![' '; cols];
            let mut cell_line = vec![' '; cols];
            for cell in &row_cells {
                let c = cell.column as usize;
                if cell.above {
                    corridor_line[2 * c + 1] = BLOCK;
                }
                if cell.left {
                    cell_line[2 * c] = BLOCK;
                }
                cell_line[2 * c + 1] = BLOCK;
            }
            lines.push(corridor_line);
            lines.push(cell_line);
        }
        let mut bottom = vec![' '; cols];
        bottom[cols - 2] = BLOCK;
        lines.push(bottom);
        lines[0][1] = BLOCK;
        for (n, line) in lines.iter().enumerate() {
            if n != 0 {
                writeln!(f)?;
            }
            for ch in line {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_degenerate() {
        let path = Path::default();
        assert_eq!((path.height(), path.width()), (1, 1));
        assert_eq!(path.start(), (0, 0));
        assert!(path.is_empty());
    }

    #[test]
    fn test_new_rejects_out_of_bounds() {
        assert!(Path::new(0, 3, 0, 0, Vec::new()).is_err());
        assert!(Path::new(3, 3, 3, 0, Vec::new()).is_err());
        assert!(Path::new(1, 2, 0, 0, vec![Direction::Up]).is_err());
        assert!(Path::new(1, 2, 0, 0, vec![Direction::Right, Direction::Right]).is_err());
        assert!(Path::new(1, 2, 0, 0, vec![Direction::Right]).is_ok());
    }

    #[test]
    fn test_cells_flags_and_order() {
        // (1,1) -> Up -> (0,1) -> Left -> (0,0) -> Down -> (1,0)
        let path = Path::new(
            3,
            3,
            1,
            1,
            vec![Direction::Up, Direction::Left, Direction::Down],
        )
        .unwrap();
        let rows = path.cells();
        assert_eq!(
            rows[0],
            vec![
                PathCell {
                    column: 0,
                    above: false,
                    left: false
                },
                PathCell {
                    column: 1,
                    above: false,
                    left: true
                },
            ]
        );
        assert_eq!(
            rows[1],
            vec![
                PathCell {
                    column: 0,
                    above: true,
                    left: false
                },
                PathCell {
                    column: 1,
                    above: true,
                    left: false
                },
            ]
        );
        assert!(rows[2].is_empty());
    }

    #[test]
    fn test_integral_counts_horizontal_steps_by_row() {
        // Right at row 2, Up, Right at row 1, Left at row 1.
        let path = Path::new(
            3,
            3,
            2,
            0,
            vec![
                Direction::Right,
                Direction::Up,
                Direction::Right,
                Direction::Left,
            ],
        )
        .unwrap();
        assert_eq!(path.integral(), 2 + 1 - 1);
        assert_eq!(path.end(), (1, 1));
    }

    #[test]
    fn test_display_degenerate() {
        let text = Path::default().to_string();
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines, vec![" █ ", " █ ", " █ "]);
    }

    #[test]
    fn test_display_single_step() {
        let path = Path::new(1, 2, 0, 0, vec![Direction::Right]).unwrap();
        let text = path.to_string();
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines, vec![" █   ", " ███ ", "   █ "]);
    }
}
