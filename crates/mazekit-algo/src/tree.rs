//! Spanning-tree maze construction with an embedded solution path
//!
//! Carves a perfect maze - every pair of cells joined by exactly one
//! corridor - that contains a prescribed path as carved corridors. The
//! grid is processed one row at a time with a ring-buffered union-find
//! holding one equivalence class per column plus two sentinels: a
//! "solution" class accumulating the cells of the prescribed path and a
//! "border" class standing in for the row's left margin. Walls are drawn
//! or withheld per cell from one random byte checked against thresholds
//! derived from a six-byte probability profile, under three invariants:
//! never union two equal classes (no cycles), carve the solution path's
//! corridors exactly as prescribed, and wall the path off on the sides
//! its geometry does not use.

use crate::error::{AlgoError, AlgoResult};
use crate::pool::Pool;
use mazekit_core::{Lcg, Maze, Path};

/// Six-byte probability profile shaping corridor statistics.
///
/// The default profile is the tuning the interactive commands offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbabilityProfile([u8; 6]);

impl Default for ProbabilityProfile {
    fn default() -> Self {
        ProbabilityProfile([163, 118, 123, 123, 94, 103])
    }
}

impl ProbabilityProfile {
    /// Profile from raw bytes
    pub fn new(values: [u8; 6]) -> Self {
        ProbabilityProfile(values)
    }

    /// The raw bytes
    pub fn values(&self) -> [u8; 6] {
        self.0
    }
}

/// Carve a perfect maze around the given solution path.
///
/// The maze spans the path's grid; the path's corridors are open in the
/// result and every cell is reachable from every other through exactly
/// one corridor sequence. One random byte is consumed per cell plus one
/// per accepted-or-rejected join of the closing sweep, in fixed order.
pub fn tree_maze(path: &Path, profile: &ProbabilityProfile, rng: &mut Lcg) -> AlgoResult<Maze> {
    let height = path.height();
    let width = path.width();
    if width > u32::MAX - 2 {
        return Err(AlgoError::PoolOverflow(width));
    }
    let h = height as usize;
    let w = width as usize;
    let mut vertical = vec![vec![false; w]; h];
    let mut horizontal = vec![vec![false; w]; h];
    let solution = path.cells();

    let [p1, p2, p3, p4, p5, p6] = profile.0;
    let p12 = ((p1 as u32 * p2 as u32) / 256) as u8;
    let p34 = (p3 as u32 - p3 as u32 * p4 as u32 / 256 + p4 as u32) as u8;
    let p35 = ((p3 as u32 * p5 as u32) / 256) as u8;

    let mut pool = Pool::new(width + 2);
    let mut solution_label = pool.pop(0);
    let mut border_label = pool.pop(0);
    let mut column_labels = vec![0u32; w];
    for label in column_labels.iter_mut() {
        *label = pool.pop(1);
    }

    for i in 0..h {
        let row_cells = &solution[i];
        let mut next_cell = 0usize;
        let mut next_column = row_cells.first().map_or(width, |cell| cell.column);
        border_label = pool.get(border_label);
        if pool.degrees[border_label as usize] != 0 {
            border_label = pool.pop(0);
        }
        let mut index = border_label;
        for j in 0..w {
            let mut above = pool.get(column_labels[j]);
            let byte = rng.next_u8();
            if j as u32 == next_column {
                let cell = row_cells[next_cell];
                solution_label = pool.get(solution_label);
                if index == solution_label {
                    if !cell.left {
                        vertical[i][j] = true;
                    }
                    if above == solution_label {
                        if !cell.above {
                            horizontal[i][j] = true;
                        }
                    } else if pool.degrees[above as usize] == 1 || byte < p35 || byte >= p34 {
                        pool.join(&mut index, &mut above);
                    } else {
                        horizontal[i][j] = true;
                        pool.degrees[above as usize] -= 1;
                        pool.degrees[index as usize] += 1;
                    }
                } else if above == solution_label {
                    if !cell.above {
                        horizontal[i][j] = true;
                    }
                    if (byte >= p35 && byte < p3) || byte >= p34 {
                        pool.join(&mut index, &mut solution_label);
                    } else {
                        vertical[i][j] = true;
                        index = solution_label;
                    }
                } else if above == index {
                    if byte < p12 {
                        horizontal[i][j] = true;
                        vertical[i][j] = true;
                        pool.degrees[index as usize] -= 1;
                        pool.degrees[solution_label as usize] += 1;
                        index = solution_label;
                    } else {
                        if byte < p1 {
                            horizontal[i][j] = true;
                        } else {
                            vertical[i][j] = true;
                        }
                        pool.join(&mut index, &mut solution_label);
                    }
                } else if pool.degrees[above as usize] == 1 {
                    pool.join(&mut solution_label, &mut above);
                    if byte < p6 {
                        vertical[i][j] = true;
                        index = solution_label;
                    } else {
                        pool.join(&mut index, &mut solution_label);
                    }
                } else if byte < p35 {
                    vertical[i][j] = true;
                    pool.join(&mut solution_label, &mut above);
                    index = solution_label;
                } else if byte < p3 {
                    horizontal[i][j] = true;
                    pool.degrees[above as usize] -= 1;
                    pool.degrees[index as usize] += 1;
                    pool.join(&mut index, &mut solution_label);
                } else if byte < p34 {
                    vertical[i][j] = true;
                    horizontal[i][j] = true;
                    pool.degrees[above as usize] -= 1;
                    pool.degrees[solution_label as usize] += 1;
                    index = solution_label;
                } else {
                    pool.join(&mut index, &mut solution_label);
                    pool.join(&mut index, &mut above);
                }
                next_cell += 1;
                next_column = row_cells.get(next_cell).map_or(width, |cell| cell.column);
            } else if index == above {
                if byte < p12 {
                    horizontal[i][j] = true;
                    vertical[i][j] = true;
                    pool.degrees[above as usize] -= 1;
                    index = pool.pop(1);
                } else if byte < p1 {
                    horizontal[i][j] = true;
                } else {
                    vertical[i][j] = true;
                }
            } else if pool.degrees[above as usize] == 1 {
                if byte < p6 {
                    vertical[i][j] = true;
                    index = above;
                } else {
                    pool.join(&mut index, &mut above);
                }
            } else if byte < p35 {
                vertical[i][j] = true;
                index = above;
            } else if byte < p3 {
                horizontal[i][j] = true;
                pool.degrees[above as usize] -= 1;
                pool.degrees[index as usize] += 1;
            } else if byte < p34 {
                vertical[i][j] = true;
                horizontal[i][j] = true;
                pool.degrees[above as usize] -= 1;
                index = pool.pop(1);
            } else {
                pool.join(&mut index, &mut above);
            }
            column_labels[j] = index;
        }
    }

    // Closing sweep along the bottom row: join the remaining classes into
    // the border class with a degree-weighted acceptance, reopening the
    // bottom-row wall for each accepted join.
    let mut index = pool.get(border_label);
    for j in 0..w {
        let mut above = pool.get(column_labels[j]);
        if index != above {
            let byte = rng.next_u8() as u32;
            if (pool.degrees[index as usize].wrapping_add(1)).wrapping_mul(byte) < 256 {
                vertical[h - 1][j] = false;
                pool.join(&mut index, &mut above);
            } else {
                index = above;
            }
        }
        pool.degrees[index as usize] = pool.degrees[index as usize].wrapping_sub(1);
    }

    // The left border is implicit, never a stored wall.
    for row in vertical.iter_mut() {
        row[0] = false;
    }
    Ok(Maze::from_walls(vertical, horizontal)?)
}
