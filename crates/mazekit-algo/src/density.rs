//! Random-density maze construction
//!
//! Draws each interior wall independently with probability density/256,
//! except that the corridors the solution path uses are forced open.
//! Densities above 255 therefore saturate into "every wall present".

use crate::error::AlgoResult;
use mazekit_core::{Lcg, Maze, Path};

/// Build a maze by drawing each interior wall with probability
/// `density`/256, keeping the solution path's corridors open.
///
/// One random byte is consumed per candidate wall, skipping walls that
/// are structurally absent (row 0 above, column 0 left) or forced open by
/// the path; the consumption order is part of the contract.
pub fn density_maze(path: &Path, density: u16, rng: &mut Lcg) -> AlgoResult<Maze> {
    let h = path.height() as usize;
    let w = path.width() as usize;
    let solution = path.cells();
    let mut vertical = vec![vec![false; w]; h];
    let mut horizontal = vec![vec![false; w]; h];
    for i in 0..h {
        let row_cells = &solution[i];
        let mut next_cell = 0usize;
        let mut next_column = row_cells.first().map_or(w, |cell| cell.column as usize);
        for j in 0..w {
            if j == next_column {
                let cell = row_cells[next_cell];
                horizontal[i][j] = i != 0 && !cell.above && (rng.next_u8() as u16) < density;
                vertical[i][j] = j != 0 && !cell.left && (rng.next_u8() as u16) < density;
                next_cell += 1;
                next_column = row_cells
                    .get(next_cell)
                    .map_or(w, |cell| cell.column as usize);
            } else {
                horizontal[i][j] = i != 0 && (rng.next_u8() as u16) < density;
                vertical[i][j] = j != 0 && (rng.next_u8() as u16) < density;
            }
        }
    }
    Ok(Maze::from_walls(vertical, horizontal)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{PathGenOptions, random_path};
    use crate::solver::solve;

    #[test]
    fn test_density_zero_opens_everything() {
        let options = PathGenOptions::new(10, 10).with_start(0, 0).with_target(9, 9);
        let path = random_path(&options, &mut Lcg::new(3)).unwrap();
        let maze = density_maze(&path, 0, &mut Lcg::new(5)).unwrap();
        assert_eq!(maze.corridor_count(), 2 * 10 * 9);
        let solved = solve(&maze, (0, 0), (9, 9));
        assert!(!solved.is_empty());
        assert_eq!(solved.end(), (9, 9));
    }

    #[test]
    fn test_density_max_leaves_only_the_path() {
        let options = PathGenOptions::new(5, 5)
            .with_start(0, 0)
            .with_target(4, 4)
            .with_history(3, 128);
        let path = random_path(&options, &mut Lcg::new(1)).unwrap();
        let maze = density_maze(&path, 65535, &mut Lcg::new(99)).unwrap();
        // Every corridor left open is one the path uses.
        assert_eq!(maze.corridor_count(), path.len() as u64);
        assert_eq!(solve(&maze, (0, 0), (4, 4)), path);
    }

    #[test]
    fn test_density_saturates_above_255() {
        let path = Path::new(4, 4, 0, 0, Vec::new()).unwrap();
        let a = density_maze(&path, 256, &mut Lcg::new(8)).unwrap();
        let b = density_maze(&path, 65535, &mut Lcg::new(8)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.corridor_count(), 0);
    }

    #[test]
    fn test_determinism() {
        let options = PathGenOptions::new(6, 6).with_start(0, 0).with_target(5, 5);
        let path = random_path(&options, &mut Lcg::new(21)).unwrap();
        let a = density_maze(&path, 128, &mut Lcg::new(4)).unwrap();
        let b = density_maze(&path, 128, &mut Lcg::new(4)).unwrap();
        assert_eq!(a, b);
    }
}
