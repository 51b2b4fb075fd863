//! Left-hand wall-following maze solver
//!
//! Keeps a virtual left hand on the wall while walking: after stepping
//! in some direction the preferred next direction is its left turn, and
//! each blocked attempt rotates the preference right. Backtracked
//! corridors cancel out of the recorded walk. The follower only ever
//! traces the wall component it first touches, so it retries from each
//! open exit of the start cell; a target sealed behind a wall island
//! detached from all of those components is not found.

use mazekit_core::{Direction, Maze, Path};

/// Find a path between two cells with the left-hand rule.
///
/// Coordinates saturate to the grid boundary. Equal endpoints yield the
/// empty path at the start; so does exhausting every initial exit in a
/// cycle back to the start.
pub fn solve(maze: &Maze, start: (u32, u32), target: (u32, u32)) -> Path {
    let height = maze.height();
    let width = maze.width();
    let start_row = start.0.min(height - 1);
    let start_column = start.1.min(width - 1);
    let target_row = target.0.min(height - 1);
    let target_column = target.1.min(width - 1);
    if start_row == target_row && start_column == target_column {
        return Path::new_unchecked(height, width, start_row, start_column, Vec::new());
    }

    let mut initial = Vec::with_capacity(4);
    if start_row != 0 && !maze.wall_above(start_row, start_column) {
        initial.push(Direction::Up);
    }
    if start_row != height - 1 && !maze.wall_above(start_row + 1, start_column) {
        initial.push(Direction::Down);
    }
    if start_column != 0 && !maze.wall_left(start_row, start_column) {
        initial.push(Direction::Left);
    }
    if start_column != width - 1 && !maze.wall_left(start_row, start_column + 1) {
        initial.push(Direction::Right);
    }

    for first in initial {
        let (mut i, mut j) = (start_row, start_column);
        let mut directions = vec![first];
        match first {
            Direction::Up => i -= 1,
            Direction::Down => i += 1,
            Direction::Left => j -= 1,
            Direction::Right => j += 1,
        }
        let mut preference = first.turn_left();
        while (i != start_row || j != start_column) && (i != target_row || j != target_column) {
            let open = match preference {
                Direction::Up => i != 0 && !maze.wall_above(i, j),
                Direction::Down => i != height - 1 && !maze.wall_above(i + 1, j),
                Direction::Left => j != 0 && !maze.wall_left(i, j),
                Direction::Right => j != width - 1 && !maze.wall_left(i, j + 1),
            };
            if open {
                if directions.last() == Some(&preference.reverse()) {
                    directions.pop();
                } else {
                    directions.push(preference);
                }
                match preference {
                    Direction::Up => i -= 1,
                    Direction::Down => i += 1,
                    Direction::Left => j -= 1,
                    Direction::Right => j += 1,
                }
                preference = preference.turn_left();
            } else {
                preference = preference.turn_right();
            }
        }
        if i == target_row && j == target_column {
            return Path::new_unchecked(height, width, start_row, start_column, directions);
        }
    }
    Path::new_unchecked(height, width, start_row, start_column, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazekit_core::Lcg;

    fn walled_maze(vertical: Vec<Vec<bool>>, horizontal: Vec<Vec<bool>>) -> Maze {
        Maze::from_walls(vertical, horizontal).unwrap()
    }

    #[test]
    fn test_equal_endpoints_yield_empty_path() {
        let maze = Maze::default();
        let path = solve(&maze, (0, 0), (0, 0));
        assert!(path.is_empty());
        assert_eq!(path.start(), (0, 0));

        let options = crate::generator::PathGenOptions::new(6, 6)
            .with_start(0, 0)
            .with_target(5, 5);
        let random = crate::generator::random_path(&options, &mut Lcg::new(2)).unwrap();
        let maze = crate::tree::tree_maze(&random, &Default::default(), &mut Lcg::new(3)).unwrap();
        let path = solve(&maze, (3, 3), (3, 3));
        assert!(path.is_empty());
        assert_eq!(path.start(), (3, 3));
    }

    #[test]
    fn test_replay_ends_at_target_through_open_walls() {
        let options = crate::generator::PathGenOptions::new(7, 7)
            .with_start(6, 0)
            .with_target(0, 6)
            .with_history(2, 90);
        let random = crate::generator::random_path(&options, &mut Lcg::new(13)).unwrap();
        let maze = crate::tree::tree_maze(&random, &Default::default(), &mut Lcg::new(8)).unwrap();
        for target in [(0u32, 0u32), (6, 6), (3, 4), (0, 6)] {
            let path = solve(&maze, (6, 0), target);
            let (mut i, mut j) = path.start();
            for dir in path.directions() {
                match dir {
                    Direction::Up => {
                        assert!(!maze.wall_above(i, j));
                        i -= 1;
                    }
                    Direction::Down => {
                        i += 1;
                        assert!(!maze.wall_above(i, j));
                    }
                    Direction::Left => {
                        assert!(!maze.wall_left(i, j));
                        j -= 1;
                    }
                    Direction::Right => {
                        j += 1;
                        assert!(!maze.wall_left(i, j));
                    }
                }
            }
            assert_eq!((i, j), target);
        }
    }

    #[test]
    fn test_two_cell_corridor() {
        let maze = walled_maze(vec![vec![false, false]], vec![vec![false, false]]);
        let path = solve(&maze, (0, 0), (0, 1));
        assert_eq!(path.directions(), &[Direction::Right]);
        let back = solve(&maze, (0, 1), (0, 0));
        assert_eq!(back.directions(), &[Direction::Left]);
    }

    #[test]
    fn test_unreachable_target_returns_empty_path() {
        // Vertical wall splits the 2x2 grid into two columns.
        let maze = walled_maze(
            vec![vec![false, true], vec![false, true]],
            vec![vec![false, false], vec![false, false]],
        );
        let path = solve(&maze, (0, 0), (0, 1));
        assert!(path.is_empty());
        assert_eq!(path.start(), (0, 0));
    }

    #[test]
    fn test_out_of_range_endpoints_saturate() {
        let maze = walled_maze(vec![vec![false, false]], vec![vec![false, false]]);
        let path = solve(&maze, (9, 9), (0, 0));
        assert_eq!(path.start(), (0, 1));
        assert_eq!(path.directions(), &[Direction::Left]);
    }
}
