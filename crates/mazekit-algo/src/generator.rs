//! Guided self-avoiding path generation
//!
//! Grows a random self-avoiding path one step at a time while
//! guaranteeing the target stays reachable through the cells the path
//! has not covered yet. On a planar grid a self-avoiding walk can only
//! trap the target by closing a loop that winds around it, so instead of
//! searching the complement the filter keeps two counters per visited
//! cell - cumulative rotation (left minus right turns) and cumulative
//! winding relative to the target - and decides each candidate step from
//! the counter differences across the diagonals and borders the step
//! would close against. The case analysis is exhaustive and every branch
//! of it matters: a wrong sign in one arm produces dead-end paths.

use crate::error::AlgoResult;
use mazekit_core::{Direction, Error, Lcg, Path};
use std::collections::HashMap;

/// Options for [`random_path`].
#[derive(Debug, Clone)]
pub struct PathGenOptions {
    /// Grid height in cells
    pub height: u32,
    /// Grid width in cells
    pub width: u32,
    /// Start cell `(row, column)`; saturates to the grid boundary
    pub start: (u32, u32),
    /// Target cell `(row, column)`; saturates to the grid boundary
    pub target: (u32, u32),
    /// How many recent steps bias the next direction choice
    pub past_decision_count: u16,
    /// Strength of that bias, in 1/256 units per counted step
    pub past_decision_relevance: u16,
}

impl PathGenOptions {
    /// Options for a walk from the top-left to the bottom-right corner
    /// with no recent-direction bias.
    pub fn new(height: u32, width: u32) -> Self {
        PathGenOptions {
            height,
            width,
            start: (0, 0),
            target: (height.saturating_sub(1), width.saturating_sub(1)),
            past_decision_count: 0,
            past_decision_relevance: 0,
        }
    }

    /// Set the start cell
    pub fn with_start(mut self, row: u32, column: u32) -> Self {
        self.start = (row, column);
        self
    }

    /// Set the target cell
    pub fn with_target(mut self, row: u32, column: u32) -> Self {
        self.target = (row, column);
        self
    }

    /// Set the recent-direction window length and its relevance
    pub fn with_history(mut self, count: u16, relevance: u16) -> Self {
        self.past_decision_count = count;
        self.past_decision_relevance = relevance;
        self
    }
}

/// Bookkeeping for one visited cell: the direction it was entered by and
/// the cumulative rotation/winding at that point of the walk.
#[derive(Debug, Clone, Copy)]
struct CellParams {
    direction: Direction,
    rotation: i64,
    winding: i64,
}

/// Sparse per-cell parameters for the growing walk, with windings taken
/// relative to the target cell.
struct WalkParams {
    height: u32,
    width: u32,
    target_row: u32,
    target_column: u32,
    cells: Vec<HashMap<u32, CellParams>>,
}

impl WalkParams {
    fn new(height: u32, width: u32, target_row: u32, target_column: u32) -> Self {
        WalkParams {
            height,
            width,
            target_row,
            target_column,
            cells: vec![HashMap::new(); height as usize],
        }
    }

    fn contains(&self, row: u32, column: u32) -> bool {
        self.cells[row as usize].contains_key(&column)
    }

    fn get(&self, row: u32, column: u32) -> CellParams {
        self.cells[row as usize][&column]
    }

    fn insert(&mut self, row: u32, column: u32, params: CellParams) {
        self.cells[row as usize].insert(column, params);
    }

    /// For the walk head at `(row, column)` and a visited diagonal
    /// neighbour selected by `up`/`left`, decide whether the loop the two
    /// cells close is oriented so that it encloses the target side.
    ///
    /// The winding difference is corrected by one when the target row
    /// lies on the horizontal edge between the two cells right of the
    /// target column; a zero rotation difference is broken by whether
    /// the head was entered along the diagonal's positive orientation
    /// (upper-left: Right, upper-right: Down, lower-right: Left,
    /// lower-left: Up).
    fn loop_parameter(&self, row: u32, column: u32, up: bool, left: bool) -> bool {
        let diag_row = if up { row - 1 } else { row + 1 };
        let diag_column = if left { column - 1 } else { column + 1 };
        let head = self.get(row, column);
        let diag = self.get(diag_row, diag_column);
        let mut winding = head.winding - diag.winding;
        if self.target_row == (if up { row } else { diag_row })
            && self.target_column < (if left { column } else { diag_column })
        {
            winding += if up { 1 } else { -1 };
        }
        let mut rotation = head.rotation - diag.rotation;
        if rotation == 0 {
            let positive = match (left, up) {
                (true, true) => Direction::Right,
                (true, false) => Direction::Up,
                (false, false) => Direction::Left,
                (false, true) => Direction::Down,
            };
            rotation = if head.direction == positive { 1 } else { -1 };
        }
        (rotation > 0) == (winding != 0)
    }

    /// Would stepping from the walk head at `(row, column)` toward
    /// `direction` leave the target reachable through uncovered cells?
    ///
    /// The candidate cell itself is known to be in bounds and unvisited;
    /// this only rules out steps that seal the target off.
    fn path_extension(
        &self,
        touches_border: bool,
        border_row: u32,
        border_column: u32,
        row: u32,
        column: u32,
        direction: Direction,
    ) -> bool {
        if self.height == 1 || self.width == 1 {
            return true;
        }
        let upper = row != 0 && self.contains(row - 1, column);
        let lower = row != self.height - 1 && self.contains(row + 1, column);
        let left = column != 0 && self.contains(row, column - 1);
        let right = column != self.width - 1 && self.contains(row, column + 1);
        let upper_left = row != 0 && column != 0 && self.contains(row - 1, column - 1);
        let upper_right =
            row != 0 && column != self.width - 1 && self.contains(row - 1, column + 1);
        let lower_left =
            row != self.height - 1 && column != 0 && self.contains(row + 1, column - 1);
        let lower_right = row != self.height - 1
            && column != self.width - 1
            && self.contains(row + 1, column + 1);
        let incoming = self.get(row, column).direction;

        if row == 0 {
            if column == 0 || column == self.width - 1 {
                return true;
            }
            return match incoming {
                Direction::Left => {
                    if left || lower || !lower_left {
                        return true;
                    }
                    let winds = self.loop_parameter(row, column, false, true);
                    direction == if winds { Direction::Down } else { Direction::Left }
                }
                Direction::Right => {
                    if right || lower || !lower_right {
                        return true;
                    }
                    let winds = self.loop_parameter(row, column, false, false);
                    direction == if winds { Direction::Right } else { Direction::Down }
                }
                _ => {
                    if !touches_border {
                        return true;
                    }
                    let mut winding = self.get(row, column).winding
                        - self.get(border_row, border_column).winding;
                    if border_row < self.target_row && border_column > column {
                        winding += 1;
                    }
                    direction == if winding == 0 { Direction::Right } else { Direction::Left }
                }
            };
        }
        if row == self.height - 1 {
            if column == 0 || column == self.width - 1 {
                return true;
            }
            return match incoming {
                Direction::Left => {
                    if left || upper || !upper_left {
                        return true;
                    }
                    let winds = self.loop_parameter(row, column, true, true);
                    direction == if winds { Direction::Left } else { Direction::Up }
                }
                Direction::Right => {
                    if right || upper || !upper_right {
                        return true;
                    }
                    let winds = self.loop_parameter(row, column, true, false);
                    direction == if winds { Direction::Up } else { Direction::Right }
                }
                _ => {
                    if !touches_border {
                        return true;
                    }
                    let mut winding = self.get(row, column).winding
                        - self.get(border_row, border_column).winding;
                    if border_row >= self.target_row && border_column > column {
                        winding -= 1;
                    }
                    direction == if winding == 0 { Direction::Right } else { Direction::Left }
                }
            };
        }
        if column == 0 {
            return match incoming {
                Direction::Up => {
                    if right || upper || !upper_right {
                        return true;
                    }
                    let winds = self.loop_parameter(row, column, true, false);
                    direction == if winds { Direction::Up } else { Direction::Right }
                }
                Direction::Down => {
                    if right || lower || !lower_right {
                        return true;
                    }
                    let winds = self.loop_parameter(row, column, false, false);
                    direction == if winds { Direction::Right } else { Direction::Down }
                }
                _ => {
                    if !touches_border {
                        return true;
                    }
                    let mut winding = self.get(row, column).winding
                        - self.get(border_row, border_column).winding;
                    if border_row == 0
                        || (border_row < row && border_column == 0)
                        || (border_row < self.target_row && border_column == self.width - 1)
                    {
                        winding += 1;
                    }
                    direction == if winding == 0 { Direction::Up } else { Direction::Down }
                }
            };
        }
        if column == self.width - 1 {
            return match incoming {
                Direction::Up => {
                    if left || upper || !upper_left {
                        return true;
                    }
                    let winds = self.loop_parameter(row, column, true, true);
                    direction == if winds { Direction::Left } else { Direction::Up }
                }
                Direction::Down => {
                    if left || lower || !lower_left {
                        return true;
                    }
                    let winds = self.loop_parameter(row, column, false, true);
                    direction == if winds { Direction::Down } else { Direction::Left }
                }
                _ => {
                    if !touches_border {
                        return true;
                    }
                    let mut winding = self.get(row, column).winding
                        - self.get(border_row, border_column).winding;
                    if row >= self.target_row {
                        if border_row >= self.target_row
                            && border_row < row
                            && border_column == column
                        {
                            winding -= 1;
                        }
                        return direction
                            == if winding == 0 { Direction::Up } else { Direction::Down };
                    }
                    if border_row > row && border_row < self.target_row && border_column == column
                    {
                        winding += 1;
                    }
                    direction == if winding == 0 { Direction::Down } else { Direction::Up }
                }
            };
        }

        // Interior cell: each visited diagonal forbids the two step
        // directions that would close its loop on the target side.
        if upper_left {
            if self.loop_parameter(row, column, true, true) {
                if direction == Direction::Up
                    || (direction == Direction::Right && incoming == Direction::Up)
                {
                    return false;
                }
            } else if direction == Direction::Left
                || (direction == Direction::Down && incoming == Direction::Left)
            {
                return false;
            }
        }
        if lower_left {
            if self.loop_parameter(row, column, false, true) {
                if direction == Direction::Left
                    || (direction == Direction::Up && incoming == Direction::Left)
                {
                    return false;
                }
            } else if direction == Direction::Down
                || (direction == Direction::Right && incoming == Direction::Down)
            {
                return false;
            }
        }
        if lower_right {
            if self.loop_parameter(row, column, false, false) {
                if direction == Direction::Down
                    || (direction == Direction::Left && incoming == Direction::Down)
                {
                    return false;
                }
            } else if direction == Direction::Right
                || (direction == Direction::Up && incoming == Direction::Right)
            {
                return false;
            }
        }
        if upper_right {
            if self.loop_parameter(row, column, true, false) {
                if direction == Direction::Right
                    || (direction == Direction::Down && incoming == Direction::Right)
                {
                    return false;
                }
            } else if direction == Direction::Up
                || (direction == Direction::Left && incoming == Direction::Up)
            {
                return false;
            }
        }
        true
    }
}

/// Generate a random self-avoiding path from the start to the target.
///
/// Candidate steps must stay in bounds, avoid visited cells, not reverse
/// the previous step, and pass the reachability filter; among those the
/// choice is uniform, or weighted by how often each direction occurred in
/// the last `past_decision_count` steps when a fresh random byte falls
/// under the `past_decision_relevance` bias threshold. The byte and word
/// consumption order from `rng` is part of the contract and makes equal
/// seeds reproduce equal paths.
pub fn random_path(options: &PathGenOptions, rng: &mut Lcg) -> AlgoResult<Path> {
    let height = options.height;
    let width = options.width;
    if height == 0 || width == 0 {
        return Err(Error::InvalidDimension {
            height: height as u64,
            width: width as u64,
        }
        .into());
    }
    let start_row = options.start.0.min(height - 1);
    let start_column = options.start.1.min(width - 1);
    let target_row = options.target.0.min(height - 1);
    let target_column = options.target.1.min(width - 1);
    let window = options.past_decision_count as usize;
    let relevance = options.past_decision_relevance as u32;

    let (mut i, mut j) = (start_row, start_column);
    if i == target_row && j == target_column {
        return Ok(Path::new(height, width, start_row, start_column, Vec::new())?);
    }

    let mut rotation: i64 = 0;
    let mut winding: i64 = 0;
    let mut params = WalkParams::new(height, width, target_row, target_column);
    params.insert(
        i,
        j,
        CellParams {
            direction: Direction::Up,
            rotation,
            winding,
        },
    );
    let mut touches_border = i == 0 || i == height - 1 || j == 0 || j == width - 1;
    let (mut border_row, mut border_column) = (i, j);

    let mut initial = Vec::with_capacity(4);
    if i != 0 {
        initial.push(Direction::Up);
    }
    if i != height - 1 {
        initial.push(Direction::Down);
    }
    if j != 0 {
        initial.push(Direction::Left);
    }
    if j != width - 1 {
        initial.push(Direction::Right);
    }
    let first = rng.next_u8();
    let mut direction = initial[first as usize % initial.len()];
    let mut directions = vec![direction];
    match direction {
        Direction::Up => i -= 1,
        Direction::Down => i += 1,
        Direction::Left => j -= 1,
        Direction::Right => j += 1,
    }
    if direction == Direction::Up && i + 1 == target_row && j > target_column {
        winding += 1;
    } else if direction == Direction::Down && i == target_row && j > target_column {
        winding -= 1;
    }
    params.insert(
        i,
        j,
        CellParams {
            direction,
            rotation,
            winding,
        },
    );
    let mut counts = [0u32; 4];
    counts[direction as usize] += 1;

    let mut legal = [Direction::Up; 4];
    let mut cumulative = [0u32; 4];
    while i != target_row || j != target_column {
        let mut legal_len = 0usize;
        let mut total = 0u32;
        if direction != Direction::Down
            && i != 0
            && !params.contains(i - 1, j)
            && params.path_extension(touches_border, border_row, border_column, i, j, Direction::Up)
        {
            legal[legal_len] = Direction::Up;
            total += counts[Direction::Up as usize];
            cumulative[legal_len] = total;
            legal_len += 1;
        }
        if direction != Direction::Up
            && i != height - 1
            && !params.contains(i + 1, j)
            && params.path_extension(
                touches_border,
                border_row,
                border_column,
                i,
                j,
                Direction::Down,
            )
        {
            legal[legal_len] = Direction::Down;
            total += counts[Direction::Down as usize];
            cumulative[legal_len] = total;
            legal_len += 1;
        }
        if direction != Direction::Right
            && j != 0
            && !params.contains(i, j - 1)
            && params.path_extension(
                touches_border,
                border_row,
                border_column,
                i,
                j,
                Direction::Left,
            )
        {
            legal[legal_len] = Direction::Left;
            total += counts[Direction::Left as usize];
            cumulative[legal_len] = total;
            legal_len += 1;
        }
        if direction != Direction::Left
            && j != width - 1
            && !params.contains(i, j + 1)
            && params.path_extension(
                touches_border,
                border_row,
                border_column,
                i,
                j,
                Direction::Right,
            )
        {
            legal[legal_len] = Direction::Right;
            total += counts[Direction::Right as usize];
            cumulative[legal_len] = total;
            legal_len += 1;
        }

        let byte = rng.next_u8();
        let new_direction = if (byte as u32) < (total.wrapping_mul(relevance) >> 8) {
            let pick = rng.next_word() % total;
            let mut chosen = legal[0];
            for k in 0..legal_len {
                if pick < cumulative[k] {
                    chosen = legal[k];
                    break;
                }
            }
            chosen
        } else {
            legal[byte as usize % legal_len]
        };

        if i == 0 || i == height - 1 || j == 0 || j == width - 1 {
            touches_border = true;
            border_row = i;
            border_column = j;
        }
        match new_direction {
            Direction::Up => {
                i -= 1;
                if direction == Direction::Right {
                    rotation += 1;
                } else if direction == Direction::Left {
                    rotation -= 1;
                }
                if i + 1 == target_row && j > target_column {
                    winding += 1;
                }
            }
            Direction::Down => {
                i += 1;
                if direction == Direction::Left {
                    rotation += 1;
                } else if direction == Direction::Right {
                    rotation -= 1;
                }
                if i == target_row && j > target_column {
                    winding -= 1;
                }
            }
            Direction::Left => {
                j -= 1;
                if direction == Direction::Up {
                    rotation += 1;
                } else if direction == Direction::Down {
                    rotation -= 1;
                }
            }
            Direction::Right => {
                j += 1;
                if direction == Direction::Down {
                    rotation += 1;
                } else if direction == Direction::Up {
                    rotation -= 1;
                }
            }
        }
        direction = new_direction;
        directions.push(direction);
        params.insert(
            i,
            j,
            CellParams {
                direction,
                rotation,
                winding,
            },
        );
        counts[direction as usize] += 1;
        if directions.len() > window {
            counts[directions[directions.len() - 1 - window] as usize] -= 1;
        }
    }

    Ok(Path::new(height, width, start_row, start_column, directions)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_self_avoiding(path: &Path) -> (u32, u32) {
        let (mut i, mut j) = path.start();
        let mut seen = HashSet::new();
        seen.insert((i, j));
        for dir in path.directions() {
            match dir {
                Direction::Up => i -= 1,
                Direction::Down => i += 1,
                Direction::Left => j -= 1,
                Direction::Right => j += 1,
            }
            assert!(i < path.height() && j < path.width(), "left the grid");
            assert!(seen.insert((i, j)), "revisited ({i}, {j})");
        }
        (i, j)
    }

    #[test]
    fn test_reaches_target_without_dead_ends() {
        let options = PathGenOptions::new(10, 10)
            .with_start(0, 0)
            .with_target(9, 9)
            .with_history(5, 200);
        let path = random_path(&options, &mut Lcg::new(7)).unwrap();
        assert_eq!(assert_self_avoiding(&path), (9, 9));
    }

    #[test]
    fn test_many_seeds_and_endpoints() {
        for seed in 1..25 {
            let options = PathGenOptions::new(12, 9)
                .with_start(2, 3)
                .with_target(11, 0)
                .with_history(4, 180);
            let path = random_path(&options, &mut Lcg::new(seed)).unwrap();
            assert_eq!(assert_self_avoiding(&path), (11, 0));
        }
    }

    #[test]
    fn test_equal_endpoints_give_empty_path() {
        let options = PathGenOptions::new(6, 6).with_start(3, 3).with_target(3, 3);
        let path = random_path(&options, &mut Lcg::new(11)).unwrap();
        assert!(path.is_empty());
        assert_eq!(path.start(), (3, 3));
    }

    #[test]
    fn test_out_of_range_endpoints_saturate() {
        let options = PathGenOptions::new(5, 5)
            .with_start(0, 0)
            .with_target(400, 400);
        let path = random_path(&options, &mut Lcg::new(3)).unwrap();
        assert_eq!(assert_self_avoiding(&path), (4, 4));
    }

    #[test]
    fn test_single_row_grid() {
        let options = PathGenOptions::new(1, 8).with_start(0, 0).with_target(0, 7);
        let path = random_path(&options, &mut Lcg::new(5)).unwrap();
        assert_eq!(assert_self_avoiding(&path), (0, 7));
        assert_eq!(path.len(), 7);
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        assert!(random_path(&PathGenOptions::new(0, 5), &mut Lcg::new(1)).is_err());
    }

    #[test]
    fn test_determinism() {
        let options = PathGenOptions::new(10, 10)
            .with_start(0, 0)
            .with_target(9, 9)
            .with_history(5, 200);
        let a = random_path(&options, &mut Lcg::new(7)).unwrap();
        let b = random_path(&options, &mut Lcg::new(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_history_window_zero_with_max_relevance() {
        let options = PathGenOptions::new(8, 8)
            .with_start(7, 0)
            .with_target(0, 7)
            .with_history(0, 65535);
        let path = random_path(&options, &mut Lcg::new(91)).unwrap();
        assert_eq!(assert_self_avoiding(&path), (0, 7));
    }
}
