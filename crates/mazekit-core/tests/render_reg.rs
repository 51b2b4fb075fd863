//! Rendering regression test
//!
//! The text diagram and the BMP encoding describe the same picture: a
//! character is a block exactly when the corresponding bitmap pixel is
//! black. Checks every pixel of a maze with walls on all four kinds of
//! positions, plus the decode side.

use mazekit_core::Maze;
use mazekit_io::bmp;
use std::io::Cursor;

fn sample_maze() -> Maze {
    Maze::from_walls(
        vec![
            vec![false, true, false, false],
            vec![false, false, true, false],
            vec![false, false, false, true],
        ],
        vec![
            vec![false, false, false, false],
            vec![true, false, true, false],
            vec![false, true, false, true],
        ],
    )
    .unwrap()
}

#[test]
fn test_maze_text_and_bitmap_agree() {
    let maze = sample_maze();
    let mut buffer = Vec::new();
    bmp::write_maze(&maze, &mut buffer).unwrap();

    let lines: Vec<Vec<char>> = maze
        .to_string()
        .split('\n')
        .map(|line| line.chars().collect())
        .collect();
    let height_px = lines.len();
    let width_px = lines[0].len();
    assert_eq!(height_px, 7);
    assert_eq!(width_px, 9);
    let row_len = ((width_px - 1) / 32 + 1) * 4;
    assert_eq!(buffer.len(), 62 + height_px * row_len);

    for (line_index, line) in lines.iter().enumerate() {
        // BMP rows run bottom-up.
        let bmp_row = height_px - 1 - line_index;
        let row = &buffer[62 + bmp_row * row_len..62 + (bmp_row + 1) * row_len];
        for (x, &ch) in line.iter().enumerate() {
            let black = (row[x / 8] & (1u8 << (7 - (x % 8)))) == 0;
            assert_eq!(
                ch == '\u{2588}',
                black,
                "diagram and bitmap disagree at line {line_index}, column {x}"
            );
        }
    }
}

#[test]
fn test_decoded_maze_renders_identically() {
    let maze = sample_maze();
    let mut buffer = Vec::new();
    bmp::write_maze(&maze, &mut buffer).unwrap();
    let decoded = bmp::read_maze(Cursor::new(buffer)).unwrap();
    assert_eq!(decoded, maze);
    assert_eq!(decoded.to_string(), maze.to_string());
}
