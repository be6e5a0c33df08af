//! The standard Pac-Man maze and its default endpoints.

use mazewalk_core::{Cell, GridError, GridMap};

/// Rows of the standard maze.
pub const MAZE_ROWS: usize = 11;
/// Columns of the standard maze.
pub const MAZE_COLS: usize = 20;

/// Default Pac-Man position.
pub const DEFAULT_START: Cell = Cell::new(1, 1);
/// Default goal position.
pub const DEFAULT_GOAL: Cell = Cell::new(9, 18);

/// `1` is a wall, `0` an open corridor.
#[rustfmt::skip]
pub const PACMAN_BITS: [[u8; MAZE_COLS]; MAZE_ROWS] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 0, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 0, 1, 1, 0, 1],
    [1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1],
    [1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 0, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1],
    [1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1],
    [1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1],
    [1, 0, 1, 0, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 0, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// Build the standard maze.
pub fn standard_maze() -> Result<GridMap, GridError> {
    GridMap::from_bits(&PACMAN_BITS)
}
