//! Pac-Man path playback on top of mazewalk.
//!
//! The library half of the `pacwalk` binary: the standard maze, argument
//! parsing and frame rendering. The binary only wires them to a terminal.

pub mod config;
pub mod maze;
pub mod render;

pub use config::{DemoConfig, ParseCellError, frame_time, parse_cell};
pub use maze::{DEFAULT_GOAL, DEFAULT_START, standard_maze};
pub use render::{Animation, HiddenCursor, render_frame};
