//! Command-line configuration for the demo.

use std::fmt;
use std::time::Duration;

use clap::Parser;
use mazewalk_core::Cell;
use mazewalk_paths::Strategy;

/// Animate Pac-Man walking a path found by DFS, BFS or IDS.
///
/// Set RUST_LOG=debug to see search statistics.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "pacwalk", version)]
pub struct DemoConfig {
    /// Search strategy: dfs, bfs or ids
    #[arg(default_value = "dfs")]
    strategy: Strategy,

    /// Pac-Man start cell as ROW,COL
    #[arg(short, long, value_parser = parse_cell, default_value = "1,1", allow_hyphen_values = true)]
    start: Cell,

    /// Goal cell as ROW,COL
    #[arg(short, long, value_parser = parse_cell, default_value = "9,18", allow_hyphen_values = true)]
    goal: Cell,

    /// Animation frames per second
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,

    /// Print the final frame instead of animating
    #[arg(long)]
    once: bool,
}

impl DemoConfig {
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn once(&self) -> bool {
        self.once
    }

    /// Delay between animation frames.
    pub fn frame_time(&self) -> Duration {
        frame_time(self.fps)
    }
}

/// Delay between frames at `fps` frames per second; a rate of zero is
/// treated as one frame per second.
pub fn frame_time(fps: u32) -> Duration {
    Duration::from_millis(1000 / u64::from(fps.max(1)))
}

/// A `ROW,COL` value that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCellError(pub String);

impl fmt::Display for ParseCellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid cell \u{201c}{}\u{201d}, expected ROW,COL", self.0)
    }
}

impl std::error::Error for ParseCellError {}

/// Parse `ROW,COL`.
pub fn parse_cell(s: &str) -> Result<Cell, ParseCellError> {
    let invalid = || ParseCellError(s.to_string());
    let (row, col) = s.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse::<i32>().map_err(|_| invalid())?;
    let col = col.trim().parse::<i32>().map_err(|_| invalid())?;
    Ok(Cell::new(row, col))
}
