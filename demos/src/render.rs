//! Text rendering and path playback.

use std::io::{self, Write};

use crossterm::{cursor, execute};
use mazewalk_core::{Cell, GridMap};
use mazewalk_paths::Path;

/// Steps through a path one cell per tick.
///
/// An empty path has nothing to animate: the first tick returns `None` and
/// the animation is immediately finished.
#[derive(Debug, Clone)]
pub struct Animation {
    path: Path,
    step: usize,
}

impl Animation {
    pub fn new(path: Path) -> Self {
        Self { path, step: 0 }
    }

    /// Advance one tick and return the new position.
    pub fn tick(&mut self) -> Option<Cell> {
        let cell = self.path.get(self.step).copied()?;
        self.step += 1;
        Some(cell)
    }

    /// The position shown after the last tick.
    pub fn current(&self) -> Option<Cell> {
        self.step.checked_sub(1).and_then(|i| self.path.get(i).copied())
    }

    /// Whether every cell has been shown.
    pub fn is_finished(&self) -> bool {
        self.step >= self.path.len()
    }

    /// Number of frames the animation produces.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Render one frame: `#` wall, `.` corridor, `G` goal, `C` Pac-Man.
pub fn render_frame(grid: &GridMap, goal: Cell, pacman: Option<Cell>) -> String {
    let (rows, cols) = grid.dimensions();
    let mut out = String::with_capacity(rows * (cols + 1));
    for (cell, occupancy) in grid.iter() {
        if cell.col == 0 && cell.row > 0 {
            out.push('\n');
        }
        let ch = if Some(cell) == pacman {
            'C'
        } else if cell == goal {
            'G'
        } else {
            occupancy.as_char()
        };
        out.push(ch);
    }
    out
}

/// A writer with the terminal cursor hidden; the cursor is shown again when
/// the guard is dropped, including on early return through `?`.
pub struct HiddenCursor<W: Write> {
    out: W,
}

impl<W: Write> HiddenCursor<W> {
    pub fn new(mut out: W) -> io::Result<Self> {
        execute!(out, cursor::Hide)?;
        Ok(Self { out })
    }
}

impl<W: Write> Write for HiddenCursor<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Drop for HiddenCursor<W> {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.out, cursor::Show) {
            log::warn!("could not restore the cursor: {e}");
        }
    }
}
