use std::fmt;

use mazewalk_core::Cell;

use crate::traits::Pather;

/// An ordered sequence of cells from start to goal. Empty means no path.
pub type Path = Vec<Cell>;

// ---------------------------------------------------------------------------
// SearchError
// ---------------------------------------------------------------------------

/// Errors detected at search entry, before any expansion.
///
/// An unreachable goal is not an error: searches return `Ok` with an empty
/// [`Path`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// `cell` (the start or the goal) lies outside the `rows × cols` grid.
    OutOfBounds { cell: Cell, rows: usize, cols: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { cell, rows, cols } => {
                write!(f, "search: cell {cell} is outside the {rows}x{cols} grid")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Validate both endpoints and report whether a search can succeed at all.
///
/// Returns `Ok(false)` when the start or the goal is blocked: no path may
/// contain a blocked cell, so the search is exhausted before it begins.
pub(crate) fn check_endpoints<P: Pather>(
    pather: &P,
    start: Cell,
    goal: Cell,
) -> Result<bool, SearchError> {
    let (rows, cols) = pather.dimensions();
    for cell in [start, goal] {
        if !pather.contains(cell) {
            return Err(SearchError::OutOfBounds { cell, rows, cols });
        }
    }
    Ok(pather.is_passable(start) && pather.is_passable(goal))
}

// ---------------------------------------------------------------------------
// Path utilities
// ---------------------------------------------------------------------------

/// Number of steps (edges) in `path`. Zero for empty and single-cell paths.
#[inline]
pub fn path_steps(path: &[Cell]) -> usize {
    path.len().saturating_sub(1)
}

/// Whether `path` is a well-formed path from `start` to `goal` on `pather`.
///
/// A well-formed path is non-empty, begins at `start`, ends at `goal`, moves
/// one orthogonal step at a time and only visits passable cells.
pub fn is_valid_path<P: Pather>(pather: &P, path: &[Cell], start: Cell, goal: Cell) -> bool {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return false;
    };
    first == start
        && last == goal
        && path.iter().all(|&c| pather.is_passable(c))
        && path.windows(2).all(|w| w[0].is_adjacent(w[1]))
}
