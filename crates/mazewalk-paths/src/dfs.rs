//! Depth-first search with an explicit stack.

use log::debug;
use mazewalk_core::Cell;

use crate::neighbors::Neighbors;
use crate::path::{Path, SearchError, check_endpoints};
use crate::traits::Pather;
use crate::visited::{ParentMap, VisitedSet};

/// Find a path from `start` to `goal` using depth-first search.
///
/// Returns the first path found, which is not necessarily the shortest.
/// Neighbors are explored east, south, west, north: they are pushed in
/// reverse so that the east neighbor is popped first. A cell is marked
/// visited when it is pushed, so it enters the stack at most once.
///
/// Returns an empty path if the goal is unreachable, and
/// [`SearchError::OutOfBounds`] if either endpoint lies outside the grid.
pub fn dfs<P: Pather>(pather: &P, start: Cell, goal: Cell) -> Result<Path, SearchError> {
    if !check_endpoints(pather, start, goal)? {
        debug!("dfs {start} -> {goal}: blocked endpoint");
        return Ok(Vec::new());
    }

    let mut visited = VisitedSet::new(pather);
    let mut parents = ParentMap::new(pather);
    let mut nbrs = Neighbors::new();
    let mut stack: Vec<Cell> = vec![start];
    visited.insert(start);

    let mut expanded = 0usize;
    while let Some(cur) = stack.pop() {
        expanded += 1;
        if cur == goal {
            let path = parents.path_to(cur);
            debug!(
                "dfs {start} -> {goal}: found {} cells after {expanded} expansions",
                path.len()
            );
            return Ok(path);
        }

        for &n in nbrs.cardinal(cur, |c| pather.is_passable(c)).iter().rev() {
            if visited.insert(n) {
                parents.link(n, cur);
                stack.push(n);
            }
        }
    }

    debug!("dfs {start} -> {goal}: exhausted after {expanded} expansions");
    Ok(Vec::new())
}
