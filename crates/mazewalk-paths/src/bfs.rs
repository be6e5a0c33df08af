use std::collections::VecDeque;

use log::debug;
use mazewalk_core::Cell;

use crate::neighbors::Neighbors;
use crate::path::{Path, SearchError, check_endpoints};
use crate::traits::Pather;
use crate::visited::{ParentMap, VisitedSet};

/// Find a shortest path from `start` to `goal` using breadth-first search.
///
/// Every step has cost 1, so the returned path has the minimum number of
/// steps. Among several shortest paths, the one discovered first under the
/// east, south, west, north expansion order wins.
///
/// Returns an empty path if the goal is unreachable, and
/// [`SearchError::OutOfBounds`] if either endpoint lies outside the grid.
pub fn bfs<P: Pather>(pather: &P, start: Cell, goal: Cell) -> Result<Path, SearchError> {
    if !check_endpoints(pather, start, goal)? {
        debug!("bfs {start} -> {goal}: blocked endpoint");
        return Ok(Vec::new());
    }

    let mut visited = VisitedSet::new(pather);
    let mut parents = ParentMap::new(pather);
    let mut nbrs = Neighbors::new();
    let mut queue: VecDeque<Cell> = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    let mut expanded = 0usize;
    while let Some(cur) = queue.pop_front() {
        expanded += 1;
        if cur == goal {
            let path = parents.path_to(cur);
            debug!(
                "bfs {start} -> {goal}: found {} cells after {expanded} expansions",
                path.len()
            );
            return Ok(path);
        }

        for &n in nbrs.cardinal(cur, |c| pather.is_passable(c)) {
            if visited.insert(n) {
                parents.link(n, cur);
                queue.push_back(n);
            }
        }
    }

    debug!("bfs {start} -> {goal}: exhausted after {expanded} expansions");
    Ok(Vec::new())
}
