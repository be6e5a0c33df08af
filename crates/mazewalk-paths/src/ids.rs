//! Iterative-deepening search.
//!
//! Runs a depth-limited depth-first pass for every limit from 0 up to
//! `rows * cols - 1`, returning the path of the first pass that succeeds.
//! No simple path can be longer than that bound, so the loop terminates.
//!
//! Each pass owns a fresh [`VisitedSet`] seeded with the start. A cell is
//! marked when it is first entered and stays marked for the rest of the
//! pass, even after the branch through it fails. A pass can therefore miss
//! a path of exactly its depth limit when a sibling branch entered one of
//! its cells first; a later, deeper pass may still find another route.

use log::{debug, trace};
use mazewalk_core::{Cell, Direction};

use crate::path::{Path, SearchError, check_endpoints};
use crate::traits::Pather;
use crate::visited::VisitedSet;

/// One level of the depth-limited descent.
struct Frame {
    cell: Cell,
    /// Steps still allowed below `cell`.
    remaining: usize,
    /// Index into [`Direction::ORDER`] of the next neighbor to try.
    next_dir: usize,
}

/// Find a path from `start` to `goal` using iterative-deepening search.
///
/// Returns an empty path if no pass finds the goal, and
/// [`SearchError::OutOfBounds`] if either endpoint lies outside the grid.
pub fn ids<P: Pather>(pather: &P, start: Cell, goal: Cell) -> Result<Path, SearchError> {
    if !check_endpoints(pather, start, goal)? {
        debug!("ids {start} -> {goal}: blocked endpoint");
        return Ok(Vec::new());
    }

    let (rows, cols) = pather.dimensions();
    let max_depth = rows * cols - 1;
    for limit in 0..=max_depth {
        let mut visited = VisitedSet::new(pather);
        visited.insert(start);
        if let Some(path) = depth_limited(pather, start, goal, limit, &mut visited) {
            debug!(
                "ids {start} -> {goal}: found {} cells at depth limit {limit}",
                path.len()
            );
            return Ok(path);
        }
        trace!(
            "ids {start} -> {goal}: depth {limit} failed after visiting {} cells",
            visited.len()
        );
    }

    debug!("ids {start} -> {goal}: exhausted at depth limit {max_depth}");
    Ok(Vec::new())
}

/// One depth-limited pass.
///
/// Succeeds only when the goal is entered with exactly zero steps left, so
/// the returned path has `limit` steps. Frames are kept on an explicit stack
/// instead of the call stack; the frame stack doubles as the current path.
fn depth_limited<P: Pather>(
    pather: &P,
    start: Cell,
    goal: Cell,
    limit: usize,
    visited: &mut VisitedSet,
) -> Option<Path> {
    if limit == 0 {
        return (start == goal).then(|| vec![start]);
    }

    let mut frames = vec![Frame {
        cell: start,
        remaining: limit,
        next_dir: 0,
    }];

    while let Some(top) = frames.last_mut() {
        let Some(&dir) = Direction::ORDER.get(top.next_dir) else {
            frames.pop();
            continue;
        };
        top.next_dir += 1;

        let n = top.cell.step(dir);
        let remaining = top.remaining - 1;
        if !pather.is_passable(n) || !visited.insert(n) {
            continue;
        }

        if remaining == 0 {
            if n == goal {
                let mut path: Path = frames.iter().map(|f| f.cell).collect();
                path.push(n);
                return Some(path);
            }
            continue;
        }

        frames.push(Frame {
            cell: n,
            remaining,
            next_dir: 0,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{is_valid_path, path_steps};
    use mazewalk_core::GridMap;

    #[test]
    fn ring_path_goes_east_first() {
        let g: GridMap = "...\n.#.\n...".parse().unwrap();
        let path = ids(&g, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
        assert_eq!(
            path,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 2),
                Cell::new(2, 2),
            ]
        );
    }

    #[test]
    fn open_grid_finds_shortest_depth() {
        let g = GridMap::open(4, 4);
        let (s, t) = (Cell::new(0, 0), Cell::new(3, 3));
        let path = ids(&g, s, t).unwrap();
        assert!(is_valid_path(&g, &path, s, t));
        assert_eq!(path_steps(&path), 6);
        // East is always tried first.
        assert_eq!(path[1], Cell::new(0, 1));
    }

    #[test]
    fn pass_local_marks_can_hide_the_shortest_route() {
        // The shortest route runs straight south (3 steps). In every pass
        // the east branch loops round through (1,1) and claims (1,0) first,
        // so the south branch is cut off and the goal only turns up at
        // depth 5, via the loop.
        let g: GridMap = "..\n..\n.#\n.#".parse().unwrap();
        let (s, t) = (Cell::new(0, 0), Cell::new(3, 0));
        let path = ids(&g, s, t).unwrap();
        assert!(is_valid_path(&g, &path, s, t));
        assert_eq!(
            path,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 1),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(3, 0),
            ]
        );
        assert_eq!(path_steps(&crate::bfs(&g, s, t).unwrap()), 3);
    }

    #[test]
    fn depth_limited_pass_needs_exact_depth() {
        let g = GridMap::open(1, 3);
        let mut visited = VisitedSet::new(&g);
        visited.insert(Cell::ZERO);
        assert!(depth_limited(&g, Cell::ZERO, Cell::new(0, 2), 1, &mut visited).is_none());

        let mut visited = VisitedSet::new(&g);
        visited.insert(Cell::ZERO);
        assert_eq!(
            depth_limited(&g, Cell::ZERO, Cell::new(0, 2), 2, &mut visited),
            Some(vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)])
        );
    }

    #[test]
    fn start_equals_goal() {
        let g = GridMap::open(2, 2);
        let c = Cell::new(1, 1);
        assert_eq!(ids(&g, c, c).unwrap(), vec![c]);
    }

    #[test]
    fn unreachable_goal_is_empty() {
        let g: GridMap = "
.#.
##.
..."
        .parse()
        .unwrap();
        assert!(ids(&g, Cell::ZERO, Cell::new(2, 2)).unwrap().is_empty());
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let g = GridMap::open(2, 2);
        assert!(ids(&g, Cell::ZERO, Cell::new(0, 9)).is_err());
    }
}
