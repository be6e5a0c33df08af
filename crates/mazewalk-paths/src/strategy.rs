//! Strategy selection by name.

use std::fmt;
use std::str::FromStr;

use mazewalk_core::Cell;

use crate::path::{Path, SearchError};
use crate::traits::Pather;

/// One of the three uninformed search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Depth-first search; first-found path.
    Dfs,
    /// Breadth-first search; shortest path.
    Bfs,
    /// Iterative-deepening search.
    Ids,
}

impl Strategy {
    /// Every strategy, in a stable order.
    pub const ALL: [Strategy; 3] = [Strategy::Dfs, Strategy::Bfs, Strategy::Ids];

    /// Short lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Dfs => "dfs",
            Strategy::Bfs => "bfs",
            Strategy::Ids => "ids",
        }
    }

    /// Run this strategy from `start` to `goal`.
    pub fn search<P: Pather>(
        self,
        pather: &P,
        start: Cell,
        goal: Cell,
    ) -> Result<Path, SearchError> {
        match self {
            Strategy::Dfs => crate::dfs(pather, start, goal),
            Strategy::Bfs => crate::bfs(pather, start, goal),
            Strategy::Ids => crate::ids(pather, start, goal),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(pub String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown search strategy \u{201c}{}\u{201d} (expected dfs, bfs or ids)",
            self.0
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    /// Case-insensitive; accepts the short names and the long
    /// `depth-first`, `breadth-first` and `iterative-deepening` forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Strategy::Dfs),
            "bfs" | "breadth-first" => Ok(Strategy::Bfs),
            "ids" | "iterative-deepening" => Ok(Strategy::Ids),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{is_valid_path, path_steps};
    use mazewalk_core::{GridMap, Occupancy};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn ring() -> GridMap {
        GridMap::from_bits(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap()
    }

    fn random_grid(rng: &mut StdRng) -> GridMap {
        let rows = rng.random_range(1..=8usize);
        let cols = rng.random_range(1..=8usize);
        let cells: Vec<Vec<Occupancy>> = (0..rows)
            .map(|_| {
                (0..cols)
                    .map(|_| {
                        if rng.random_bool(0.3) {
                            Occupancy::Blocked
                        } else {
                            Occupancy::Passable
                        }
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        GridMap::new(cells).unwrap()
    }

    fn random_cell(rng: &mut StdRng, g: &GridMap) -> Cell {
        let (rows, cols) = g.dimensions();
        Cell::new(
            rng.random_range(0..rows) as i32,
            rng.random_range(0..cols) as i32,
        )
    }

    #[test]
    fn parse_names() {
        for s in Strategy::ALL {
            assert_eq!(s.name().parse::<Strategy>(), Ok(s));
            assert_eq!(s.to_string().to_uppercase().parse::<Strategy>(), Ok(s));
        }
        assert_eq!("Breadth-First".parse::<Strategy>(), Ok(Strategy::Bfs));
        assert_eq!(" ids ".parse::<Strategy>(), Ok(Strategy::Ids));
        let err = "astar".parse::<Strategy>().unwrap_err();
        assert_eq!(err, ParseStrategyError("astar".into()));
        assert!(err.to_string().contains("astar"));
    }

    #[test]
    fn ring_scenario() {
        let g = ring();
        let (s, t) = (Cell::new(0, 0), Cell::new(2, 2));
        let bfs = Strategy::Bfs.search(&g, s, t).unwrap();
        assert_eq!(path_steps(&bfs), 4);
        let dfs = Strategy::Dfs.search(&g, s, t).unwrap();
        assert_eq!(dfs[1], Cell::new(0, 1));
        for strategy in Strategy::ALL {
            let path = strategy.search(&g, s, t).unwrap();
            assert!(is_valid_path(&g, &path, s, t), "{strategy}: {path:?}");
        }
    }

    #[test]
    fn start_equals_goal_for_every_strategy() {
        let g = ring();
        for strategy in Strategy::ALL {
            assert_eq!(
                strategy.search(&g, Cell::ZERO, Cell::ZERO).unwrap(),
                vec![Cell::ZERO],
                "{strategy}"
            );
        }
    }

    #[test]
    fn blocked_goal_is_empty_for_every_strategy() {
        let g = ring();
        for strategy in Strategy::ALL {
            assert!(
                strategy.search(&g, Cell::ZERO, Cell::new(1, 1)).unwrap().is_empty(),
                "{strategy}"
            );
        }
    }

    #[test]
    fn blocked_start_is_empty_even_when_equal_to_goal() {
        let g = ring();
        let c = Cell::new(1, 1);
        for strategy in Strategy::ALL {
            assert!(strategy.search(&g, c, c).unwrap().is_empty(), "{strategy}");
        }
    }

    #[test]
    fn out_of_bounds_is_an_error_for_every_strategy() {
        let g = ring();
        for strategy in Strategy::ALL {
            assert!(strategy.search(&g, Cell::new(0, 3), Cell::ZERO).is_err());
            assert!(strategy.search(&g, Cell::ZERO, Cell::new(-1, -1)).is_err());
        }
    }

    #[test]
    fn random_grids_hold_path_invariants() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..300 {
            let g = random_grid(&mut rng);
            let s = random_cell(&mut rng, &g);
            let t = random_cell(&mut rng, &g);

            let bfs = Strategy::Bfs.search(&g, s, t).unwrap();
            let dfs = Strategy::Dfs.search(&g, s, t).unwrap();
            let ids = Strategy::Ids.search(&g, s, t).unwrap();

            // DFS and BFS both sweep the whole component of the start.
            assert_eq!(bfs.is_empty(), dfs.is_empty(), "{g}\n{s} -> {t}");
            if bfs.is_empty() {
                assert!(ids.is_empty(), "{g}\n{s} -> {t}");
                continue;
            }

            for (name, path) in [("bfs", &bfs), ("dfs", &dfs)] {
                assert!(is_valid_path(&g, path, s, t), "{name}\n{g}\n{path:?}");
            }
            assert!(path_steps(&bfs) <= path_steps(&dfs));
            if !ids.is_empty() {
                assert!(is_valid_path(&g, &ids, s, t), "ids\n{g}\n{ids:?}");
                assert!(path_steps(&bfs) <= path_steps(&ids));
            }
        }
    }

    #[test]
    fn searches_are_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let g = random_grid(&mut rng);
            let s = random_cell(&mut rng, &g);
            let t = random_cell(&mut rng, &g);
            for strategy in Strategy::ALL {
                assert_eq!(strategy.search(&g, s, t), strategy.search(&g, s, t));
            }
        }
    }
}
