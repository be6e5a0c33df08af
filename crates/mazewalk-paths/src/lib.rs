//! Uninformed path search on 2D occupancy grids.
//!
//! This crate provides three interchangeable strategies that return a
//! concrete cell-to-cell [`Path`] from a start cell to a goal cell:
//!
//! - **DFS** first-found search with an explicit stack ([`dfs`])
//! - **BFS** shortest-path search with a FIFO queue ([`bfs`])
//! - **IDS** iterative deepening over depth-limited passes ([`ids`])
//!
//! All three expand neighbors in the same fixed order (east, south, west,
//! north), so results are deterministic. A [`Strategy`] selects one by name.
//!
//! Every call allocates its own frontier and [`VisitedSet`]; nothing is
//! cached between calls, so a shared grid can be searched from several
//! threads at once.
//!
//! # Outcomes
//!
//! | Situation | Result |
//! |---|---|
//! | goal reached | `Ok(path)` |
//! | goal unreachable, or start/goal blocked | `Ok(vec![])` |
//! | start or goal outside the grid | `Err(SearchError::OutOfBounds)` |

mod bfs;
mod dfs;
mod ids;
mod neighbors;
mod path;
mod strategy;
mod traits;
mod visited;

pub use bfs::bfs;
pub use dfs::dfs;
pub use ids::ids;
pub use neighbors::Neighbors;
pub use path::{Path, SearchError, is_valid_path, path_steps};
pub use strategy::{ParseStrategyError, Strategy};
pub use traits::Pather;
pub use visited::VisitedSet;
