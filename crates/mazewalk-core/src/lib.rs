//! **mazewalk-core**: grid types for the mazewalk path-search crates.
//!
//! This crate provides the foundational types used across the *mazewalk*
//! workspace: the [`Cell`] coordinate, the fixed [`Direction`] expansion
//! order, and the immutable [`GridMap`] occupancy grid.

pub mod geom;
pub mod grid;

pub use geom::{Cell, Direction};
pub use grid::{GridError, GridMap, Occupancy};
