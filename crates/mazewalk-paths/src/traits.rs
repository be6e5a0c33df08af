use mazewalk_core::{Cell, GridMap};

/// Minimal path-search interface: bounds plus passability.
///
/// Every search strategy is generic over this trait. [`GridMap`] is the
/// canonical implementation.
pub trait Pather {
    /// `(rows, cols)` of the searchable area. Cells are `0..rows` ×
    /// `0..cols`.
    fn dimensions(&self) -> (usize, usize);

    /// Whether `c` may be entered. Must return `false` for out-of-bounds
    /// cells.
    fn is_passable(&self, c: Cell) -> bool;

    /// Whether `c` lies inside [`dimensions`](Pather::dimensions).
    fn contains(&self, c: Cell) -> bool {
        let (rows, cols) = self.dimensions();
        c.row >= 0 && c.col >= 0 && (c.row as usize) < rows && (c.col as usize) < cols
    }
}

impl Pather for GridMap {
    #[inline]
    fn dimensions(&self) -> (usize, usize) {
        GridMap::dimensions(self)
    }

    #[inline]
    fn is_passable(&self, c: Cell) -> bool {
        GridMap::is_passable(self, c)
    }

    #[inline]
    fn contains(&self, c: Cell) -> bool {
        GridMap::contains(self, c)
    }
}
