//! Per-call bookkeeping: the visited set and the parent links used to
//! rebuild a path once the goal is reached.

use mazewalk_core::Cell;

use crate::path::Path;
use crate::traits::Pather;

/// Flat row-major index of `c` inside a `rows × cols` area.
#[inline]
pub(crate) fn flat_index((rows, cols): (usize, usize), c: Cell) -> Option<usize> {
    if c.row < 0 || c.col < 0 {
        return None;
    }
    let (r, k) = (c.row as usize, c.col as usize);
    if r < rows && k < cols {
        Some(r * cols + k)
    } else {
        None
    }
}

/// Cells already reached during one search call.
///
/// Backed by a bitmap sized to the grid. A fresh set is built for every
/// call (and for every IDS depth pass), never shared.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    dims: (usize, usize),
    bits: Vec<bool>,
    len: usize,
}

impl VisitedSet {
    /// An empty set covering the area of `pather`.
    pub fn new<P: Pather + ?Sized>(pather: &P) -> Self {
        let dims = pather.dimensions();
        Self {
            dims,
            bits: vec![false; dims.0 * dims.1],
            len: 0,
        }
    }

    /// Mark `c` as visited. Returns `true` if it was not visited before.
    ///
    /// Out-of-bounds cells are never recorded and always return `false`.
    #[inline]
    pub fn insert(&mut self, c: Cell) -> bool {
        let Some(i) = flat_index(self.dims, c) else {
            return false;
        };
        if self.bits[i] {
            return false;
        }
        self.bits[i] = true;
        self.len += 1;
        true
    }

    /// Whether `c` has been visited.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        flat_index(self.dims, c).is_some_and(|i| self.bits[i])
    }

    /// Number of visited cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no cell has been visited.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Parent links recorded when a cell is first reached.
///
/// Each cell is linked at most once (at push time), so following the links
/// from any reached cell yields exactly the path along which it was first
/// discovered.
pub(crate) struct ParentMap {
    dims: (usize, usize),
    parents: Vec<Option<Cell>>,
}

impl ParentMap {
    pub(crate) fn new<P: Pather + ?Sized>(pather: &P) -> Self {
        let dims = pather.dimensions();
        Self {
            dims,
            parents: vec![None; dims.0 * dims.1],
        }
    }

    #[inline]
    pub(crate) fn link(&mut self, child: Cell, parent: Cell) {
        if let Some(i) = flat_index(self.dims, child) {
            self.parents[i] = Some(parent);
        }
    }

    /// Walk the links back from `end` to the root and return the path in
    /// root-to-end order.
    pub(crate) fn path_to(&self, end: Cell) -> Path {
        let mut path = vec![end];
        let mut cur = end;
        while let Some(p) = flat_index(self.dims, cur).and_then(|i| self.parents[i]) {
            path.push(p);
            cur = p;
        }
        path.reverse();
        path
    }
}
