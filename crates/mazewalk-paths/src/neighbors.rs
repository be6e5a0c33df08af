use mazewalk_core::{Cell, Direction};

/// Cached neighbor computation helper.
///
/// Enumerates the orthogonal neighbors of a cell in [`Direction::ORDER`]
/// (east, south, west, north), filtered by a predicate.
pub struct Neighbors {
    buf: Vec<Cell>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the orthogonal neighbors of `c` in expansion order, keeping
    /// only those for which `keep` returns `true`.
    pub fn cardinal(&mut self, c: Cell, keep: impl Fn(Cell) -> bool) -> &[Cell] {
        self.buf.clear();
        for d in Direction::ORDER {
            let n = c.step(d);
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_keeps_expansion_order() {
        let mut nb = Neighbors::new();
        let all = nb.cardinal(Cell::new(5, 5), |_| true).to_vec();
        assert_eq!(
            all,
            vec![
                Cell::new(5, 6),
                Cell::new(6, 5),
                Cell::new(5, 4),
                Cell::new(4, 5)
            ]
        );
    }

    #[test]
    fn cardinal_filters() {
        let mut nb = Neighbors::new();
        let kept = nb.cardinal(Cell::ZERO, |c| c.row >= 0 && c.col >= 0);
        assert_eq!(kept, &[Cell::new(0, 1), Cell::new(1, 0)]);
        // The buffer is reused between calls.
        assert!(nb.cardinal(Cell::ZERO, |_| false).is_empty());
    }
}
