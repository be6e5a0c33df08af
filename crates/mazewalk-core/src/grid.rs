//! The [`GridMap`] type: an immutable rectangular occupancy grid.
//!
//! A `GridMap` is built once from a static definition (nested rows, a
//! `0`/`1` bit table or a `#`/`.` text picture) and only answers queries
//! afterwards. Storage is a flat row-major `Vec`.

use std::fmt;
use std::str::FromStr;

use crate::geom::Cell;

// ---------------------------------------------------------------------------
// Occupancy
// ---------------------------------------------------------------------------

/// Occupancy state of a single grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupancy {
    #[default]
    Passable,
    Blocked,
}

impl Occupancy {
    /// Whether an agent may occupy this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        matches!(self, Occupancy::Passable)
    }

    /// Character used by the text form.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Occupancy::Passable => '.',
            Occupancy::Blocked => '#',
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' | '0' | ' ' => Some(Occupancy::Passable),
            '#' | '1' => Some(Occupancy::Blocked),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors that can occur when building a [`GridMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Row `row` has `found` columns where `expected` were required.
    InvalidGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the text alphabet was found.
    InvalidChar { ch: char, row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: invalid grid: row {row} has {found} columns, expected {expected}"
            ),
            Self::InvalidChar { ch, row, col } => write!(
                f,
                "grid: invalid character \u{201c}{ch}\u{201d} at row {row}, column {col}"
            ),
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// GridMap
// ---------------------------------------------------------------------------

/// An immutable, rectangular 2D occupancy grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridMap {
    cells: Vec<Occupancy>,
    rows: usize,
    cols: usize,
}

impl GridMap {
    /// Build a grid from nested rows.
    ///
    /// Fails with [`GridError::InvalidGrid`] if the rows have unequal
    /// lengths. An empty row list yields a valid 0×0 grid.
    pub fn new(rows: Vec<Vec<Occupancy>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        let nrows = rows.len();
        let mut cells = Vec::with_capacity(nrows * cols);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != cols {
                return Err(GridError::InvalidGrid {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            cells.extend(line);
        }
        Ok(Self {
            cells,
            rows: nrows,
            cols,
        })
    }

    /// Build a grid from a bit table: `0` is passable, anything else blocked.
    pub fn from_bits<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let rows: Vec<Vec<Occupancy>> = rows
            .iter()
            .map(|r| {
                r.as_ref()
                    .iter()
                    .map(|&b| {
                        if b == 0 {
                            Occupancy::Passable
                        } else {
                            Occupancy::Blocked
                        }
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        Self::new(rows)
    }

    /// A fully passable grid.
    pub fn open(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![Occupancy::Passable; rows * cols],
            rows,
            cols,
        }
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.index(c).is_some()
    }

    /// Occupancy at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Cell) -> Option<Occupancy> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Whether `c` is inside the grid and passable. Out-of-bounds cells are
    /// never passable.
    #[inline]
    pub fn is_passable(&self, c: Cell) -> bool {
        self.at(c).is_some_and(Occupancy::is_passable)
    }

    /// Flat row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Cell) -> Option<usize> {
        if c.row < 0 || c.col < 0 {
            return None;
        }
        let (r, k) = (c.row as usize, c.col as usize);
        if r < self.rows && k < self.cols {
            Some(r * self.cols + k)
        } else {
            None
        }
    }

    /// Row-major iterator over every cell and its occupancy.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Occupancy)> + '_ {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &o)| (Cell::new((i / cols) as i32, (i % cols) as i32), o))
    }

    /// Number of passable cells.
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|o| o.is_passable()).count()
    }

    /// The rows as nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<Occupancy>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells.chunks(self.cols).map(<[_]>::to_vec).collect()
    }
}

impl FromStr for GridMap {
    type Err = GridError;

    /// Parse the text form: one line per row, `#`/`1` blocked and
    /// `.`/`0`/space passable. Blank lines around the picture are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        let first = lines.iter().position(|l| !l.trim().is_empty());
        let last = lines.iter().rposition(|l| !l.trim().is_empty());
        let body = match (first, last) {
            (Some(a), Some(b)) => &lines[a..=b],
            _ => &[][..],
        };

        let mut rows = Vec::with_capacity(body.len());
        for (row, line) in body.iter().enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                let o = Occupancy::from_char(ch).ok_or(GridError::InvalidChar { ch, row, col })?;
                cells.push(o);
            }
            rows.push(cells);
        }
        Self::new(rows)
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.to_rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for o in row {
                write!(f, "{}", o.as_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GridMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_rows(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GridMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = <Vec<Vec<Occupancy>> as serde::Deserialize>::deserialize(deserializer)?;
        GridMap::new(rows).map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g: GridMap = "#.\n.#".parse().unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: GridMap = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn jagged_json_is_rejected() {
        let json = r#"[["Passable","Blocked"],["Passable"]]"#;
        let err = serde_json::from_str::<GridMap>(json).unwrap_err();
        assert!(err.to_string().contains("invalid grid"));
    }
}
