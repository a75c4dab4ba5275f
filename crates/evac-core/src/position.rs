//! Grid coordinates.
//!
//! A `Position` is a `(row, col)` pair with the origin at the top-left cell.
//! It is `Copy + Ord + Hash` so it can be used as a map key and sorted
//! without ceremony.  Bounds are not known here; the grid checks them.

use std::fmt;

/// A cell coordinate: `row` counts down from the top border, `col` right from
/// the left border.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Row/column offsets of the 8-connected (Moore) neighbourhood, orthogonal
/// neighbours first.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

impl Position {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index into a grid that is `width` columns wide.
    #[inline(always)]
    pub fn index(self, width: usize) -> usize {
        self.row * width + self.col
    }

    /// Inverse of [`index`](Self::index).
    #[inline(always)]
    pub fn from_index(index: usize, width: usize) -> Self {
        Self { row: index / width, col: index % width }
    }

    /// Shift by `(d_row, d_col)`, returning `None` if either coordinate would
    /// become negative.  The upper bound is the caller's concern.
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// Chebyshev (king-move) distance: the hop count under 8-connectivity.
    #[inline]
    pub fn chebyshev(self, other: Position) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}
