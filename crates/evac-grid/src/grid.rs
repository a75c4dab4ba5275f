//! The fixed-size cell matrix and neighbourhood queries.
//!
//! # Data layout
//!
//! Cells are stored row-major in one `Vec<Cell>`; `Position { row, col }`
//! maps to `row * width + col`.  Dimensions never change after construction.
//! `Clone` is a deep copy, which is what lets several runs diverge from one
//! seeded layout.

use evac_core::Position;
use evac_core::position::MOORE_OFFSETS;

use crate::{Cell, CellSet, CellType, GridError, GridResult};

/// `height × width` matrix of [`Cell`]s, origin top-left.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    height: usize,
    width:  usize,
    cells:  Vec<Cell>,
}

impl Grid {
    /// All-`Empty` grid.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(height: usize, width: usize) -> Self {
        assert!(height > 0 && width > 0, "grid dimensions must be non-zero");
        Self { height, width, cells: vec![Cell::default(); height * width] }
    }

    /// Build from rows of cell types.  Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<CellType>>) -> GridResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::Unreadable("grid has no cells".into()));
        }

        let mut cells = Vec::with_capacity(height * width);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridError::Unreadable(format!(
                    "row {r} has {} cells, expected {width}",
                    row.len()
                )));
            }
            cells.extend(row.into_iter().map(Cell::new));
        }
        Ok(Self { height, width, cells })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    // ── Cell access ───────────────────────────────────────────────────────

    #[inline]
    fn idx(&self, pos: Position) -> usize {
        assert!(self.in_bounds(pos), "position {pos} outside {}x{} grid", self.height, self.width);
        pos.index(self.width)
    }

    #[inline]
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[self.idx(pos)]
    }

    #[inline]
    pub fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        let i = self.idx(pos);
        &mut self.cells[i]
    }

    #[inline]
    pub fn kind(&self, pos: Position) -> CellType {
        self.cell(pos).kind
    }

    #[inline]
    pub fn set_kind(&mut self, pos: Position, kind: CellType) {
        self.cell_mut(pos).kind = kind;
    }

    #[inline]
    pub fn distance(&self, pos: Position) -> f64 {
        self.cell(pos).exit_distance
    }

    /// Raw row-major cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Position of the cell at row-major `index`.
    #[inline]
    pub fn position(&self, index: usize) -> Position {
        Position::from_index(index, self.width)
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(|i| Position::from_index(i, self.width))
    }

    /// `(Position, &Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, c)| (Position::from_index(i, self.width), c))
    }

    /// Positions of all cells whose type is in `set`, row-major.
    pub fn positions_of(&self, set: CellSet) -> Vec<Position> {
        self.iter().filter(|(_, c)| c.is(set)).map(|(p, _)| p).collect()
    }

    /// Number of cells whose type is in `set`.
    pub fn count(&self, set: CellSet) -> usize {
        self.cells.iter().filter(|c| c.is(set)).count()
    }

    // ── Neighbourhood ─────────────────────────────────────────────────────

    /// In-bounds Moore neighbours of `pos` whose type is in `set`.
    ///
    /// The order is fixed but unspecified; callers that need a random order
    /// shuffle the result.
    ///
    /// # Panics
    /// Panics if `pos` itself is out of bounds.
    pub fn neighborhood(&self, pos: Position, set: CellSet) -> Vec<Position> {
        let mut out = Vec::with_capacity(8);
        self.neighborhood_into(pos, set, &mut out);
        out
    }

    /// Like [`neighborhood`](Self::neighborhood) but appends into `out`
    /// (cleared first) so hot loops can reuse one buffer.
    pub fn neighborhood_into(&self, pos: Position, set: CellSet, out: &mut Vec<Position>) {
        assert!(self.in_bounds(pos), "neighbourhood of {pos} outside {}x{} grid", self.height, self.width);
        out.clear();
        for &(dr, dc) in &MOORE_OFFSETS {
            let Some(n) = pos.offset(dr, dc) else { continue };
            if self.in_bounds(n) && self.cells[n.index(self.width)].is(set) {
                out.push(n);
            }
        }
    }

    /// Movement neighbourhood: the cells a pedestrian at `pos` may step into.
    #[inline]
    pub fn free_neighbors(&self, pos: Position) -> Vec<Position> {
        self.neighborhood(pos, CellSet::EMPTY)
    }
}
