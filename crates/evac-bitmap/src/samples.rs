//! Bundled room layouts, generated at any side length.
//!
//! All layouts are square with a one-cell wall border.  Render them with
//! `BitmapRenderer::new(1)` to get a map file the importer reads back.

use std::fmt;
use std::str::FromStr;

use evac_core::Position;
use evac_grid::{CellType, Grid};

use crate::{BitmapError, BitmapResult};

/// Smallest side length at which every layout keeps its exits reachable.
pub const MIN_LENGTH: usize = 16;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SampleKind {
    /// Empty room, one exit in the middle of the top wall.
    SquareRoom,
    /// Exits top and bottom, a wall block filling the middle half.
    RoomWithBlock,
    /// Exit in the top-left corner, three wall blocks.
    ScatteredBlocks,
    /// Three-cell exit in the middle of the top wall.
    WideExit,
}

impl SampleKind {
    pub const ALL: [SampleKind; 4] =
        [Self::SquareRoom, Self::RoomWithBlock, Self::ScatteredBlocks, Self::WideExit];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SquareRoom      => "square_room",
            Self::RoomWithBlock   => "room_with_block",
            Self::ScatteredBlocks => "scattered_blocks",
            Self::WideExit        => "wide_exit",
        }
    }
}

impl fmt::Display for SampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown sample `{s}`, expected one of: {}", names.join(", "))
            })
    }
}

/// Generate the `kind` layout with side `length`.
pub fn sample(kind: SampleKind, length: usize) -> BitmapResult<Grid> {
    if length < MIN_LENGTH {
        return Err(BitmapError::SampleTooSmall { length, min: MIN_LENGTH });
    }
    let n = length;
    let mut grid = Grid::new(n, n);

    fill(&mut grid, (0, 0), (0, n - 1), CellType::Wall);
    fill(&mut grid, (n - 1, 0), (n - 1, n - 1), CellType::Wall);
    fill(&mut grid, (0, 0), (n - 1, 0), CellType::Wall);
    fill(&mut grid, (0, n - 1), (n - 1, n - 1), CellType::Wall);

    match kind {
        SampleKind::SquareRoom => {
            grid.set_kind(Position::new(0, n / 2), CellType::Exit);
        }
        SampleKind::RoomWithBlock => {
            grid.set_kind(Position::new(0, n / 2), CellType::Exit);
            grid.set_kind(Position::new(n - 1, n / 2), CellType::Exit);
            fill(&mut grid, (n / 4, n / 4), (3 * n / 4, 3 * n / 4), CellType::Wall);
        }
        SampleKind::ScatteredBlocks => {
            grid.set_kind(Position::new(0, 0), CellType::Exit);
            fill(&mut grid, (n / 8, n / 8), (5 * n / 8, 2 * n / 8), CellType::Wall);
            fill(&mut grid, (6 * n / 8, 4 * n / 8), (7 * n / 8, 7 * n / 8), CellType::Wall);
            fill(&mut grid, (2 * n / 8, 5 * n / 8), (4 * n / 8, 7 * n / 8), CellType::Wall);
        }
        SampleKind::WideExit => {
            for col in n / 2 - 1..=n / 2 + 1 {
                grid.set_kind(Position::new(0, col), CellType::Exit);
            }
        }
    }
    Ok(grid)
}

/// Set every cell in the inclusive rectangle `from..=to` to `kind`.
fn fill(grid: &mut Grid, from: (usize, usize), to: (usize, usize), kind: CellType) {
    for row in from.0..=to.0 {
        for col in from.1..=to.1 {
            grid.set_kind(Position::new(row, col), kind);
        }
    }
}
