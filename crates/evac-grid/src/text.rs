//! One-character-per-cell text format.
//!
//! | Char | Cell type           |
//! |------|---------------------|
//! | `.`  | `Empty`             |
//! | `E`  | `Exit`              |
//! | `#`  | `Wall`              |
//! | `O`  | `Obstacle`          |
//! | `P`  | `Person`            |
//! | `S`  | `Smoke`             |
//! | `A`  | `PersonAppearance`  |
//! | `X`  | `PersonAtExit`      |
//! | `p`  | `PersonWithSmoke`   |
//! | `o`  | `ObstacleWithSmoke` |
//!
//! Any other character becomes a wall.  Blank lines and surrounding
//! whitespace are ignored, which makes inline test fixtures easy to indent.

use std::path::{Path, PathBuf};

use crate::{CellType, Grid, GridError, GridResult, Importer, Renderer};

pub fn char_for(kind: CellType) -> char {
    match kind {
        CellType::Empty             => '.',
        CellType::Exit              => 'E',
        CellType::Wall              => '#',
        CellType::Obstacle          => 'O',
        CellType::Person            => 'P',
        CellType::Smoke             => 'S',
        CellType::PersonAppearance  => 'A',
        CellType::PersonAtExit      => 'X',
        CellType::PersonWithSmoke   => 'p',
        CellType::ObstacleWithSmoke => 'o',
    }
}

pub fn kind_for(c: char) -> CellType {
    match c {
        '.' => CellType::Empty,
        'E' => CellType::Exit,
        'O' => CellType::Obstacle,
        'P' => CellType::Person,
        'S' => CellType::Smoke,
        'A' => CellType::PersonAppearance,
        'X' => CellType::PersonAtExit,
        'p' => CellType::PersonWithSmoke,
        'o' => CellType::ObstacleWithSmoke,
        _ => CellType::Wall,
    }
}

/// Parse a text layout into a grid.
pub fn parse_grid(text: &str) -> GridResult<Grid> {
    let rows: Vec<Vec<CellType>> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| l.chars().map(kind_for).collect())
        .collect();
    Grid::from_rows(rows)
}

// ── TextImporter ──────────────────────────────────────────────────────────────

enum Source {
    Inline(String),
    File(PathBuf),
}

/// [`Importer`] for the text format, from a string or a file.
pub struct TextImporter {
    source: Source,
}

impl TextImporter {
    pub fn new(text: impl Into<String>) -> Self {
        Self { source: Source::Inline(text.into()) }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self { source: Source::File(path.as_ref().to_path_buf()) }
    }
}

impl Importer for TextImporter {
    fn load(&self) -> GridResult<Grid> {
        match &self.source {
            Source::Inline(text) => parse_grid(text),
            Source::File(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| {
                    GridError::Unreadable(format!("{}: {e}", path.display()))
                })?;
                parse_grid(&text)
            }
        }
    }
}

// ── TextRenderer ──────────────────────────────────────────────────────────────

/// [`Renderer`] producing the text format, one line per row.
#[derive(Copy, Clone, Debug, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    type Artifact = String;

    fn render(&self, grid: &Grid) -> String {
        let mut out = String::with_capacity(grid.len() + grid.height());
        for row in grid.cells().chunks(grid.width()) {
            out.extend(row.iter().map(|c| char_for(c.kind)));
            out.push('\n');
        }
        out
    }
}
