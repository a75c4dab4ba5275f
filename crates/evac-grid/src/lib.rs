//! `evac-grid` — the typed cell grid and the exit-distance field.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`cell`]     | `CellType`, `CellSet` (bitset groups), `Cell`              |
//! | [`grid`]     | `Grid` (row-major matrix), Moore neighbourhood queries     |
//! | [`distance`] | `FieldSolver` trait, `CostModel`, `DijkstraSolver`         |
//! | [`io`]       | `Importer` / `Renderer` collaborator traits                |
//! | [`text`]     | One-char-per-cell text importer and renderer               |
//! | [`error`]    | `GridError`, `GridResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod cell;
pub mod distance;
pub mod error;
pub mod grid;
pub mod io;
pub mod text;

#[cfg(test)]
mod tests;

pub use cell::{Cell, CellSet, CellType};
pub use distance::{CostModel, DijkstraSolver, FieldSolver};
pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use io::{Importer, Renderer};
pub use text::{TextImporter, TextRenderer};
