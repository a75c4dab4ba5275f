//! Collaborator traits at the simulation boundary.
//!
//! The automaton never reads or writes files.  An [`Importer`] turns some
//! external source into an initial [`Grid`]; a [`Renderer`] turns a grid
//! snapshot into an artifact for inspection.  Implementations live next to
//! their format: [`crate::text`] here, raster images in `evac-bitmap`.

use crate::{Grid, GridResult};

/// Produces the initial grid.
///
/// Implementations must map every unrecognised encoding to
/// [`CellType::Wall`](crate::CellType::Wall) and fail with
/// [`GridError::Unreadable`](crate::GridError::Unreadable) when the source
/// cannot be decoded at all.
pub trait Importer {
    fn load(&self) -> GridResult<Grid>;
}

/// A pure function of a grid snapshot; never mutates simulation state.
pub trait Renderer {
    type Artifact;

    fn render(&self, grid: &Grid) -> Self::Artifact;
}
