//! Raster importer: one pixel per cell, colour per [`palette::kind_for`].

use std::path::{Path, PathBuf};

use evac_core::Position;
use evac_grid::{Grid, GridError, GridResult, Importer};
use image::RgbImage;
use tracing::debug;

use crate::palette;
use crate::{BitmapError, BitmapResult};

/// Decode an in-memory image into a grid.
pub fn grid_from_image(img: &RgbImage) -> BitmapResult<Grid> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(BitmapError::Unreadable(format!("image is {width}×{height}")));
    }

    let mut grid = Grid::new(height as usize, width as usize);
    for (x, y, pixel) in img.enumerate_pixels() {
        grid.set_kind(Position::new(y as usize, x as usize), palette::kind_for(*pixel));
    }
    Ok(grid)
}

/// [`Importer`] reading any raster format the `image` crate decodes.
#[derive(Clone, Debug)]
pub struct BitmapImporter {
    path: PathBuf,
}

impl BitmapImporter {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl Importer for BitmapImporter {
    fn load(&self) -> GridResult<Grid> {
        let unreadable = |e: &dyn std::fmt::Display| {
            GridError::Unreadable(format!("{}: {e}", self.path.display()))
        };
        let img = image::open(&self.path).map_err(|e| unreadable(&e))?.to_rgb8();
        let grid = grid_from_image(&img).map_err(|e| unreadable(&e))?;
        debug!(path = %self.path.display(), height = grid.height(), width = grid.width(), "loaded bitmap");
        Ok(grid)
    }
}
