//! Raster renderers.

use std::path::Path;

use evac_core::Position;
use evac_grid::{Grid, Renderer};
use image::{Rgb, RgbImage};

use crate::BitmapResult;
use crate::palette;

/// Distances at or beyond this are drawn black in the heat map.
pub const HEAT_CUTOFF: f64 = 200.0;

/// Build a `scale`-times-enlarged image where each cell is one colour.
fn scaled(grid: &Grid, scale: u32, color: impl Fn(Position) -> Rgb<u8>) -> RgbImage {
    let scale = scale.max(1);
    let width = grid.width() as u32 * scale;
    let height = grid.height() as u32 * scale;
    RgbImage::from_fn(width, height, |x, y| {
        color(Position::new((y / scale) as usize, (x / scale) as usize))
    })
}

/// Draws each cell as a `scale × scale` block in its type colour.
#[derive(Copy, Clone, Debug)]
pub struct BitmapRenderer {
    pub scale: u32,
}

impl BitmapRenderer {
    pub fn new(scale: u32) -> Self {
        Self { scale }
    }
}

impl Default for BitmapRenderer {
    fn default() -> Self {
        Self { scale: 10 }
    }
}

impl Renderer for BitmapRenderer {
    type Artifact = RgbImage;

    fn render(&self, grid: &Grid) -> RgbImage {
        scaled(grid, self.scale, |pos| palette::color_for(grid.kind(pos)))
    }
}

/// Jet-coloured map of the exit-distance field.  Red is next to an exit,
/// blue far away, black unreachable or beyond [`HEAT_CUTOFF`].
#[derive(Copy, Clone, Debug)]
pub struct DistanceHeatMap {
    pub scale: u32,
}

impl DistanceHeatMap {
    pub fn new(scale: u32) -> Self {
        Self { scale }
    }

    pub fn color(distance: f64) -> Rgb<u8> {
        if !(distance < HEAT_CUTOFF) {
            return palette::BLACK;
        }
        palette::jet(1.0 - distance / HEAT_CUTOFF)
    }
}

impl Default for DistanceHeatMap {
    fn default() -> Self {
        Self { scale: 10 }
    }
}

impl Renderer for DistanceHeatMap {
    type Artifact = RgbImage;

    fn render(&self, grid: &Grid) -> RgbImage {
        scaled(grid, self.scale, |pos| Self::color(grid.distance(pos)))
    }
}

/// Write `img` to `path`; the extension picks the format.
pub fn save(img: &RgbImage, path: impl AsRef<Path>) -> BitmapResult<()> {
    img.save(path.as_ref())?;
    Ok(())
}
