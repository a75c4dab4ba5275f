//! `evac-bitmap` — raster images in and out of the automaton.
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`palette`] | Colour ⇄ cell-type tables                                  |
//! | [`import`]  | [`BitmapImporter`]: one pixel per cell                     |
//! | [`render`]  | [`BitmapRenderer`] (scaled cells), [`DistanceHeatMap`]     |
//! | [`samples`] | Generators for the bundled room layouts                    |
//!
//! Every format the `image` crate is built with can be read; frames and heat
//! maps are written in whatever format the output path's extension selects.

pub mod error;
pub mod import;
pub mod palette;
pub mod render;
pub mod samples;

#[cfg(test)]
mod tests;

pub use error::{BitmapError, BitmapResult};
pub use import::{BitmapImporter, grid_from_image};
pub use render::{BitmapRenderer, DistanceHeatMap, save};
pub use samples::{SampleKind, sample};
