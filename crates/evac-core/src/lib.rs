//! `evac-core` — foundational types for the `evac` evacuation simulator.
//!
//! This crate is a dependency of every other `evac-*` crate.  It has no
//! `evac-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`position`]   | `Position` (row, col) grid coordinate                  |
//! | [`rng`]        | `SimRng`, the explicitly threaded random source        |
//! | [`config`]     | `EvacConfig` tunables and validation                   |
//! | [`units`]      | `Scale`: steps/cells to seconds/metres                 |
//! | [`error`]      | `EvacError`, `EvacResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on public types; TOML config.    |

pub mod config;
pub mod error;
pub mod position;
pub mod rng;
pub mod units;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::EvacConfig;
pub use error::{EvacError, EvacResult};
pub use position::Position;
pub use rng::SimRng;
pub use units::Scale;
