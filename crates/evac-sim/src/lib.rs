//! `evac-sim` — the evacuation cellular automaton and its run driver.
//!
//! # One tick
//!
//! ```text
//! step(rng):
//!   1. Scan       one pass over every cell:
//!                   ignitable cells draw smoke-spread candidacy,
//!                   PersonAtExit cells are queued for absorption,
//!                   Person / PersonWithSmoke cells are queued to move.
//!      Absorb     queued PersonAtExit cells revert to Exit.
//!   2. Distances  FieldSolver::recompute on the post-scan grid.
//!   3. Smoke      candidates from 1 ignite.
//!   4. Movement   queued pedestrians, shuffled, each step to the closest
//!                 free neighbour (forward always, sideways with
//!                 probability chaos_rate, never backward).
//! ```
//!
//! `step` returns `false` once no pedestrian token is left on the grid.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`Runner`] executes independent runs on Rayon.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use evac_core::{EvacConfig, SimRng};
//! use evac_grid::{Importer, TextImporter};
//! use evac_sim::{Automaton, NoopObserver, Runner};
//!
//! let config = EvacConfig::default();
//! let grid = TextImporter::from_path("room.txt").load()?;
//! let mut base = Automaton::new(grid, &config);
//! base.seed_people(100, &mut SimRng::new(config.seed))?;
//! let report = Runner::new(config).run(&base, &mut NoopObserver)?;
//! println!("{report}");
//! ```

pub mod automaton;
pub mod error;
pub mod observer;
pub mod runner;
pub mod seeding;
pub mod stats;
pub mod transition;


pub use automaton::{Automaton, TickSummary};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use runner::Runner;
pub use stats::{Report, RunAggregator, Statistics};
