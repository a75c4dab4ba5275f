//! `evac-output` — simulation output writers.
//!
//! | Backend | Files created                                |
//! |---------|----------------------------------------------|
//! | CSV     | `tick_summaries.csv`, `run_summaries.csv`    |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`StatsOutputObserver`], which implements `evac_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use evac_output::{CsvWriter, StatsOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = StatsOutputObserver::new(writer);
//! let report = runner.run(&base, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::StatsOutputObserver;
pub use row::{RunSummaryRow, TickSummaryRow};
pub use writer::OutputWriter;
