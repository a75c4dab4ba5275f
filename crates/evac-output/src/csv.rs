//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_summaries.csv`
//! - `run_summaries.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, RunSummaryRow, TickSummaryRow};

pub const TICK_HEADER: [&str; 5] = ["run", "tick", "moves", "remaining", "evacuated"];

pub const RUN_HEADER: [&str; 8] = [
    "run",
    "pedestrians",
    "evacuated",
    "ticks",
    "moves",
    "smoke_exposure",
    "evacuation_time",
    "max_exposure",
];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    ticks:    Writer<File>,
    runs:     Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files in it, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut ticks = Writer::from_path(dir.join("tick_summaries.csv"))?;
        ticks.write_record(TICK_HEADER)?;

        let mut runs = Writer::from_path(dir.join("run_summaries.csv"))?;
        runs.write_record(RUN_HEADER)?;

        Ok(Self { ticks, runs, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.ticks.write_record(&[
            row.run.to_string(),
            row.tick.to_string(),
            row.moves.to_string(),
            row.remaining.to_string(),
            row.evacuated.to_string(),
        ])?;
        Ok(())
    }

    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.runs.write_record(&[
            row.run.to_string(),
            row.pedestrians.to_string(),
            row.evacuated.to_string(),
            row.ticks.to_string(),
            row.moves.to_string(),
            row.smoke_exposure.to_string(),
            row.evacuation_time.to_string(),
            row.max_exposure.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.ticks.flush()?;
        self.runs.flush()?;
        Ok(())
    }
}
