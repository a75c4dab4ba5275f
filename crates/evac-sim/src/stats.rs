//! Per-run statistics, cross-run aggregation, and the final report.
//!
//! # Lifecycle
//!
//! ```text
//! Statistics (per run, mutated only by step)
//!     └─ RunAggregator::add  (field-wise sum, one run at a time)
//!          └─ RunAggregator::finish → Statistics::normalize → Report
//! ```
//!
//! `normalize` consumes the accumulator, so dividing by the run count twice
//! is impossible by construction.

use std::fmt;

use evac_core::Scale;

use crate::{SimError, SimResult};

// ── Statistics ────────────────────────────────────────────────────────────────

/// Raw counters for one run, or their sum over several runs.
///
/// All quantities are in steps or cells; [`Report`] converts to seconds and
/// metres.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Pedestrians placed on the grid.
    pub pedestrians:     u64,
    /// Pedestrians absorbed by an exit.
    pub evacuated:       u64,
    /// Ticks executed.
    pub time:            u64,
    /// Person-ticks spent in smoke.
    pub smoke_exposure:  u64,
    /// Accepted moves.
    pub moves:           u64,
    /// Sum over evacuated pedestrians of the tick at which each reached an
    /// exit.
    pub evacuation_time: u64,
    /// Largest smoke exposure of any single evacuated pedestrian.
    pub max_exposure:    u64,
}

impl Statistics {
    /// Add `other` into `self`, field by field.
    ///
    /// `max_exposure` is summed as well, so that after normalisation it is
    /// the mean per-run peak.
    pub fn aggregate(&mut self, other: &Statistics) {
        self.pedestrians     += other.pedestrians;
        self.evacuated       += other.evacuated;
        self.time            += other.time;
        self.smoke_exposure  += other.smoke_exposure;
        self.moves           += other.moves;
        self.evacuation_time += other.evacuation_time;
        self.max_exposure    += other.max_exposure;
    }

    /// Divide every field by `runs` and derive per-person and physical
    /// quantities.
    ///
    /// # Panics
    /// Panics if `runs` is zero.
    pub fn normalize(self, runs: u32, scale: Scale) -> Report {
        assert!(runs > 0, "cannot normalise over zero runs");
        let n = f64::from(runs);
        let mean = |v: u64| v as f64 / n;

        let pedestrians = mean(self.pedestrians);
        let per_person = |v: u64| if pedestrians > 0.0 { mean(v) / pedestrians } else { 0.0 };

        Report {
            runs,
            scale,
            pedestrians,
            evacuated:                mean(self.evacuated),
            ticks:                    mean(self.time),
            moves:                    mean(self.moves),
            smoke_exposure:           mean(self.smoke_exposure),
            evacuation_time:          mean(self.evacuation_time),
            max_exposure:             mean(self.max_exposure),
            total_time_secs:          scale.secs(mean(self.time)),
            mean_evacuation_secs:     scale.secs(per_person(self.evacuation_time)),
            mean_distance_m:          scale.meters(per_person(self.moves)),
            mean_smoke_exposure_secs: scale.secs(per_person(self.smoke_exposure)),
            peak_smoke_exposure_secs: scale.secs(mean(self.max_exposure)),
        }
    }
}

// ── RunAggregator ─────────────────────────────────────────────────────────────

/// Accumulates the statistics of runs that share a pedestrian count.
#[derive(Clone, Debug, Default)]
pub struct RunAggregator {
    runs:   u32,
    totals: Statistics,
}

impl RunAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// Raw running totals.
    pub fn totals(&self) -> &Statistics {
        &self.totals
    }

    /// Fold one run in.  Fails if its pedestrian count differs from the runs
    /// already aggregated.
    pub fn add(&mut self, run: &Statistics) -> SimResult<()> {
        if self.runs > 0 {
            let expected = self.totals.pedestrians / u64::from(self.runs);
            if run.pedestrians != expected {
                return Err(SimError::PedestrianMismatch { expected, got: run.pedestrians });
            }
        }
        self.totals.aggregate(run);
        self.runs += 1;
        Ok(())
    }

    /// Normalise the totals into a [`Report`].  Returns `None` when no run
    /// was added.
    pub fn finish(self, scale: Scale) -> Option<Report> {
        (self.runs > 0).then(|| self.totals.normalize(self.runs, scale))
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

/// Normalised, reportable statistics: per-run means and per-person values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Report {
    pub runs:  u32,
    pub scale: Scale,

    // Per-run means, simulation units.
    pub pedestrians:     f64,
    pub evacuated:       f64,
    pub ticks:           f64,
    pub moves:           f64,
    pub smoke_exposure:  f64,
    pub evacuation_time: f64,
    pub max_exposure:    f64,

    // Physical units.
    /// Time until the last pedestrian left, in seconds.
    pub total_time_secs:          f64,
    /// Mean time for one pedestrian to reach an exit, in seconds.
    pub mean_evacuation_secs:     f64,
    /// Mean distance walked per pedestrian, in metres (diagonal steps count
    /// as one cell).
    pub mean_distance_m:          f64,
    /// Mean time one pedestrian spent in smoke, in seconds.
    pub mean_smoke_exposure_secs: f64,
    /// Mean per-run worst individual smoke exposure, in seconds.
    pub peak_smoke_exposure_secs: f64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "runs:                    {}", self.runs)?;
        writeln!(f, "scale:                   {}", self.scale)?;
        writeln!(f, "walking speed:           {:.2} m/s", self.scale.walking_speed())?;
        writeln!(f, "pedestrians:             {:.1}", self.pedestrians)?;
        writeln!(f, "evacuated:               {:.1}", self.evacuated)?;
        writeln!(f, "steps:                   {:.1}", self.ticks)?;
        writeln!(f, "evacuation time:         {:.2} s", self.total_time_secs)?;
        writeln!(f, "mean time to exit:       {:.2} s", self.mean_evacuation_secs)?;
        writeln!(f, "mean distance walked:    {:.2} m", self.mean_distance_m)?;
        writeln!(f, "mean smoke exposure:     {:.2} s", self.mean_smoke_exposure_secs)?;
        write!(f, "peak smoke exposure:     {:.2} s", self.peak_smoke_exposure_secs)
    }
}
