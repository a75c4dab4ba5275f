//! Run observer trait for progress reporting and data collection.

use crate::{Report, Statistics, TickSummary};

/// Callbacks invoked by [`Runner::run`][crate::Runner::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Calls always arrive in run order and,
/// within a run, in tick order, even when runs execute in parallel.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_run_end(&mut self, run: u32, stats: &Statistics) {
///         println!("run {run}: {} evacuated in {} steps", stats.evacuated, stats.time);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the first tick of each run.
    fn on_run_start(&mut self, _run: u32) {}

    /// Called after every tick of a run.
    fn on_tick_end(&mut self, _run: u32, _summary: &TickSummary) {}

    /// Called once a run is terminal or out of tick budget.
    fn on_run_end(&mut self, _run: u32, _stats: &Statistics) {}

    /// Called once with the normalised report after all runs.
    fn on_sim_end(&mut self, _report: &Report) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
