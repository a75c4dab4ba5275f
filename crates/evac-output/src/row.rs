//! Plain data row types written by output backends.

use evac_sim::{Statistics, TickSummary};

/// One tick of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub run:       u32,
    pub tick:      u64,
    pub moves:     u64,
    pub remaining: u64,
    pub evacuated: u64,
}

impl TickSummaryRow {
    pub fn new(run: u32, summary: &TickSummary) -> Self {
        Self {
            run,
            tick:      summary.tick,
            moves:     summary.moves,
            remaining: summary.remaining,
            evacuated: summary.evacuated,
        }
    }
}

/// Raw counters of one finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummaryRow {
    pub run:             u32,
    pub pedestrians:     u64,
    pub evacuated:       u64,
    pub ticks:           u64,
    pub moves:           u64,
    pub smoke_exposure:  u64,
    pub evacuation_time: u64,
    pub max_exposure:    u64,
}

impl RunSummaryRow {
    pub fn new(run: u32, stats: &Statistics) -> Self {
        Self {
            run,
            pedestrians:     stats.pedestrians,
            evacuated:       stats.evacuated,
            ticks:           stats.time,
            moves:           stats.moves,
            smoke_exposure:  stats.smoke_exposure,
            evacuation_time: stats.evacuation_time,
            max_exposure:    stats.max_exposure,
        }
    }
}
