//! The `Automaton` struct: grid ownership, construction, and accessors.
//!
//! Seeding lives in [`crate::seeding`], the transition function in
//! [`crate::transition`].

use evac_core::{EvacConfig, Position};
use evac_grid::{CellSet, CellType, CostModel, DijkstraSolver, FieldSolver, Grid};

use crate::Statistics;

/// What happened during the most recent tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// 1-based tick number within the run.
    pub tick:      u64,
    /// Accepted moves this tick.
    pub moves:     u64,
    /// Pedestrian tokens still on the grid after the tick.
    pub remaining: u64,
    /// Pedestrians absorbed by an exit so far in the run.
    pub evacuated: u64,
}

/// The evacuation cellular automaton.
///
/// Exclusively owns its grid.  [`copy`](Self::copy) yields a fully
/// independent automaton (grid, exit list, statistics), so several runs can
/// diverge from one seeded baseline.  Randomness is never stored here; every
/// stochastic operation takes the caller's [`SimRng`](evac_core::SimRng).
///
/// `S` is the distance-field algorithm; the default is multi-source Dijkstra.
#[derive(Clone, Debug)]
pub struct Automaton<S: FieldSolver = DijkstraSolver> {
    pub(crate) grid:           Grid,
    /// Exit positions, captured once at construction.  Exits never move.
    pub(crate) exits:          Vec<Position>,
    pub(crate) solver:         S,
    pub(crate) chaos_rate:     f64,
    pub(crate) spreading_rate: f64,
    pub(crate) stats:          Statistics,
    pub(crate) last_tick:      TickSummary,
}

impl Automaton<DijkstraSolver> {
    /// Build an automaton over `grid` using the cost factors and rates from
    /// `config`.  The configuration is assumed validated.
    pub fn new(grid: Grid, config: &EvacConfig) -> Self {
        let solver = DijkstraSolver::new(CostModel::from_config(config));
        Self::with_solver(grid, solver, config.chaos_rate, config.spreading_rate)
    }
}

impl<S: FieldSolver> Automaton<S> {
    /// Build with a custom distance-field solver.
    ///
    /// Captures the exit list and computes the initial distance field.  Any
    /// pedestrians already present in `grid` count towards the population.
    pub fn with_solver(grid: Grid, solver: S, chaos_rate: f64, spreading_rate: f64) -> Self {
        // An importer may hand over a person already standing on an exit.
        let exits = grid.positions_of(CellType::Exit | CellType::PersonAtExit);
        let stats = Statistics {
            pedestrians: grid.count(CellSet::PEOPLE) as u64,
            ..Statistics::default()
        };

        let mut automaton = Self {
            grid,
            exits,
            solver,
            chaos_rate,
            spreading_rate,
            stats,
            last_tick: TickSummary::default(),
        };
        automaton.recompute_distances();
        automaton
    }

    /// Independent deep copy: grid, exit list, and accumulated statistics.
    pub fn copy(&self) -> Self
    where
        S: Clone,
    {
        self.clone()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Read-only view of the current grid (for renderers).
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn exits(&self) -> &[Position] {
        &self.exits
    }

    /// Statistics accumulated by this automaton so far.
    #[inline]
    pub fn statistics(&self) -> Statistics {
        self.stats
    }

    #[inline]
    pub fn chaos_rate(&self) -> f64 {
        self.chaos_rate
    }

    #[inline]
    pub fn spreading_rate(&self) -> f64 {
        self.spreading_rate
    }

    #[inline]
    pub fn solver(&self) -> &S {
        &self.solver
    }

    #[inline]
    pub fn last_tick(&self) -> TickSummary {
        self.last_tick
    }

    /// Pedestrian tokens currently on the grid (including those standing on
    /// an exit awaiting absorption).
    pub fn remaining(&self) -> usize {
        self.grid.count(CellSet::PEOPLE)
    }

    /// `true` once no pedestrian token is left anywhere on the grid.
    pub fn is_terminal(&self) -> bool {
        self.remaining() == 0
    }

    /// Re-solve the exit-distance field against the current occupancy.
    pub(crate) fn recompute_distances(&mut self) {
        self.solver.recompute(&mut self.grid, &self.exits);
    }
}
