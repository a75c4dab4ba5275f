//! Exit-distance field: solver trait and default multi-source Dijkstra.
//!
//! # Pluggability
//!
//! The transition engine calls the field through the [`FieldSolver`] trait,
//! so applications can swap in another cost model or algorithm without
//! touching the automaton.  The default [`DijkstraSolver`] re-solves the
//! whole field every tick, because occupancy and smoke change the edge
//! weights between ticks.
//!
//! # Cost model
//!
//! Leaving a cell costs its **accrual**:
//!
//! ```text
//! accrual = 1.0 × occupied_factor (if the cell holds a pedestrian)
//!               × smoke_factor    (if the cell is smoke-bearing)
//! ```
//!
//! so a neighbour of `c` is reached at `dist(c) + accrual(c)`.  Congestion
//! and smoke make a cell more expensive to pass through, not to stand in.
//! Every accrual is ≥ 1, which keeps Dijkstra's finalisation argument valid.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use evac_core::{EvacConfig, Position};

use crate::{CellSet, CellType, Grid};

// ── CostModel ─────────────────────────────────────────────────────────────────

/// Traversal-cost multipliers.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    pub occupied_factor: f64,
    pub smoke_factor:    f64,
}

impl CostModel {
    pub fn new(occupied_factor: f64, smoke_factor: f64) -> Self {
        debug_assert!(occupied_factor >= 1.0 && smoke_factor >= 1.0);
        Self { occupied_factor, smoke_factor }
    }

    /// Uniform cost: every accrual is exactly 1 (plain hop count).
    pub fn neutral() -> Self {
        Self { occupied_factor: 1.0, smoke_factor: 1.0 }
    }

    pub fn from_config(config: &EvacConfig) -> Self {
        Self::new(config.occupied_factor, config.smoke_factor)
    }

    /// Cost of leaving a cell of type `kind`.
    #[inline]
    pub fn accrual(&self, kind: CellType) -> f64 {
        let mut cost = 1.0;
        if kind.is_in(CellSet::PEOPLE) {
            cost *= self.occupied_factor;
        }
        if kind.is_in(CellSet::SMOKE) {
            cost *= self.smoke_factor;
        }
        cost
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::from_config(&EvacConfig::default())
    }
}

// ── FieldSolver trait ─────────────────────────────────────────────────────────

/// Recomputes `exit_distance` for every cell of a grid.
///
/// # Contract
///
/// After `recompute`:
/// - every position in `exits` has distance exactly 0;
/// - every traversable cell connected to an exit has a finite, non-negative
///   distance;
/// - all other cells (walls, obstacles, enclosed floor) are `f64::INFINITY`.
pub trait FieldSolver: Send + Sync {
    fn recompute(&self, grid: &mut Grid, exits: &[Position]);

    /// The cost factors this solver applies, if it follows [`CostModel`].
    fn cost_model(&self) -> Option<CostModel> {
        None
    }
}

// ── DijkstraSolver ────────────────────────────────────────────────────────────

/// Multi-source Dijkstra seeded from every exit at distance 0.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DijkstraSolver {
    pub cost: CostModel,
}

impl DijkstraSolver {
    pub fn new(cost: CostModel) -> Self {
        Self { cost }
    }
}

impl FieldSolver for DijkstraSolver {
    fn recompute(&self, grid: &mut Grid, exits: &[Position]) {
        dijkstra(grid, exits, &self.cost);
    }

    fn cost_model(&self) -> Option<CostModel> {
        Some(self.cost)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

fn dijkstra(grid: &mut Grid, exits: &[Position], cost: &CostModel) {
    let width = grid.width();
    let n = grid.len();

    for cell in grid.cells_mut() {
        cell.exit_distance = f64::INFINITY;
    }

    // A finalised cell is never revisited.
    let mut visited = vec![false; n];

    // Min-heap: (distance, row-major index).  Reverse turns the max-heap into
    // a min-heap; the index breaks ties deterministically.
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, usize)>> = BinaryHeap::new();
    for &exit in exits {
        grid.cell_mut(exit).exit_distance = 0.0;
        heap.push(Reverse((OrderedFloat(0.0), exit.index(width))));
    }

    let mut neighbors = Vec::with_capacity(8);
    while let Some(Reverse((OrderedFloat(dist), idx))) = heap.pop() {
        // Skip stale heap entries.
        if visited[idx] {
            continue;
        }
        visited[idx] = true;
        debug_assert!(dist >= 0.0, "negative exit distance {dist}");

        let pos = grid.position(idx);
        let next = dist + cost.accrual(grid.cells()[idx].kind);

        grid.neighborhood_into(pos, CellSet::TRAVERSABLE, &mut neighbors);
        for &nb in &neighbors {
            let j = nb.index(width);
            if visited[j] {
                continue;
            }
            let cell = &mut grid.cells_mut()[j];
            // Exits are sources; their 0 is never improved upon.
            if cell.kind == CellType::Exit {
                continue;
            }
            if next < cell.exit_distance {
                cell.exit_distance = next;
                heap.push(Reverse((OrderedFloat(next), j)));
            }
        }
    }
}
