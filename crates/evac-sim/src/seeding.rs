//! Population and smoke placement.
//!
//! Both operations follow the same pattern: collect the eligible pools in one
//! scan, reject the request if it exceeds them, shuffle, convert.  The
//! capacity check happens before any cell is touched, so a failed call leaves
//! the grid exactly as it was.  A successful call re-solves the distance
//! field, since new occupants and smoke change the traversal costs.

use evac_core::{Position, SimRng};
use evac_grid::{CellType, FieldSolver};
use tracing::info;

use crate::{Automaton, SimError, SimResult};

impl<S: FieldSolver> Automaton<S> {
    /// Place `count` pedestrians.
    ///
    /// `PersonAppearance` cells are filled first, in random order, then plain
    /// `Empty` cells, also in random order.
    pub fn seed_people(&mut self, count: usize, rng: &mut SimRng) -> SimResult<()> {
        let mut priority: Vec<Position> = Vec::new();
        let mut ordinary: Vec<Position> = Vec::new();
        for (pos, cell) in self.grid.iter() {
            match cell.kind {
                CellType::PersonAppearance => priority.push(pos),
                CellType::Empty => ordinary.push(pos),
                _ => {}
            }
        }

        let available = priority.len() + ordinary.len();
        if count > available {
            return Err(SimError::Capacity { what: "people", requested: count, available });
        }

        rng.shuffle(&mut priority);
        rng.shuffle(&mut ordinary);
        let from_priority = count.min(priority.len());

        for pos in priority.into_iter().chain(ordinary).take(count) {
            let cell = self.grid.cell_mut(pos);
            cell.kind = CellType::Person;
            cell.exposure = 0;
        }
        self.stats.pedestrians += count as u64;
        self.recompute_distances();

        info!(count, from_priority, available, "seeded pedestrians");
        Ok(())
    }

    /// Fill `count` random `Empty` cells with smoke.
    pub fn seed_smoke(&mut self, count: usize, rng: &mut SimRng) -> SimResult<()> {
        let mut pool = self.grid.positions_of(CellType::Empty.into());
        let available = pool.len();
        if count > available {
            return Err(SimError::Capacity { what: "smoke sources", requested: count, available });
        }

        rng.shuffle(&mut pool);
        for pos in pool.into_iter().take(count) {
            self.grid.set_kind(pos, CellType::Smoke);
        }
        self.recompute_distances();

        info!(count, available, "seeded smoke");
        Ok(())
    }
}
