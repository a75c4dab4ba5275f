//! The per-tick transition function.
//!
//! A pedestrian token moves through
//! `Person ⇄ PersonWithSmoke → PersonAtExit → Exit`; the last transition is
//! absorbing.  See the crate docs for the phase order.

use evac_core::{Position, SimRng};
use evac_grid::{CellSet, CellType, FieldSolver};
use tracing::debug;

use crate::{Automaton, TickSummary};

impl<S: FieldSolver> Automaton<S> {
    /// Advance the automaton by one tick.
    ///
    /// Returns whether any pedestrian token was on the grid when the tick
    /// started.  Once it returns `false` the automaton is terminal and
    /// further calls leave it untouched.
    pub fn step(&mut self, rng: &mut SimRng) -> bool {
        // ── Phase 1: scan ─────────────────────────────────────────────────
        //
        // Smoke candidates and absorptions are collected, not applied, so no
        // cell sees another cell's same-tick change.
        let mut ignite:  Vec<Position> = Vec::new();
        let mut absorb:  Vec<Position> = Vec::new();
        let mut movers:  Vec<Position> = Vec::new();
        let mut sensing: Vec<Position> = Vec::with_capacity(8);

        for idx in 0..self.grid.len() {
            let pos = self.grid.position(idx);
            let kind = self.grid.cells()[idx].kind;

            if kind.is_in(CellSet::IGNITABLE) {
                self.grid.neighborhood_into(pos, CellSet::SMOKE_SENSING, &mut sensing);
                if !sensing.is_empty() {
                    let smoky = sensing
                        .iter()
                        .filter(|&&n| self.grid.cell(n).is(CellSet::SMOKE))
                        .count();
                    let p = self.spreading_rate * smoky as f64 / sensing.len() as f64;
                    if p > 0.0 && rng.gen_bool(p) {
                        ignite.push(pos);
                    }
                }
            }

            match kind {
                CellType::Person => movers.push(pos),
                CellType::PersonWithSmoke => {
                    self.grid.cell_mut(pos).exposure += 1;
                    self.stats.smoke_exposure += 1;
                    movers.push(pos);
                }
                CellType::PersonAtExit => absorb.push(pos),
                _ => {}
            }
        }

        if movers.is_empty() && absorb.is_empty() {
            return false;
        }

        for &pos in &absorb {
            let cell = self.grid.cell_mut(pos);
            self.stats.evacuated += 1;
            self.stats.evacuation_time += self.stats.time;
            self.stats.max_exposure = self.stats.max_exposure.max(u64::from(cell.exposure));
            cell.exposure = 0;
            cell.kind = CellType::Exit;
        }

        // ── Phase 2: distance field ───────────────────────────────────────
        self.recompute_distances();

        // ── Phase 3: smoke materialisation ────────────────────────────────
        for &pos in &ignite {
            let cell = self.grid.cell_mut(pos);
            cell.kind = match cell.kind {
                CellType::Obstacle => CellType::ObstacleWithSmoke,
                CellType::Person => {
                    cell.exposure += 1;
                    self.stats.smoke_exposure += 1;
                    CellType::PersonWithSmoke
                }
                _ => CellType::Smoke,
            };
        }

        // ── Phase 4: movement ─────────────────────────────────────────────
        //
        // Re-shuffled every tick so no pedestrian has positional priority.
        rng.shuffle(&mut movers);
        let mut moves = 0u64;
        for &from in &movers {
            if let Some(to) = self.choose_move(from, rng) {
                self.move_person(from, to);
                moves += 1;
            }
        }
        self.stats.moves += moves;
        self.stats.time += 1;

        self.last_tick = TickSummary {
            tick: self.stats.time,
            moves,
            remaining: self.grid.count(CellSet::PEOPLE) as u64,
            evacuated: self.stats.evacuated,
        };
        debug!(
            tick = self.last_tick.tick,
            moves,
            remaining = self.last_tick.remaining,
            evacuated = self.stats.evacuated,
            ignited = ignite.len(),
            "tick complete"
        );
        true
    }

    /// Decide where the pedestrian at `from` goes, if anywhere.
    ///
    /// The free neighbours are shuffled and the first one with the lowest
    /// distance wins, which breaks ties uniformly at random.  A strictly
    /// closer cell (by at least one unit) is always taken; an equidistant one
    /// with probability `chaos_rate`; anything else is refused.
    pub(crate) fn choose_move(&self, from: Position, rng: &mut SimRng) -> Option<Position> {
        let mut candidates = self.grid.free_neighbors(from);
        if candidates.is_empty() {
            return None;
        }
        rng.shuffle(&mut candidates);

        let mut best = candidates[0];
        let mut best_dist = self.grid.distance(best);
        for &c in &candidates[1..] {
            let d = self.grid.distance(c);
            if d < best_dist {
                best = c;
                best_dist = d;
            }
        }

        // NaN (both infinite) fails every comparison and stays put.
        let diff = self.grid.distance(from) - best_dist;
        let accept = diff >= 1.0 || (diff == 0.0 && rng.gen_bool(self.chaos_rate));
        accept.then_some(best)
    }

    /// Move the token at `from` to the free cell `to`, carrying its exposure.
    fn move_person(&mut self, from: Position, to: Position) {
        let src = self.grid.cell_mut(from);
        let exposure = std::mem::take(&mut src.exposure);
        src.kind = if src.is(CellSet::SMOKE) { CellType::Smoke } else { CellType::Empty };

        let dst = self.grid.cell_mut(to);
        dst.kind = match dst.kind {
            CellType::Smoke => CellType::PersonWithSmoke,
            CellType::Exit => CellType::PersonAtExit,
            _ => CellType::Person,
        };
        dst.exposure = exposure;
    }
}
