//! Multi-run driver.
//!
//! Every run starts from [`Automaton::copy`] of one baseline and draws from
//! its own child of the root RNG, so runs are independent and reproducible.
//! The child generators are derived up-front, in run order, which makes the
//! `parallel` feature produce exactly the same report as the sequential path.

use evac_core::{EvacConfig, EvacError, SimRng};
use evac_grid::FieldSolver;
use tracing::{info, warn};

use crate::{Automaton, Report, RunAggregator, SimError, SimObserver, SimResult, Statistics, TickSummary};

/// Result of one run, collected before observers see it.
struct RunOutcome {
    stats: Statistics,
    ticks: Vec<TickSummary>,
}

/// Runs `config.runs` independent simulations and aggregates them.
#[derive(Clone, Debug)]
pub struct Runner {
    config: EvacConfig,
    /// `(people, smoke)` placed afresh in every run's copy.
    reseed: Option<(usize, usize)>,
}

impl Runner {
    pub fn new(config: EvacConfig) -> Self {
        Self { config, reseed: None }
    }

    /// Seed `people` pedestrians and `smoke` smoke cells into each run's copy
    /// instead of reusing the baseline's placement.  The baseline should then
    /// be unpopulated.
    pub fn reseed_each_run(mut self, people: usize, smoke: usize) -> Self {
        self.reseed = Some((people, smoke));
        self
    }

    pub fn config(&self) -> &EvacConfig {
        &self.config
    }

    /// Execute all runs from `base` and return the normalised report.
    ///
    /// Observer callbacks are delivered after the runs complete, in run
    /// order.
    pub fn run<S, O>(&self, base: &Automaton<S>, observer: &mut O) -> SimResult<Report>
    where
        S: FieldSolver + Clone,
        O: SimObserver,
    {
        self.config.validate()?;
        self.check_agrees(base)?;

        let rngs = self.run_rngs(self.config.runs);

        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<SimResult<RunOutcome>> = rngs
            .into_iter()
            .enumerate()
            .map(|(i, rng)| self.run_one(i as u32, base, rng))
            .collect();

        #[cfg(feature = "parallel")]
        let outcomes: Vec<SimResult<RunOutcome>> = {
            use rayon::prelude::*;

            rngs.into_par_iter()
                .enumerate()
                .map(|(i, rng)| self.run_one(i as u32, base, rng))
                .collect()
        };

        let mut aggregator = RunAggregator::new();
        for (i, outcome) in outcomes.into_iter().enumerate() {
            let outcome = outcome?;
            let run = i as u32;
            observer.on_run_start(run);
            for summary in &outcome.ticks {
                observer.on_tick_end(run, summary);
            }
            observer.on_run_end(run, &outcome.stats);
            aggregator.add(&outcome.stats)?;
        }

        let report = aggregator
            .finish(self.config.scale)
            .ok_or_else(|| SimError::Config(EvacError::Config("no runs were executed".into())))?;
        info!(
            runs = report.runs,
            evacuated = report.evacuated,
            total_time_secs = report.total_time_secs,
            "simulation complete"
        );
        observer.on_sim_end(&report);
        Ok(report)
    }

    /// Reject a baseline built with different rates or cost factors than the
    /// runner's configuration.  The automaton's values are the ones in effect.
    fn check_agrees<S: FieldSolver>(&self, base: &Automaton<S>) -> SimResult<()> {
        let mut fields = vec![
            ("chaos_rate", self.config.chaos_rate, base.chaos_rate()),
            ("spreading_rate", self.config.spreading_rate, base.spreading_rate()),
        ];
        if let Some(cost) = base.solver().cost_model() {
            fields.push(("occupied_factor", self.config.occupied_factor, cost.occupied_factor));
            fields.push(("smoke_factor", self.config.smoke_factor, cost.smoke_factor));
        }

        match fields.into_iter().find(|&(_, runner, automaton)| runner != automaton) {
            Some((field, runner, automaton)) => {
                Err(SimError::ConfigMismatch { field, runner, automaton })
            }
            None => Ok(()),
        }
    }

    /// The generator run `run` draws from.
    ///
    /// Together with [`prepare`](Self::prepare) this replays any single run
    /// outside the driver, e.g. to render its frames.
    pub fn rng_for(&self, run: u32) -> SimRng {
        let mut rngs = self.run_rngs(run + 1);
        rngs.swap_remove(run as usize)
    }

    /// The automaton run `run` starts from: a copy of `base`, re-seeded if
    /// [`reseed_each_run`](Self::reseed_each_run) was set.
    pub fn prepare<S: FieldSolver + Clone>(
        &self,
        base: &Automaton<S>,
        rng:  &mut SimRng,
    ) -> SimResult<Automaton<S>> {
        let mut sim = base.copy();
        if let Some((people, smoke)) = self.reseed {
            sim.seed_people(people, rng)?;
            sim.seed_smoke(smoke, rng)?;
        }
        Ok(sim)
    }

    /// Child generators for runs `0..count`, always derived in run order.
    fn run_rngs(&self, count: u32) -> Vec<SimRng> {
        let mut root = SimRng::new(self.config.seed);
        (0..count).map(|i| root.child(u64::from(i))).collect()
    }

    fn run_one<S: FieldSolver + Clone>(
        &self,
        run:      u32,
        base:     &Automaton<S>,
        mut rng:  SimRng,
    ) -> SimResult<RunOutcome> {
        let mut sim = self.prepare(base, &mut rng)?;

        let mut ticks = Vec::new();
        while (ticks.len() as u64) < self.config.max_ticks && sim.step(&mut rng) {
            ticks.push(sim.last_tick());
        }

        let stats = sim.statistics();
        if !sim.is_terminal() {
            warn!(
                run,
                max_ticks = self.config.max_ticks,
                remaining = sim.remaining(),
                "tick budget exhausted with pedestrians left"
            );
        }
        info!(run, ticks = stats.time, evacuated = stats.evacuated, moves = stats.moves, "run finished");
        Ok(RunOutcome { stats, ticks })
    }
}
