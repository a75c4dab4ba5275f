use evac_core::EvacError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Seeding asked for more cells than the grid has eligible.  Nothing was
    /// modified.
    #[error("cannot place {requested} {what}: only {available} eligible cells")]
    Capacity {
        what:      &'static str,
        requested: usize,
        available: usize,
    },

    #[error("cannot aggregate a run with {got} pedestrians into runs with {expected}")]
    PedestrianMismatch {
        expected: u64,
        got:      u64,
    },

    /// The driver's configuration disagrees with the one the automaton was
    /// built from.
    #[error("{field} is {runner} for the runner but {automaton} for the automaton")]
    ConfigMismatch {
        field:     &'static str,
        runner:    f64,
        automaton: f64,
    },

    #[error(transparent)]
    Config(#[from] EvacError),
}

pub type SimResult<T> = Result<T, SimError>;
