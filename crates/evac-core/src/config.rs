//! Simulation configuration.
//!
//! # Design
//!
//! One flat struct holds every tunable of the automaton and of the run
//! driver.  The application crate typically loads it from TOML (feature
//! `serde`), overrides individual fields from the command line, then calls
//! [`EvacConfig::validate`] once before constructing anything.

use crate::{EvacError, EvacResult, Scale};

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvacConfig {
    /// Multiplier on the traversal cost of a cell holding a pedestrian.
    /// Must be ≥ 1; 1 makes congestion invisible to the distance field.
    pub occupied_factor: f64,

    /// Multiplier on the traversal cost of a smoke-bearing cell.  Must be ≥ 1.
    pub smoke_factor: f64,

    /// Probability that a pedestrian takes an equidistant (sideways) step
    /// instead of staying put.
    pub chaos_rate: f64,

    /// Scales the fraction of smoke-bearing neighbours into the per-tick
    /// probability that a cell ignites.
    pub spreading_rate: f64,

    /// Physical size of one step and one cell.
    pub scale: Scale,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Tick budget per run.  A run that still has pedestrians after this many
    /// ticks is cut off and reported as-is.
    pub max_ticks: u64,

    /// Number of independent runs aggregated into one report.
    pub runs: u32,
}

impl Default for EvacConfig {
    fn default() -> Self {
        Self {
            occupied_factor: 2.0,
            smoke_factor:    3.0,
            chaos_rate:      0.1,
            spreading_rate:  0.1,
            scale:           Scale::default(),
            seed:            42,
            max_ticks:       10_000,
            runs:            1,
        }
    }
}

impl EvacConfig {
    /// Reject values that would make the automaton ill-defined.
    pub fn validate(&self) -> EvacResult<()> {
        if !(self.occupied_factor >= 1.0) {
            return Err(EvacError::Config(format!(
                "occupied_factor must be >= 1, got {}",
                self.occupied_factor
            )));
        }
        if !(self.smoke_factor >= 1.0) {
            return Err(EvacError::Config(format!(
                "smoke_factor must be >= 1, got {}",
                self.smoke_factor
            )));
        }
        for (name, p) in [("chaos_rate", self.chaos_rate), ("spreading_rate", self.spreading_rate)] {
            if !(0.0..=1.0).contains(&p) {
                return Err(EvacError::Config(format!("{name} must lie in [0, 1], got {p}")));
            }
        }
        if !(self.scale.seconds_per_step > 0.0) || !(self.scale.meters_per_cell > 0.0) {
            return Err(EvacError::Config(format!("scale must be positive, got {}", self.scale)));
        }
        if self.runs == 0 {
            return Err(EvacError::Config("runs must be at least 1".into()));
        }
        Ok(())
    }

    /// Parse a TOML document; missing keys keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> EvacResult<Self> {
        let config: EvacConfig = toml::from_str(s).map_err(|e| EvacError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    #[cfg(feature = "serde")]
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> EvacResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
