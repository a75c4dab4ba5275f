//! Conversion from simulation units to physical units.
//!
//! The automaton counts in steps (ticks) and cells.  A `Scale` maps them to
//! seconds and metres:
//!
//!   seconds = steps * seconds_per_step
//!   metres  = cells * meters_per_cell
//!
//! Keeping the counters integral means statistics accumulate exactly; the
//! conversion is applied once, when a report is produced.

use std::fmt;

/// Physical size of one step and one cell.
///
/// Cheap to copy; holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scale {
    /// Real seconds represented by one tick.
    pub seconds_per_step: f64,
    /// Edge length of one cell in metres.
    pub meters_per_cell: f64,
}

impl Scale {
    pub fn new(seconds_per_step: f64, meters_per_cell: f64) -> Self {
        Self { seconds_per_step, meters_per_cell }
    }

    #[inline]
    pub fn secs(&self, steps: f64) -> f64 {
        steps * self.seconds_per_step
    }

    #[inline]
    pub fn meters(&self, cells: f64) -> f64 {
        cells * self.meters_per_cell
    }

    /// Walking speed implied by the scale (one cell per step), in m/s.
    #[inline]
    pub fn walking_speed(&self) -> f64 {
        self.meters_per_cell / self.seconds_per_step
    }
}

impl Default for Scale {
    /// 0.4 m cells crossed in 0.3 s, i.e. a free walking speed of ~1.33 m/s.
    fn default() -> Self {
        Self { seconds_per_step: 0.3, meters_per_cell: 0.4 }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} s/step, {:.2} m/cell", self.seconds_per_step, self.meters_per_cell)
    }
}
