// File: crates/ticks-core/src/axis.rs
// Summary: Axis model with a label and a range that asks the selector for its ticks.

use crate::error::Result;
use crate::grid::{snapped_ceil, snapped_floor};
use crate::ticks::{select_in, TickSet};
use crate::types::{Interval, TickConfig};

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    range: Interval,
}

impl Axis {
    /// Bounds may be given in either order; NaN or infinite bounds are rejected.
    pub fn new(label: impl Into<String>, a: f64, b: f64) -> Result<Self> {
        Ok(Self { label: label.into(), range: Interval::new(a, b)? })
    }

    pub fn min(&self) -> f64 { self.range.min() }
    pub fn max(&self) -> f64 { self.range.max() }
    pub fn range(&self) -> Interval { self.range }

    /// Nice ticks inside the axis range.
    pub fn nice_ticks(&self, config: &TickConfig) -> Result<TickSet> {
        select_in(&self.range, config)
    }

    /// Copy of this axis with both bounds pushed outward to multiples of the
    /// step chosen for the current range, so the ends land on ticks.
    pub fn expand_to_ticks(&self, config: &TickConfig) -> Result<Self> {
        let step = self.nice_ticks(config)?.nice_step();
        let lo = step.multiple(snapped_floor(self.min(), step));
        let hi = step.multiple(snapped_ceil(self.max(), step));
        Ok(Self { label: self.label.clone(), range: Interval::new(hi, lo)? })
    }
}
