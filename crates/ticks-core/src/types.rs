// File: crates/ticks-core/src/types.rs
// Summary: Shared types and constants (tick band, normalized interval, float tolerances).

use crate::error::{Result, TickError};

/// Default lower bound of the tick-count band (inclusive).
pub const DEFAULT_MIN_TICKS: usize = 10;
/// Default upper bound of the tick-count band (exclusive).
pub const DEFAULT_MAX_TICKS: usize = 15;

/// Drift allowance when aligning a bound to a step: the quotient must be this
/// close to an integer, and the multiple this close to the bound relative to
/// its magnitude, so `0.6 / 0.2` counts as exactly 3.
pub const SNAP_TOLERANCE: f64 = 1e-9;

/// Fraction of a step added past the last tick when sizing the progression.
pub const STOP_PADDING_FRACTION: f64 = 0.1;

/// Upper limit on the number of ticks a single selection will materialize.
pub const MAX_MATERIALIZED_TICKS: usize = 1_000_000;

/// Acceptable tick-count band `[min_ticks, max_ticks)`.
/// Contract: `0 < min_ticks < max_ticks`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickConfig {
    pub min_ticks: usize,
    pub max_ticks: usize,
}

impl TickConfig {
    /// Create a validated band.
    pub fn new(min_ticks: usize, max_ticks: usize) -> Result<Self> {
        let cfg = Self { min_ticks, max_ticks };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check the band invariant; fields are public so callers may have built it by hand.
    pub fn validate(&self) -> Result<()> {
        if self.min_ticks == 0 || self.min_ticks >= self.max_ticks {
            return Err(TickError::InvalidBand { min_ticks: self.min_ticks, max_ticks: self.max_ticks });
        }
        Ok(())
    }

    /// Half-open band check: `min_ticks <= count < max_ticks`.
    #[inline]
    pub fn contains(&self, count: usize) -> bool {
        self.min_ticks <= count && count < self.max_ticks
    }

    /// Distance of `count` from the preferred (minimum) tick count.
    #[inline]
    pub fn distance(&self, count: usize) -> usize {
        count.abs_diff(self.min_ticks)
    }
}

impl Default for TickConfig {
    fn default() -> Self {
        Self { min_ticks: DEFAULT_MIN_TICKS, max_ticks: DEFAULT_MAX_TICKS }
    }
}

/// Closed numeric interval with `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    /// Build from two bounds in either order. Reversed bounds are swapped.
    pub fn new(max_value: f64, min_value: f64) -> Result<Self> {
        if !max_value.is_finite() {
            return Err(TickError::NonFinite { name: "max_value", value: max_value });
        }
        if !min_value.is_finite() {
            return Err(TickError::NonFinite { name: "min_value", value: min_value });
        }
        let (min, max) = if max_value < min_value { (max_value, min_value) } else { (min_value, max_value) };
        Ok(Self { min, max })
    }

    pub const fn min(&self) -> f64 { self.min }
    pub const fn max(&self) -> f64 { self.max }
}
