// File: crates/ticks-core/src/ticks.rs
// Summary: Nice tick selection over the fixed candidate step table.

use tracing::{debug, trace};

use crate::error::{Result, TickError};
use crate::grid::{padded_len, snapped_ceil, snapped_floor};
use crate::step::{candidate_steps, Step};
use crate::types::{Interval, TickConfig, MAX_MATERIALIZED_TICKS, STOP_PADDING_FRACTION};

/// How one candidate step lays out over an interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepFit {
    pub step: Step,
    /// `lower_tick / step` as an integer-valued float.
    pub lower_index: f64,
    /// `upper_tick / step` as an integer-valued float.
    pub upper_index: f64,
    /// Smallest multiple of `step` that is >= the interval minimum.
    pub lower_tick: f64,
    /// Largest multiple of `step` that is <= the interval maximum.
    pub upper_tick: f64,
    /// Ticks from `lower_tick` to `upper_tick` inclusive.
    pub count: usize,
}

/// Evaluate `step` against `interval`. `None` when no multiple of `step` lies inside.
pub fn evaluate_step(step: Step, interval: &Interval) -> Option<StepFit> {
    let lower_index = snapped_ceil(interval.min(), step);
    let upper_index = snapped_floor(interval.max(), step);
    if lower_index > upper_index {
        return None;
    }
    let lower_tick = step.multiple(lower_index);
    let upper_tick = step.multiple(upper_index);
    // Counted in index space: at large magnitudes the float gap between
    // `lower_tick` and `upper_tick` is no longer a whole number of steps.
    // Saturating cast; huge intervals are rejected later by the materialization limit.
    let count = ((upper_index - lower_index).round() + 1.0) as usize;
    Some(StepFit { step, lower_index, upper_index, lower_tick, upper_tick, count })
}

/// Every feasible candidate for `interval`, smallest step first.
pub fn feasible_fits(interval: &Interval) -> impl Iterator<Item = StepFit> + '_ {
    candidate_steps().iter().filter_map(move |&step| {
        let fit = evaluate_step(step, interval);
        match &fit {
            Some(f) => trace!(step = %step, lower = f.lower_tick, upper = f.upper_tick, count = f.count, "candidate"),
            None => trace!(step = %step, "candidate has no tick in range"),
        }
        fit
    })
}

/// Ordered ticks plus the step that produced them.
#[derive(Clone, Debug, PartialEq)]
pub struct TickSet {
    ticks: Vec<f64>,
    step: Step,
    fallback: bool,
}

impl TickSet {
    pub fn ticks(&self) -> &[f64] { &self.ticks }
    pub fn step(&self) -> f64 { self.step.value() }
    pub fn nice_step(&self) -> Step { self.step }
    /// True when no step fell inside the band and the closest count was taken.
    pub fn used_fallback(&self) -> bool { self.fallback }
    pub fn len(&self) -> usize { self.ticks.len() }
    pub fn is_empty(&self) -> bool { self.ticks.is_empty() }
    pub fn first(&self) -> Option<f64> { self.ticks.first().copied() }
    pub fn last(&self) -> Option<f64> { self.ticks.last().copied() }
    pub fn iter(&self) -> std::slice::Iter<'_, f64> { self.ticks.iter() }

    /// Split into the `(ticks, step)` pair.
    pub fn into_parts(self) -> (Vec<f64>, f64) {
        let step = self.step.value();
        (self.ticks, step)
    }
}

impl<'a> IntoIterator for &'a TickSet {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;
    fn into_iter(self) -> Self::IntoIter { self.ticks.iter() }
}

/// Select nice ticks for the interval spanned by `max_value` and `min_value`
/// (either order) so the tick count lands in `[config.min_ticks, config.max_ticks)`.
///
/// The smallest candidate step whose count is in the band wins. If none is,
/// the step whose count is closest to `min_ticks` is used, smaller step on ties.
///
/// A result is produced for every finite interval with a feasible step, with
/// one exception: a chosen step yielding more than
/// [`MAX_MATERIALIZED_TICKS`] ticks returns [`TickError::TooManyTicks`]
/// rather than allocating them (only reachable for widths around 10¹² and up).
pub fn select_ticks(max_value: f64, min_value: f64, config: &TickConfig) -> Result<TickSet> {
    let interval = Interval::new(max_value, min_value)?;
    select_in(&interval, config)
}

/// [`select_ticks`] with the default band of 10 to 15 ticks.
pub fn select_ticks_default(max_value: f64, min_value: f64) -> Result<TickSet> {
    select_ticks(max_value, min_value, &TickConfig::default())
}

/// Select ticks for an already normalized interval.
pub fn select_in(interval: &Interval, config: &TickConfig) -> Result<TickSet> {
    config.validate()?;
    let (fit, fallback) = match feasible_fits(interval).find(|f| config.contains(f.count)) {
        Some(fit) => {
            debug!(step = %fit.step, count = fit.count, "step accepted within band");
            (fit, false)
        }
        None => {
            let fit = closest_fit(interval, config).ok_or(TickError::NoFeasibleStep {
                min: interval.min(),
                max: interval.max(),
            })?;
            debug!(
                step = %fit.step,
                count = fit.count,
                min_ticks = config.min_ticks,
                max_ticks = config.max_ticks,
                "no step within band; using closest count"
            );
            (fit, true)
        }
    };
    let ticks = materialize(&fit)?;
    Ok(TickSet { ticks, step: fit.step, fallback })
}

/// Feasible fit whose count is closest to `min_ticks`; first minimum wins.
fn closest_fit(interval: &Interval, config: &TickConfig) -> Option<StepFit> {
    let mut best: Option<(usize, StepFit)> = None;
    for fit in feasible_fits(interval) {
        let d = config.distance(fit.count);
        if best.map_or(true, |(bd, _)| d < bd) {
            best = Some((d, fit));
        }
    }
    best.map(|(_, fit)| fit)
}

/// Progression from `lower_tick` through `upper_tick`. The stop is padded by a
/// fraction of a step in index offsets, which stay exact at any magnitude.
fn materialize(fit: &StepFit) -> Result<Vec<f64>> {
    if fit.count > MAX_MATERIALIZED_TICKS {
        return Err(TickError::TooManyTicks { count: fit.count, limit: MAX_MATERIALIZED_TICKS });
    }
    let span = fit.upper_index - fit.lower_index;
    let len = padded_len(0.0, span + STOP_PADDING_FRACTION, 1.0);
    Ok((0..len).map(|i| fit.step.multiple(fit.lower_index + i as f64)).collect())
}
