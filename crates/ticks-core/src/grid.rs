// File: crates/ticks-core/src/grid.rs
// Summary: Progression helpers for tick layout (tolerant rounding, padded point count).

use std::cmp::Ordering;

use crate::step::Step;
use crate::types::SNAP_TOLERANCE;

/// Index of `value` in units of `step`, snapped to the nearest integer when
/// that is only float drift: the quotient must be within `SNAP_TOLERANCE` of
/// the integer and the snapped multiple within `SNAP_TOLERANCE` of `value`
/// relative to its magnitude. A small nonzero value never snaps to index 0.
#[inline]
pub fn snap(value: f64, step: Step) -> f64 {
    let q = value / step.value();
    let r = q.round();
    let close_index = (q - r).abs() <= SNAP_TOLERANCE;
    let close_value = (step.multiple(r) - value).abs() <= SNAP_TOLERANCE * value.abs();
    if close_index && close_value { r } else { q }
}

/// Smallest index `k` with `k × step >= value`, ignoring drift (e.g. 0.7 / 0.1).
#[inline]
pub fn snapped_ceil(value: f64, step: Step) -> f64 {
    snap(value, step).ceil()
}

/// Largest index `k` with `k × step <= value`, ignoring drift (e.g. 0.6 / 0.2).
#[inline]
pub fn snapped_floor(value: f64, step: Step) -> f64 {
    snap(value, step).floor()
}

/// Number of points in `start, start + step, ...` that stay strictly below `stop`.
/// Returns 0 when `stop <= start`, `step <= 0` or either comparison involves NaN.
pub fn padded_len(start: f64, stop: f64, step: f64) -> usize {
    let ascending = stop.partial_cmp(&start) == Some(Ordering::Greater);
    let positive = step.partial_cmp(&0.0) == Some(Ordering::Greater);
    if !ascending || !positive { return 0; }
    ((stop - start) / step).ceil() as usize
}
