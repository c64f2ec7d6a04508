// File: crates/ticks-core/tests/properties.rs
// Purpose: Sweep a grid of intervals and bands, checking selection against a brute-force scan.

use ticks_core::types::MAX_MATERIALIZED_TICKS;
use ticks_core::{evaluate_step, select_ticks, Interval, StepFit, TickConfig, TickError, TickSet, CANDIDATE_STEPS};

// Tiny nonzero bounds sit far below the largest steps; the 1e17 pair sits where
// adjacent doubles are 16 apart.
const BOUNDS: &[f64] = &[
    -1234.5, -100.0, -7.0, -3.7, -0.25, 0.0, 1.1e-4, 1.9e-4, 0.003, 0.1, 1.0, 2.2, 7.0, 9.99, 42.0, 100.0,
    999.0, 12345.0, 1e17, 1e17 + 500.0,
];

fn bands() -> Vec<TickConfig> {
    vec![
        TickConfig::default(),
        TickConfig::new(5, 8).expect("band"),
        TickConfig::new(3, 20).expect("band"),
        TickConfig::new(2, 3).expect("band"),
    ]
}

fn brute_force_fits(interval: &Interval) -> Vec<StepFit> {
    CANDIDATE_STEPS.iter().filter_map(|&s| evaluate_step(s, interval)).collect()
}

/// Brute-force choice: first step in the band, else first closest to `min_ticks`.
fn expected_fit(interval: &Interval, cfg: &TickConfig) -> Option<StepFit> {
    let all = brute_force_fits(interval);
    if let Some(f) = all.iter().find(|f| cfg.contains(f.count)) {
        return Some(*f);
    }
    let best = all.iter().map(|f| f.count.abs_diff(cfg.min_ticks)).min()?;
    all.into_iter().find(|f| f.count.abs_diff(cfg.min_ticks) == best)
}

/// Rounding slack for a tick of magnitude `t`: a few units in the last place.
fn ulps(t: f64) -> f64 {
    4.0 * t.abs() * f64::EPSILON
}

fn for_each_case(mut f: impl FnMut(f64, f64, &TickConfig, TickSet)) {
    for cfg in bands() {
        for &a in BOUNDS {
            for &b in BOUNDS {
                if a == b { continue; }
                let interval = Interval::new(a, b).expect("finite");
                match select_ticks(a, b, &cfg) {
                    Ok(set) => f(a, b, &cfg, set),
                    Err(TickError::NoFeasibleStep { .. }) => {
                        assert!(brute_force_fits(&interval).is_empty(), "({a}, {b}) has feasible steps");
                    }
                    Err(TickError::TooManyTicks { count, .. }) => {
                        let fit = expected_fit(&interval, &cfg).expect("feasible");
                        assert_eq!(fit.count, count, "({a}, {b}) {cfg:?}");
                        assert!(count > MAX_MATERIALIZED_TICKS);
                    }
                    Err(e) => panic!("select_ticks({a}, {b}, {cfg:?}) failed: {e}"),
                }
            }
        }
    }
}

#[test]
fn sweep_exercises_every_outcome() {
    let cfg = TickConfig::default();
    assert!(matches!(select_ticks(1.9e-4, 1.1e-4, &cfg), Err(TickError::NoFeasibleStep { .. })));
    assert!(matches!(select_ticks(1e17, 0.0, &cfg), Err(TickError::TooManyTicks { .. })));
    assert!(select_ticks(1e17 + 500.0, 1e17, &cfg).is_ok());
}

#[test]
fn order_invariance() {
    for_each_case(|a, b, cfg, set| {
        let swapped = select_ticks(b, a, cfg).expect("swapped");
        assert_eq!(set, swapped, "({a}, {b})");
    });
}

#[test]
fn deterministic() {
    for_each_case(|a, b, cfg, set| {
        assert_eq!(set, select_ticks(a, b, cfg).expect("again"));
    });
}

#[test]
fn band_preferred_then_closest_count() {
    for_each_case(|a, b, cfg, set| {
        let interval = Interval::new(a, b).expect("finite");
        let fits = brute_force_fits(&interval);
        assert!(!fits.is_empty());

        let chosen = fits.iter().find(|f| f.step == set.nice_step()).expect("chosen step is feasible");
        assert_eq!(set.len(), chosen.count, "({a}, {b}) {cfg:?}");
        assert_eq!(set.first(), Some(chosen.lower_tick), "({a}, {b}) {cfg:?}");
        assert_eq!(set.last(), Some(chosen.upper_tick), "({a}, {b}) {cfg:?}");
        assert_eq!(Some(*chosen), expected_fit(&interval, cfg));

        if let Some(first_in_band) = fits.iter().find(|f| cfg.contains(f.count)) {
            assert!(!set.used_fallback(), "({a}, {b}) {cfg:?}");
            assert!(cfg.contains(set.len()), "({a}, {b}) {cfg:?}: {} ticks", set.len());
            assert_eq!(set.nice_step(), first_in_band.step);
        } else {
            assert!(set.used_fallback(), "({a}, {b}) {cfg:?}");
            let best = fits.iter().map(|f| f.count.abs_diff(cfg.min_ticks)).min().expect("non-empty");
            assert_eq!(set.len().abs_diff(cfg.min_ticks), best, "({a}, {b}) {cfg:?}");
            let first_best = fits.iter().find(|f| f.count.abs_diff(cfg.min_ticks) == best).expect("exists");
            assert_eq!(set.nice_step(), first_best.step, "ties go to the smaller step");
        }
    });
}

#[test]
fn ticks_cover_range_with_even_spacing() {
    for_each_case(|a, b, _cfg, set| {
        let (lo, hi) = (a.min(b), a.max(b));
        let step = set.step();
        let slack = step / 10.0;
        assert!(!set.is_empty());
        for &t in &set {
            assert!(t >= lo - slack && t <= hi + slack, "tick {t} outside [{lo}, {hi}]");
            let nearest = (t / step).round() * step;
            assert!((t - nearest).abs() <= step * 1e-6 + ulps(t), "tick {t} not a multiple of {step}");
        }
        for w in set.ticks().windows(2) {
            let tol = step * 1e-6 + ulps(w[1]);
            assert!(((w[1] - w[0]) - step).abs() <= tol, "uneven gap {w:?} for step {step}");
        }
        // No room for another tick on either side.
        assert!(set.first().expect("first") - step < lo);
        assert!(set.last().expect("last") + step > hi);
    });
}
