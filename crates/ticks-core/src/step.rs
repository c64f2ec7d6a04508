// File: crates/ticks-core/src/step.rs
// Summary: The fixed table of candidate tick steps (1, 2, 5 × 10ⁿ).

use std::fmt;

/// Smallest decimal exponent considered.
pub const MIN_EXPONENT: i8 = -3;
/// Largest decimal exponent considered.
pub const MAX_EXPONENT: i8 = 5;
/// Leading digits of a nice step.
pub const MULTIPLIERS: [u8; 3] = [1, 2, 5];

pub const CANDIDATE_COUNT: usize = (MAX_EXPONENT - MIN_EXPONENT + 1) as usize * MULTIPLIERS.len();

/// All candidate steps in ascending order.
pub const CANDIDATE_STEPS: [Step; CANDIDATE_COUNT] = build_candidates();

/// A nice step `multiplier × 10^exponent`.
/// Field order matters: the derived ordering compares the exponent first,
/// which matches numeric order because every multiplier is below 10.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Step {
    exponent: i8,
    multiplier: u8,
}

impl Step {
    pub const fn new(multiplier: u8, exponent: i8) -> Self {
        Self { exponent, multiplier }
    }

    pub const fn multiplier(&self) -> u8 { self.multiplier }
    pub const fn exponent(&self) -> i8 { self.exponent }

    /// Step size as a float.
    pub fn value(&self) -> f64 {
        self.multiple(1.0)
    }

    /// `index × step` for an integer-valued `index`, computed as whole units
    /// scaled by a power of ten so decimal multiples come out as the nearest
    /// double (3 × 0.1 == 0.3). Never returns `-0.0`.
    pub fn multiple(&self, index: f64) -> f64 {
        let units = index * self.multiplier as f64;
        let scale = 10_i64.pow(self.exponent.unsigned_abs() as u32) as f64;
        let v = if self.exponent >= 0 { units * scale } else { units / scale };
        v + 0.0
    }

    /// Number of decimal places needed to print multiples of this step exactly.
    pub fn decimals(&self) -> usize {
        if self.exponent < 0 { self.exponent.unsigned_abs() as usize } else { 0 }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", self.decimals(), self.value())
    }
}

/// The candidate table as a slice.
pub fn candidate_steps() -> &'static [Step] {
    &CANDIDATE_STEPS
}

const fn build_candidates() -> [Step; CANDIDATE_COUNT] {
    let mut out = [Step::new(1, 0); CANDIDATE_COUNT];
    let mut i = 0;
    let mut n = MIN_EXPONENT;
    while n <= MAX_EXPONENT {
        let mut j = 0;
        while j < MULTIPLIERS.len() {
            out[i] = Step::new(MULTIPLIERS[j], n);
            i += 1;
            j += 1;
        }
        n += 1;
    }
    out
}
