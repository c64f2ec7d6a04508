// File: crates/ticks-core/src/error.rs
// Summary: Error type returned by tick selection and its configuration.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TickError {
    /// An interval bound was NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// The tick-count band `[min_ticks, max_ticks)` is empty or starts at zero.
    #[error("invalid tick band [{min_ticks}, {max_ticks}): need 0 < min_ticks < max_ticks")]
    InvalidBand { min_ticks: usize, max_ticks: usize },

    /// No candidate step has a multiple inside the interval.
    #[error("no candidate step fits inside [{min}, {max}]")]
    NoFeasibleStep { min: f64, max: f64 },

    /// The chosen step would produce more ticks than we are willing to allocate.
    #[error("selected step yields {count} ticks, limit is {limit}")]
    TooManyTicks { count: usize, limit: usize },
}

pub type Result<T, E = TickError> = std::result::Result<T, E>;
