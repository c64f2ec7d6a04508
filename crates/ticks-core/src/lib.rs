// File: crates/ticks-core/src/lib.rs
// Summary: Core library entry point; exports the nice tick selector and its supporting types.

pub mod axis;
pub mod error;
pub mod grid;
pub mod step;
pub mod ticks;
pub mod types;

pub use axis::Axis;
pub use error::TickError;
pub use step::{candidate_steps, Step, CANDIDATE_STEPS};
pub use ticks::{evaluate_step, feasible_fits, select_in, select_ticks, select_ticks_default, StepFit, TickSet};
pub use types::{Interval, TickConfig};
