// File: crates/demo/src/cli.rs
// Summary: Command-line arguments for the tick demo.

use clap::Parser;
use ticks_core::types::{DEFAULT_MAX_TICKS, DEFAULT_MIN_TICKS};

#[derive(Parser, Debug)]
#[command(version, about = "Print the nice ticks chosen for an interval")]
pub struct Cli {
    /// Upper bound of the interval (bounds may be given in either order)
    #[arg(value_name = "FLOAT", default_value_t = 0.0, allow_negative_numbers = true)]
    pub max_value: f64,

    /// Lower bound of the interval
    #[arg(value_name = "FLOAT", default_value_t = 7.0, allow_negative_numbers = true)]
    pub min_value: f64,

    /// Smallest acceptable tick count (inclusive)
    #[arg(long, value_name = "N", env = "TICKS_MIN_TICKS", default_value_t = DEFAULT_MIN_TICKS)]
    pub min_ticks: usize,

    /// Largest acceptable tick count (exclusive)
    #[arg(long, value_name = "N", env = "TICKS_MAX_TICKS", default_value_t = DEFAULT_MAX_TICKS)]
    pub max_ticks: usize,
}
