// File: crates/demo/src/main.rs
// Summary: Demo selects nice ticks for an interval from the command line and prints them.

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use ticks_core::{select_ticks, TickConfig, TickSet};

use crate::cli::Cli;

fn main() -> Result<()> {
    logging::init()?;
    let args = Cli::parse();

    let cfg = TickConfig::new(args.min_ticks, args.max_ticks).context("invalid tick band")?;
    let set = select_ticks(args.max_value, args.min_value, &cfg)
        .with_context(|| format!("failed to select ticks for [{}, {}]", args.min_value, args.max_value))?;

    tracing::info!(count = set.len(), fallback = set.used_fallback(), "ticks selected");
    println!("Generated ticks: {}", format_ticks(&set));
    println!("Step used: {}", set.nice_step());
    Ok(())
}

/// Render ticks as `[a, b, c]` with the step's decimal precision.
fn format_ticks(set: &TickSet) -> String {
    let decimals = set.nice_step().decimals();
    let parts: Vec<String> = set.iter().map(|t| format!("{t:.decimals$}")).collect();
    format!("[{}]", parts.join(", "))
}
