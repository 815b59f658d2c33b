//! depgen - Synthetic dependency-graph fixtures for resolver stress tests
//!
//! Generates large, acyclic package-dependency graphs with randomized version
//! constraints and writes them as a line-oriented text artifact that a
//! resolver test harness can load. Output is fully deterministic for a given
//! seed.

mod cli;
mod commands;
mod config;
mod error;
mod graph;
mod utils;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
