//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{generate::GenerateCommand, stats::StatsCommand};
use crate::error::DepgenError;

/// depgen - Dependency Graph Fixture Generator
///
/// Generates acyclic package-dependency graphs with randomized version
/// constraints for stress-testing version resolvers.
#[derive(Parser, Debug)]
#[command(name = "depgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a dependency graph and write it to a file
    Generate(GenerateCommand),

    /// Generate a dependency graph in memory and report statistics only
    Stats(StatsCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // Set up terminal colors
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        // Execute the subcommand
        let result = match self.command {
            Commands::Generate(cmd) => cmd.execute(self.verbose),
            Commands::Stats(cmd) => cmd.execute(self.verbose),
        };

        // Domain errors carry actionable hints; render them instead of the
        // default anyhow chain.
        if let Err(ref err) = result {
            if let Some(depgen_err) = err.downcast_ref::<DepgenError>() {
                depgen_err.display_with_hints();
                std::process::exit(1);
            }
        }

        result
    }
}
