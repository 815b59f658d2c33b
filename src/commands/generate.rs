//! Generate command - Produce a dependency graph artifact
//!
//! Usage:
//!   depgen generate                         # 1000 packages to deps.txt
//!   depgen generate -n 5000 -o large.txt    # bigger universe
//!   depgen generate --seed 7                # reproducible variant

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::GeneratorConfig;
use crate::error::DepgenError;
use crate::graph::{build_graph, serialize, GraphStats};
use crate::utils::terminal;

use super::stats::print_summary;

/// Graph-shape options shared by the generate and stats commands
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Number of packages to generate
    #[arg(short = 'n', long, default_value_t = 1000)]
    pub num_packages: usize,

    /// Minimum version number (inclusive)
    #[arg(long, default_value_t = 10)]
    pub min_version: u32,

    /// Maximum version number (exclusive)
    #[arg(long, default_value_t = 30)]
    pub max_version: u32,

    /// Maximum dependencies per package version
    #[arg(long, default_value_t = 5)]
    pub max_deps: usize,

    /// Random seed; identical seeds reproduce identical graphs
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

impl GraphArgs {
    /// Convert the CLI flags into a validated generator configuration
    pub fn to_config(&self) -> Result<GeneratorConfig, DepgenError> {
        let config = GeneratorConfig {
            num_packages: self.num_packages,
            min_version: self.min_version,
            max_version: self.max_version,
            max_deps: self.max_deps,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Generate a dependency graph and write it to a file
#[derive(Args, Debug)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Output file path
    #[arg(short, long, default_value = "deps.txt")]
    pub output: PathBuf,
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn execute(self, verbose: bool) -> Result<()> {
        let config = self.graph.to_config()?;

        if config.max_deps == 0 {
            terminal::print_warning("max-deps is 0; only the root entry will carry edges");
        }

        let spinner = terminal::create_spinner(&format!(
            "Generating dependency graph with {} packages...",
            config.num_packages
        ));
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let graph = build_graph(&config, &mut rng);
        spinner.finish_and_clear();

        let stats = GraphStats::collect(&graph);
        print_summary(&stats);

        fs::write(&self.output, serialize::to_text(&graph)).map_err(|source| {
            DepgenError::Output {
                path: self.output.clone(),
                source,
            }
        })?;

        println!();
        terminal::print_success(&format!(
            "dependency graph written to {}",
            self.output.display()
        ));

        if verbose {
            terminal::print_info(&format!(
                "reproduce with: depgen generate -n {} --min-version {} --max-version {} --max-deps {} --seed {}",
                config.num_packages,
                config.min_version,
                config.max_version,
                config.max_deps,
                config.seed
            ));
        }

        Ok(())
    }
}
