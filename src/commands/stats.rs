//! Stats command - Report graph statistics without writing an artifact
//!
//! Usage:
//!   depgen stats -n 5000            # summary for a 5000-package universe
//!   depgen stats --format json      # machine-readable report

use anyhow::Result;
use clap::{Args, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::graph::{build_graph, GraphStats};
use crate::utils::terminal;

use super::generate::GraphArgs;

/// Output format for the statistics report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable summary (default)
    #[default]
    Text,
    /// JSON report
    Json,
}

/// Generate a graph in memory and report statistics only
#[derive(Args, Debug)]
pub struct StatsCommand {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Report format: text, json
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl StatsCommand {
    /// Execute the stats command
    pub fn execute(self, _verbose: bool) -> Result<()> {
        let config = self.graph.to_config()?;

        let spinner = terminal::create_spinner(&format!(
            "Generating dependency graph with {} packages x {} versions...",
            config.num_packages,
            config.version_count()
        ));
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let graph = build_graph(&config, &mut rng);
        spinner.finish_and_clear();

        let stats = GraphStats::collect(&graph);
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
            OutputFormat::Text => print_summary(&stats),
        }

        Ok(())
    }
}

/// Print the human-readable statistics summary
pub fn print_summary(stats: &GraphStats) {
    println!("{}", "=".repeat(80));
    println!("Dependency Graph Statistics");
    println!("{}", "=".repeat(80));

    println!("\nTotal packages: {} (including root)", stats.package_count);
    println!("Total package-versions: {}", stats.entry_count);
    println!("Total dependencies: {}", stats.total_deps);

    match stats.avg_deps {
        Some(avg) => println!("Average dependencies per version: {:.2}", avg),
        None => println!("Average dependencies per version: undefined (empty graph)"),
    }
    match stats.singleton_fraction {
        Some(fraction) => println!("Singleton constraints: {:.1}%", fraction * 100.0),
        None => println!("Singleton constraints: undefined (no dependencies)"),
    }

    println!("\nDependency distribution:");
    for (deps, versions) in &stats.distribution {
        println!("  {} deps: {} versions", deps, versions);
    }
}
