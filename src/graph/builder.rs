//! Graph assembly
//!
//! Folds the synthetic root entry and every sampled (package, version) edge
//! list into one `DependencyGraph`. The single random stream is consumed in a
//! fixed order - root targets first, then packages in index order, versions
//! ascending - so a seed fully determines the result.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::GeneratorConfig;
use crate::graph::constraint::{Constraint, ConstraintSampler};
use crate::graph::layers::Layers;
use crate::graph::sampler::sample_edges;
use crate::graph::{DependencyEdge, DependencyGraph, PackageVersion};

/// Name of the synthetic top-level entry
pub const ROOT_PACKAGE: &str = "root";

/// Upper bound on root's direct targets
const MAX_ROOT_DEPS: usize = 10;

/// Generate the package universe names, `pkg-0000` through `pkg-NNNN`
pub fn package_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("pkg-{:04}", i)).collect()
}

/// Build the full dependency graph for a validated configuration
///
/// The result has exactly `1 + num_packages * (max_version - min_version)`
/// entries: the root plus one entry per package per version.
pub fn build_graph<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> DependencyGraph {
    let packages = package_names(config.num_packages);
    let layers = Layers::build(&packages);
    let constraints = ConstraintSampler::new(config.max_version);

    let mut graph = DependencyGraph::new();
    graph.insert(
        PackageVersion::new(ROOT_PACKAGE, config.min_version),
        root_edges(rng, &layers, config),
    );

    // Layer-by-layer iteration visits packages in original index order, since
    // the partition preserves it.
    for layer_idx in 0..layers.count() {
        let potential = layers.potential_targets(layer_idx);

        for package in layers.layer(layer_idx) {
            for version in config.versions() {
                // Leaves skip sampling entirely, consuming no randomness.
                let edges = if potential.is_empty() {
                    Vec::new()
                } else {
                    sample_edges(rng, &potential, version, config.max_deps, &constraints)
                };
                graph.insert(PackageVersion::new(package.clone(), version), edges);
            }
        }
    }

    graph
}

/// Root reaches up to ten layer-0 packages, each with a permissive constraint
/// spanning the whole version window. Root exists for universe coverage, not
/// conflict injection.
fn root_edges<R: Rng>(
    rng: &mut R,
    layers: &Layers,
    config: &GeneratorConfig,
) -> Vec<DependencyEdge> {
    let first = layers.first();
    first
        .choose_multiple(rng, MAX_ROOT_DEPS.min(first.len()))
        .map(|target| DependencyEdge {
            target: target.clone(),
            constraint: Constraint::Range {
                lo: config.min_version,
                hi: config.max_version,
            },
        })
        .collect()
}
