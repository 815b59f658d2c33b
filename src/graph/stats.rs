//! Aggregate statistics over an assembled graph
//!
//! Purely observational: collecting statistics never mutates the graph and
//! has no effect on generation. Averages over an empty graph are reported as
//! explicit `None` rather than dividing by zero.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::{Constraint, DependencyGraph};

/// Summary metrics for a dependency graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    /// Distinct package families, root included
    pub package_count: usize,

    /// Total package-version entries
    pub entry_count: usize,

    /// Total dependency edges across all entries
    pub total_deps: usize,

    /// Mean edges per entry; `None` for an empty graph
    pub avg_deps: Option<f64>,

    /// Fraction of edges carrying a singleton constraint; `None` when there
    /// are no edges
    pub singleton_fraction: Option<f64>,

    /// Edge count to number of entries with that count
    pub distribution: BTreeMap<usize, usize>,
}

impl GraphStats {
    /// Fold the graph into its summary metrics
    pub fn collect(graph: &DependencyGraph) -> Self {
        let mut total_deps = 0;
        let mut singleton_count = 0;
        let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

        for (_, edges) in graph.iter() {
            total_deps += edges.len();
            *distribution.entry(edges.len()).or_insert(0) += 1;
            for edge in edges {
                if matches!(edge.constraint, Constraint::Singleton(_)) {
                    singleton_count += 1;
                }
            }
        }

        let entry_count = graph.len();
        let avg_deps = if entry_count > 0 {
            Some(total_deps as f64 / entry_count as f64)
        } else {
            None
        };
        let singleton_fraction = if total_deps > 0 {
            Some(singleton_count as f64 / total_deps as f64)
        } else {
            None
        };

        Self {
            package_count: graph.package_count(),
            entry_count,
            total_deps,
            avg_deps,
            singleton_fraction,
            distribution,
        }
    }
}
