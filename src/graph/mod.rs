//! Dependency graph synthesis
//!
//! This module provides the graph data model plus the generation pipeline:
//! layer partitioning, constraint and edge sampling, graph assembly,
//! serialization, and statistics.

pub mod builder;
pub mod constraint;
pub mod layers;
pub mod sampler;
pub mod serialize;
pub mod stats;

pub use builder::{build_graph, ROOT_PACKAGE};
pub use constraint::Constraint;
pub use stats::GraphStats;

use std::collections::BTreeMap;

/// Composite key identifying one version of one package
///
/// Ordering is (package name, numeric version) ascending, which makes
/// `DependencyGraph` iteration order - and therefore serialized output -
/// independent of insertion order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageVersion {
    pub package: String,
    pub version: u32,
}

impl PackageVersion {
    pub fn new(package: impl Into<String>, version: u32) -> Self {
        Self {
            package: package.into(),
            version,
        }
    }
}

/// An edge asserted from one package-version toward a target package family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    /// Target package name
    pub target: String,

    /// Version constraint on the target
    pub constraint: Constraint,
}

/// The assembled graph: every package-version mapped to its dependency edges
///
/// Keys are unique; each edge list preserves sampling order. Includes one
/// synthetic `("root", min_version)` entry as the resolution starting point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    entries: BTreeMap<PackageVersion, Vec<DependencyEdge>>,
}

impl DependencyGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the edge list for a package-version
    pub fn insert(&mut self, key: PackageVersion, edges: Vec<DependencyEdge>) {
        self.entries.insert(key, edges);
    }

    /// Get the edge list for a package-version
    pub fn edges(&self, key: &PackageVersion) -> Option<&[DependencyEdge]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Number of package-version entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the graph has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in ascending (package, version) order
    pub fn iter(&self) -> impl Iterator<Item = (&PackageVersion, &[DependencyEdge])> {
        self.entries.iter().map(|(key, edges)| (key, edges.as_slice()))
    }

    /// Number of distinct package families (root included)
    pub fn package_count(&self) -> usize {
        let mut count = 0;
        let mut last: Option<&str> = None;
        for key in self.entries.keys() {
            if last != Some(key.package.as_str()) {
                count += 1;
                last = Some(key.package.as_str());
            }
        }
        count
    }
}
