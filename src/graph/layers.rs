//! Layer partitioning for acyclicity
//!
//! Packages are split into an ordered sequence of disjoint layers. An edge
//! may only point from a shallower layer to a strictly deeper one, which is
//! the sole mechanism guaranteeing the generated graph is a DAG. Building
//! layers consumes no randomness.

use std::collections::HashMap;

/// Ordered partition of the package universe
#[derive(Debug, Clone)]
pub struct Layers {
    layers: Vec<Vec<String>>,
    index: HashMap<String, usize>,
}

impl Layers {
    /// Partition `packages` into `max(5, floor(sqrt(N)))` layers
    ///
    /// The first `count - 1` layers each take `floor(N / count)` packages in
    /// original index order; the final layer absorbs the remainder so no
    /// package is lost to integer division.
    pub fn build(packages: &[String]) -> Self {
        let count = layer_count(packages.len());
        let base = packages.len() / count;

        let mut layers = Vec::with_capacity(count);
        let mut idx = 0;
        for layer_idx in 0..count {
            if layer_idx == count - 1 {
                layers.push(packages[idx..].to_vec());
            } else {
                layers.push(packages[idx..idx + base].to_vec());
                idx += base;
            }
        }

        let mut index = HashMap::with_capacity(packages.len());
        for (layer_idx, layer) in layers.iter().enumerate() {
            for package in layer {
                index.insert(package.clone(), layer_idx);
            }
        }

        Self { layers, index }
    }

    /// Number of layers
    pub fn count(&self) -> usize {
        self.layers.len()
    }

    /// The packages of one layer, in original index order
    pub fn layer(&self, layer_idx: usize) -> &[String] {
        &self.layers[layer_idx]
    }

    /// The shallowest layer (root's candidate targets)
    pub fn first(&self) -> &[String] {
        &self.layers[0]
    }

    /// Layer index of a package, if it exists in the universe
    pub fn layer_of(&self, package: &str) -> Option<usize> {
        self.index.get(package).copied()
    }

    /// Every package a member of `layer_idx` may depend on: the concatenation
    /// of all strictly deeper layers, preserving layer and index order.
    ///
    /// Empty for the deepest layer, whose packages are structural leaves.
    pub fn potential_targets(&self, layer_idx: usize) -> Vec<&str> {
        self.layers[layer_idx + 1..]
            .iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

fn layer_count(num_packages: usize) -> usize {
    ((num_packages as f64).sqrt() as usize).max(5)
}
