//! Per-version dependency edge sampling
//!
//! Every version of a package draws its own independent edge set: a uniform
//! dependency count, then that many distinct targets from the package's
//! potential-target pool, each with a constraint anchored at the current
//! version. No correlation is kept across adjacent versions.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::graph::constraint::ConstraintSampler;
use crate::graph::DependencyEdge;

/// Sample the edge list for one package-version
///
/// Draws `num_deps` uniformly from `[0, min(max_deps, |potential|)]`, then
/// that many targets without replacement. The caller must skip packages with
/// an empty pool entirely so leaves consume no randomness.
pub fn sample_edges<R: Rng>(
    rng: &mut R,
    potential: &[&str],
    anchor: u32,
    max_deps: usize,
    constraints: &ConstraintSampler,
) -> Vec<DependencyEdge> {
    let cap = max_deps.min(potential.len());
    let num_deps = rng.gen_range(0..=cap);
    if num_deps == 0 {
        return Vec::new();
    }

    potential
        .choose_multiple(rng, num_deps)
        .map(|target| DependencyEdge {
            target: (*target).to_string(),
            constraint: constraints.sample(rng, anchor),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn pool() -> Vec<String> {
        (0..20).map(|i| format!("pkg-{:04}", i)).collect()
    }

    #[test]
    fn test_edge_count_within_bounds() {
        let pool = pool();
        let potential: Vec<&str> = pool.iter().map(String::as_str).collect();
        let constraints = ConstraintSampler::new(30);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for version in 10..30 {
            let edges = sample_edges(&mut rng, &potential, version, 5, &constraints);
            assert!(edges.len() <= 5);
        }
    }

    #[test]
    fn test_targets_are_distinct_and_from_pool() {
        let pool = pool();
        let potential: Vec<&str> = pool.iter().map(String::as_str).collect();
        let constraints = ConstraintSampler::new(30);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for version in 10..30 {
            let edges = sample_edges(&mut rng, &potential, version, 8, &constraints);
            let targets: HashSet<_> = edges.iter().map(|e| e.target.as_str()).collect();
            assert_eq!(targets.len(), edges.len(), "duplicate target sampled");
            for target in targets {
                assert!(pool.iter().any(|p| p == target));
            }
        }
    }

    #[test]
    fn test_small_pool_caps_edge_count() {
        let pool: Vec<String> = vec!["pkg-0000".to_string(), "pkg-0001".to_string()];
        let potential: Vec<&str> = pool.iter().map(String::as_str).collect();
        let constraints = ConstraintSampler::new(30);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for version in 10..30 {
            let edges = sample_edges(&mut rng, &potential, version, 10, &constraints);
            assert!(edges.len() <= 2);
        }
    }

    #[test]
    fn test_zero_max_deps_yields_no_edges() {
        let pool = pool();
        let potential: Vec<&str> = pool.iter().map(String::as_str).collect();
        let constraints = ConstraintSampler::new(30);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let edges = sample_edges(&mut rng, &potential, 10, 0, &constraints);
        assert!(edges.is_empty());
    }

    #[test]
    fn test_constraints_are_anchored_at_version() {
        let pool = pool();
        let potential: Vec<&str> = pool.iter().map(String::as_str).collect();
        let constraints = ConstraintSampler::new(30);
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        for version in 10..30 {
            for edge in sample_edges(&mut rng, &potential, version, 5, &constraints) {
                assert!(edge.constraint.matches(version));
            }
        }
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let pool = pool();
        let potential: Vec<&str> = pool.iter().map(String::as_str).collect();
        let constraints = ConstraintSampler::new(30);

        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        for version in 10..30 {
            assert_eq!(
                sample_edges(&mut a, &potential, version, 5, &constraints),
                sample_edges(&mut b, &potential, version, 5, &constraints)
            );
        }
    }
}
