//! Stable text rendering of a dependency graph
//!
//! Format, one entry per line:
//!
//! ```text
//! # comment lines
//! <package> <version> [<dep>:<kind>:<args>]...
//! ```
//!
//! Entries appear in ascending (package, version) order regardless of how the
//! graph was built, so regenerations with identical parameters are diffable.
//! Edge tokens keep their original sampling order. Consumers treat `#` lines
//! and blank lines as non-data.

use crate::graph::DependencyGraph;

/// Render the graph as newline-terminated UTF-8 text
pub fn to_text(graph: &DependencyGraph) -> String {
    let mut out = String::new();
    out.push_str("# Auto-generated dependency graph\n");
    out.push_str(&format!("# Packages: {}\n", graph.package_count()));
    out.push_str("# Format: package version dep1:constraint dep2:constraint ...\n");
    out.push_str("# Constraints: singleton:X or range:X:Y\n");
    out.push('\n');

    for (key, edges) in graph.iter() {
        out.push_str(&format!("{} {}", key.package, key.version));
        for edge in edges {
            out.push_str(&format!(" {}:{}", edge.target, edge.constraint));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::config::GeneratorConfig;
    use crate::graph::builder::build_graph;
    use crate::graph::{Constraint, DependencyEdge, PackageVersion};

    fn scenario_graph() -> DependencyGraph {
        let config = GeneratorConfig {
            num_packages: 20,
            min_version: 10,
            max_version: 15,
            max_deps: 3,
            seed: 7,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        build_graph(&config, &mut rng)
    }

    #[test]
    fn test_reserializing_is_byte_identical() {
        let graph = scenario_graph();
        assert_eq!(to_text(&graph), to_text(&graph));
    }

    #[test]
    fn test_header_and_termination() {
        let text = to_text(&scenario_graph());
        assert!(text.starts_with("# Auto-generated dependency graph\n"));
        assert!(text.contains("# Packages: 21\n"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_one_data_line_per_entry() {
        let graph = scenario_graph();
        let text = to_text(&graph);
        let data_lines = text
            .lines()
            .filter(|l| !l.starts_with('#') && !l.is_empty())
            .count();
        assert_eq!(data_lines, graph.len());
    }

    #[test]
    fn test_data_lines_are_sorted() {
        let text = to_text(&scenario_graph());
        let keys: Vec<(String, u32)> = text
            .lines()
            .filter(|l| !l.starts_with('#') && !l.is_empty())
            .map(|l| {
                let mut fields = l.split_whitespace();
                let package = fields.next().unwrap().to_string();
                let version = fields.next().unwrap().parse().unwrap();
                (package, version)
            })
            .collect();

        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_edge_tokens_keep_insertion_order() {
        let mut graph = DependencyGraph::new();
        graph.insert(
            PackageVersion::new("pkg-0000", 10),
            vec![
                DependencyEdge {
                    target: "pkg-0002".to_string(),
                    constraint: Constraint::Singleton(10),
                },
                DependencyEdge {
                    target: "pkg-0001".to_string(),
                    constraint: Constraint::Range { lo: 10, hi: 12 },
                },
            ],
        );

        let text = to_text(&graph);
        assert!(text.contains("pkg-0000 10 pkg-0002:singleton:10 pkg-0001:range:10:12\n"));
    }

    #[test]
    fn test_empty_graph_serializes_headers_only() {
        let text = to_text(&DependencyGraph::new());
        assert!(text.contains("# Packages: 0\n"));
        assert!(text.ends_with('\n'));
        assert_eq!(
            text.lines().filter(|l| !l.starts_with('#') && !l.is_empty()).count(),
            0
        );
    }
}
