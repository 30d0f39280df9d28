//! Out-degree and eigenvector centrality.
//!
//! # Out-degree
//!
//! ```text
//! C_out(v) = out_degree(v) / (n - 1)
//! ```
//!
//! A graph with a single node scores that node 1.0.
//!
//! # Eigenvector
//!
//! Power iteration on `(A + I)` where a node accumulates the scores of the
//! nodes pointing at it:
//!
//! ```text
//! x'_v = x_v + Σ_{u→v} x_u,   x' = x' / ||x'||₂
//! ```
//!
//! Start vector is uniform `1/n`; iteration stops once the L1 change drops
//! below `n × tolerance`. Edge signs are ignored. The identity shift keeps
//! periodic (e.g. bipartite) structures from oscillating, but a slow spectral
//! gap can still exhaust the iteration cap, which is reported as an error.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::visit::EdgeRef;
use tracing::debug;

use crate::domain::RankedNode;
use crate::error::AppError;
use crate::network::graph::VotingGraph;

/// Scores keyed by node id, iterated in graph node order.
#[derive(Debug, Clone, Default)]
pub struct CentralityScores {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl CentralityScores {
    pub fn from_entries(entries: Vec<(String, f64)>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (id, _))| (id.clone(), i))
            .collect();
        Self { entries, index }
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.index.get(id).map(|&i| self.entries[i].1)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(id, s)| (id.as_str(), *s))
    }

    /// Highest `n` scores, descending. Ties keep node order.
    pub fn top_n(&self, n: usize) -> Vec<RankedNode> {
        let mut sorted: Vec<&(String, f64)> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        sorted
            .into_iter()
            .take(n)
            .map(|(id, score)| RankedNode {
                id: id.clone(),
                score: *score,
            })
            .collect()
    }
}

/// Out-degree centrality over every node of `graph`.
pub fn out_degree_centrality(graph: &VotingGraph) -> CentralityScores {
    let g = graph.as_petgraph();
    let n = g.node_count();
    if n == 1 {
        return CentralityScores::from_entries(g.node_weights().map(|id| (id.clone(), 1.0)).collect());
    }

    let norm = (n.max(2) - 1) as f64;
    let entries = g
        .node_indices()
        .map(|idx| {
            let out = g.edges_directed(idx, Direction::Outgoing).count();
            (g[idx].clone(), out as f64 / norm)
        })
        .collect();
    CentralityScores::from_entries(entries)
}

/// Configuration for eigenvector centrality.
#[derive(Debug, Clone, Copy)]
pub struct EigenvectorConfig {
    /// Maximum iterations before giving up.
    pub max_iterations: usize,
    /// Per-node convergence tolerance.
    pub tolerance: f64,
}

impl Default for EigenvectorConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

/// Eigenvector centrality over every node of `graph`.
pub fn eigenvector_centrality(
    graph: &VotingGraph,
    config: EigenvectorConfig,
) -> Result<CentralityScores, AppError> {
    let g = graph.as_petgraph();
    let n = g.node_count();
    if n == 0 {
        return Err(AppError::new(3, "Eigenvector centrality is undefined for an empty graph."));
    }

    let mut x = vec![1.0 / n as f64; n];
    let mut next = vec![0.0; n];

    for iteration in 1..=config.max_iterations {
        next.copy_from_slice(&x);
        for e in g.edge_references() {
            next[e.target().index()] += x[e.source().index()];
        }

        let norm = next.iter().map(|v| v * v).sum::<f64>().sqrt();
        let norm = if norm > 0.0 { norm } else { 1.0 };
        for v in &mut next {
            *v /= norm;
        }

        let change: f64 = next.iter().zip(&x).map(|(a, b)| (a - b).abs()).sum();
        std::mem::swap(&mut x, &mut next);

        if change < n as f64 * config.tolerance {
            debug!(iterations = iteration, nodes = n, "eigenvector centrality converged");
            let entries = g.node_indices().map(|idx| (g[idx].clone(), x[idx.index()])).collect();
            return Ok(CentralityScores::from_entries(entries));
        }
    }

    Err(AppError::new(
        4,
        format!(
            "Eigenvector centrality failed to converge within {} iterations.",
            config.max_iterations
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sign;

    fn graph(edges: &[(&str, &str)]) -> VotingGraph {
        let mut g = VotingGraph::new();
        for (a, b) in edges {
            g.add_vote(a, b, Sign::Support);
        }
        g
    }

    #[test]
    fn out_degree_is_normalized_by_n_minus_one() {
        let g = graph(&[("A", "B"), ("A", "C"), ("B", "C")]);
        let c = out_degree_centrality(&g);
        assert!((c.get("A").unwrap() - 1.0).abs() < 1e-12);
        assert!((c.get("B").unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn node_without_outgoing_edges_scores_zero() {
        let g = graph(&[("A", "B")]);
        let c = out_degree_centrality(&g);
        assert_eq!(c.get("B"), Some(0.0));
    }

    #[test]
    fn single_node_graph_scores_one() {
        let g = graph(&[("A", "A")]);
        let c = out_degree_centrality(&g);
        assert_eq!(c.get("A"), Some(1.0));
    }

    #[test]
    fn eigenvector_symmetric_cycle_is_uniform() {
        let g = graph(&[("A", "B"), ("B", "C"), ("C", "A")]);
        let c = eigenvector_centrality(&g, EigenvectorConfig::default()).unwrap();
        let a = c.get("A").unwrap();
        for id in ["B", "C"] {
            assert!((a - c.get(id).unwrap()).abs() < 1e-6);
        }
        let norm: f64 = c.iter().map(|(_, s)| s * s).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9, "scores should be L2 normalized: {norm}");
    }

    #[test]
    fn eigenvector_favours_nodes_pointed_at_by_many() {
        let g = graph(&[
            ("A", "Hub"),
            ("Hub", "A"),
            ("B", "Hub"),
            ("Hub", "B"),
            ("C", "Hub"),
            ("Hub", "C"),
        ]);
        let c = eigenvector_centrality(&g, EigenvectorConfig::default()).unwrap();
        assert!(c.get("Hub").unwrap() > c.get("A").unwrap());
    }

    #[test]
    fn eigenvector_on_scc_only_scores_scc_members() {
        let g = graph(&[("A", "B"), ("B", "A"), ("B", "C"), ("D", "A")]);
        let scc = g.largest_scc().unwrap();
        let c = eigenvector_centrality(&scc, EigenvectorConfig::default()).unwrap();
        assert_eq!(c.iter().count(), 2);
        assert!(c.contains("A") && c.contains("B"));
        assert!(!c.contains("C") && !c.contains("D"));
    }

    #[test]
    fn eigenvector_reports_non_convergence() {
        let g = graph(&[("A", "B"), ("B", "C"), ("C", "A"), ("A", "C")]);
        let config = EigenvectorConfig {
            max_iterations: 1,
            tolerance: 1e-12,
        };
        let err = eigenvector_centrality(&g, config).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn eigenvector_on_empty_graph_fails() {
        let err = eigenvector_centrality(&VotingGraph::new(), EigenvectorConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn top_n_breaks_ties_by_node_order() {
        let scores = CentralityScores::from_entries(vec![
            ("x".into(), 0.2),
            ("y".into(), 0.5),
            ("z".into(), 0.2),
            ("w".into(), 0.9),
        ]);
        let ids: Vec<_> = scores.top_n(3).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["w", "y", "x"]);
    }
}
