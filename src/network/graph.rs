//! Signed voting graph backed by petgraph.
//!
//! Nodes are voter/candidate identifiers in first-appearance order; there is at
//! most one edge per ordered pair and a repeated vote overwrites the sign.

use std::collections::{HashMap, HashSet};

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::domain::{Sign, VoteRecord};

#[derive(Debug, Clone, Default)]
pub struct VotingGraph {
    graph: DiGraph<String, Sign>,
    index: HashMap<String, NodeIndex>,
}

impl VotingGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from cleaned votes. Neutral votes add neither edges nor nodes.
    pub fn from_votes(votes: &[VoteRecord]) -> Self {
        let mut g = Self::new();
        for v in votes {
            if let Some(sign) = v.vote.sign() {
                g.add_vote(&v.source, &v.target, sign);
            }
        }
        g
    }

    /// Insert `source -> target`, replacing the sign if the edge exists.
    pub fn add_vote(&mut self, source: &str, target: &str, sign: Sign) {
        let a = self.node(source);
        let b = self.node(target);
        self.graph.update_edge(a, b, sign);
    }

    fn node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(id.to_string());
        self.index.insert(id.to_string(), idx);
        idx
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Node identifiers in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_indices().map(|idx| self.graph[idx].as_str())
    }

    /// Position of `id` in [`node_ids`](Self::node_ids) order.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).map(|idx| idx.index())
    }

    pub fn sign(&self, source: &str, target: &str) -> Option<Sign> {
        let a = *self.index.get(source)?;
        let b = *self.index.get(target)?;
        let edge = self.graph.find_edge(a, b)?;
        Some(self.graph[edge])
    }

    /// Edges as `(source position, target position, sign)`, in edge order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Sign)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), *e.weight()))
    }

    /// Underlying petgraph graph, for algorithms that walk it directly.
    pub fn as_petgraph(&self) -> &DiGraph<String, Sign> {
        &self.graph
    }

    /// Subgraph induced by the largest strongly connected component.
    ///
    /// Among equally large components the first one discovered wins. Returns
    /// `None` for an empty graph.
    pub fn largest_scc(&self) -> Option<VotingGraph> {
        let mut best: Option<Vec<NodeIndex>> = None;
        for component in tarjan_scc(&self.graph) {
            if best.as_ref().is_none_or(|b| component.len() > b.len()) {
                best = Some(component);
            }
        }
        let members: HashSet<NodeIndex> = best?.into_iter().collect();
        Some(self.induced_by(|idx| members.contains(&idx)))
    }

    /// Subgraph induced by `ids`, keeping this graph's node and edge order.
    /// Identifiers not in the graph are ignored.
    pub fn induced_subgraph<'a, I>(&self, ids: I) -> VotingGraph
    where
        I: IntoIterator<Item = &'a str>,
    {
        let members: HashSet<NodeIndex> = ids
            .into_iter()
            .filter_map(|id| self.index.get(id).copied())
            .collect();
        self.induced_by(|idx| members.contains(&idx))
    }

    fn induced_by<F>(&self, keep: F) -> VotingGraph
    where
        F: Fn(NodeIndex) -> bool,
    {
        let mut out = VotingGraph::new();
        for idx in self.graph.node_indices().filter(|&idx| keep(idx)) {
            out.node(&self.graph[idx]);
        }
        for e in self.graph.edge_references() {
            if keep(e.source()) && keep(e.target()) {
                out.add_vote(&self.graph[e.source()], &self.graph[e.target()], *e.weight());
            }
        }
        out
    }
}
