//! The two analysis pipelines as explicit `run_*` entry points.
//!
//! Each run owns everything it computes and returns it whole; printing,
//! charts, and exports happen in the caller.
//!
//! Roster:  load -> normalize -> segment/aggregate
//! Votes:   load -> normalize -> graph -> largest SCC -> centrality

use serde::Serialize;
use tracing::info;

use crate::domain::{RankedNode, RosterConfig, VotesConfig};
use crate::error::AppError;
use crate::io::{Table, load_table};
use crate::network::{
    CentralityScores, EigenvectorConfig, NormalizedVotes, VotingGraph, eigenvector_centrality, normalize_votes,
    out_degree_centrality,
};
use crate::report::format::NetworkStats;
use crate::roster::{NormalizedRoster, RosterSummary, normalize_roster, summarize};

/// All computed outputs of a roster run.
#[derive(Debug, Clone)]
pub struct RosterRun {
    pub roster: NormalizedRoster,
    pub summary: RosterSummary,
}

pub fn run_roster(config: &RosterConfig) -> Result<RosterRun, AppError> {
    let table = load_table(&config.input)?;
    run_roster_with_table(table, config)
}

/// Run the roster pipeline on an already loaded table.
pub fn run_roster_with_table(table: Table, config: &RosterConfig) -> Result<RosterRun, AppError> {
    let roster = normalize_roster(table)?;
    let summary = summarize(&roster.players, config.top_n)?;
    info!(
        total = summary.total,
        international = summary.international,
        domestic = summary.domestic,
        "roster aggregated"
    );
    Ok(RosterRun { roster, summary })
}

/// Graph statistics and rankings of a votes run; this is what gets exported.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkSummary {
    pub rows_read: usize,
    pub rows_retained: usize,
    pub neutral_votes: usize,
    pub nodes: usize,
    pub edges: usize,
    pub largest_scc_nodes: usize,
    pub largest_scc_edges: usize,
    pub top_out_degree: Vec<RankedNode>,
    pub top_eigenvector: Vec<RankedNode>,
}

impl NetworkSummary {
    pub fn stats(&self) -> NetworkStats {
        NetworkStats {
            rows_read: self.rows_read,
            rows_retained: self.rows_retained,
            neutral_votes: self.neutral_votes,
            nodes: self.nodes,
            edges: self.edges,
            largest_scc_nodes: self.largest_scc_nodes,
        }
    }
}

/// All computed outputs of a votes run.
#[derive(Debug, Clone)]
pub struct VotesRun {
    pub votes: NormalizedVotes,
    pub graph: VotingGraph,
    /// Over the full graph.
    pub out_degree: CentralityScores,
    /// Over the largest strongly connected component only.
    pub eigenvector: CentralityScores,
    pub summary: NetworkSummary,
}

pub fn run_votes(config: &VotesConfig) -> Result<VotesRun, AppError> {
    let table = load_table(&config.input)?;
    run_votes_with_table(table, config)
}

/// Run the voting-network pipeline on an already loaded table.
pub fn run_votes_with_table(table: Table, config: &VotesConfig) -> Result<VotesRun, AppError> {
    let votes = normalize_votes(table)?;

    let graph = VotingGraph::from_votes(&votes.votes);
    info!(nodes = graph.node_count(), edges = graph.edge_count(), "voting graph built");

    let scc = graph
        .largest_scc()
        .ok_or_else(|| AppError::new(3, "Voting graph is empty: no support or oppose votes to analyse."))?;
    info!(nodes = scc.node_count(), edges = scc.edge_count(), "largest strongly connected component");

    let out_degree = out_degree_centrality(&graph);
    let eigenvector = eigenvector_centrality(&scc, EigenvectorConfig::default())?;

    let summary = NetworkSummary {
        rows_read: votes.rows_read,
        rows_retained: votes.votes.len(),
        neutral_votes: votes.neutral_count(),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        largest_scc_nodes: scc.node_count(),
        largest_scc_edges: scc.edge_count(),
        top_out_degree: out_degree.top_n(config.top_n),
        top_eigenvector: eigenvector.top_n(config.top_n),
    };

    Ok(VotesRun {
        votes,
        graph,
        out_degree,
        eigenvector,
        summary,
    })
}
