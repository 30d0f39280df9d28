//! Voting-network pipeline stages: normalize -> graph -> centrality (+ layout
//! for the chart).

pub mod centrality;
pub mod graph;
pub mod layout;
pub mod normalize;

pub use centrality::{CentralityScores, EigenvectorConfig, eigenvector_centrality, out_degree_centrality};
pub use graph::VotingGraph;
pub use layout::{SpringLayoutConfig, spring_layout};
pub use normalize::{NormalizedVotes, normalize_votes, parse_vote};
