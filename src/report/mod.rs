//! Reporting: chart descriptions for both pipelines.
//!
//! Text output lives in [`format`]; this module turns computed summaries
//! into [`Chart`] values that the SVG writer and the terminal viewer draw.

pub mod format;

use crate::domain::CategoryCount;
use crate::network::{CentralityScores, SpringLayoutConfig, VotingGraph, spring_layout};
use crate::plot::palette::{BAR_BLUE, BAR_GREEN, LIGHT_CORAL, POSITION_CYCLE, SKY_BLUE};
use crate::plot::{Bar, BarChart, Chart, NetworkChart, NetworkEdge, NetworkNode, Orientation, PieChart, PieSlice};
use crate::roster::RosterSummary;

pub const PIE_TITLE: &str = "Distribution of International vs. Domestic Players in EPL (2018-19)";
pub const NATIONALITY_TITLE: &str = "Top 10 Most Common Nationalities in EPL (2018-19)";
pub const CLUB_TITLE: &str = "Top 10 EPL Clubs with Most International Players (2018-19)";
pub const POSITION_TITLE: &str = "Number of International Players per Position in EPL (2018-19)";
pub const NETWORK_TITLE: &str = "Wikipedia RfA Network (Top 20 Most Influential Voters)";
pub const COLORBAR_LABEL: &str = "Eigenvector Centrality (Voter Influence)";

/// Marker area per unit of out-degree centrality.
const NODE_SIZE_FACTOR: f64 = 1000.0;

fn bars(counts: &[CategoryCount]) -> Vec<Bar> {
    counts
        .iter()
        .map(|c| Bar {
            label: c.label.clone(),
            value: u32::try_from(c.count).unwrap_or(u32::MAX),
        })
        .collect()
}

/// The four roster charts, in display order.
pub fn roster_charts(summary: &RosterSummary) -> Vec<Chart> {
    let pie = PieChart {
        title: PIE_TITLE.to_string(),
        file_stem: "international_vs_domestic".to_string(),
        size: (700, 700),
        slices: vec![
            PieSlice {
                label: "International Players".to_string(),
                value: summary.international as u64,
                color: SKY_BLUE,
            },
            PieSlice {
                label: "Domestic Players".to_string(),
                value: summary.domestic as u64,
                color: LIGHT_CORAL,
            },
        ],
        start_angle: 140.0,
    };

    let nationalities = BarChart {
        title: NATIONALITY_TITLE.to_string(),
        file_stem: "top_nationalities".to_string(),
        size: (1000, 500),
        category_desc: "Nationality".to_string(),
        value_desc: "Number of Players".to_string(),
        bars: bars(&summary.top_nationalities),
        colors: vec![BAR_BLUE],
        orientation: Orientation::Vertical,
    };

    let clubs = BarChart {
        title: CLUB_TITLE.to_string(),
        file_stem: "top_clubs_international".to_string(),
        size: (1000, 500),
        category_desc: "Club".to_string(),
        value_desc: "Number of International Players".to_string(),
        bars: bars(&summary.top_clubs),
        colors: vec![BAR_GREEN],
        orientation: Orientation::Horizontal,
    };

    let positions = BarChart {
        title: POSITION_TITLE.to_string(),
        file_stem: "international_by_position".to_string(),
        size: (800, 500),
        category_desc: "Position".to_string(),
        value_desc: "Number of International Players".to_string(),
        bars: bars(&summary.positions),
        colors: POSITION_CYCLE.to_vec(),
        orientation: Orientation::Vertical,
    };

    vec![
        Chart::Pie(pie),
        Chart::Bar(nationalities),
        Chart::Bar(clubs),
        Chart::Bar(positions),
    ]
}

/// Network chart of the `top_n` most influential voters.
///
/// Nodes are the top eigenvector scorers, drawn as the subgraph they induce
/// in the full voting graph; colour follows eigenvector score and marker
/// area follows out-degree centrality.
pub fn network_chart(
    graph: &VotingGraph,
    out_degree: &CentralityScores,
    eigenvector: &CentralityScores,
    top_n: usize,
    seed: u64,
) -> Chart {
    let top = eigenvector.top_n(top_n);
    let subgraph = graph.induced_subgraph(top.iter().map(|r| r.id.as_str()));

    let layout = SpringLayoutConfig {
        seed,
        ..SpringLayoutConfig::default()
    };
    let positions = spring_layout(&subgraph, &layout);

    let nodes = subgraph
        .node_ids()
        .zip(positions)
        .map(|(id, position)| NetworkNode {
            label: id.to_string(),
            position,
            color_value: eigenvector.get(id).unwrap_or(0.0),
            size: out_degree.get(id).unwrap_or(0.0) * NODE_SIZE_FACTOR,
        })
        .collect();
    let edges = subgraph
        .edges()
        .map(|(from, to, sign)| NetworkEdge { from, to, sign })
        .collect();

    Chart::Network(NetworkChart {
        title: NETWORK_TITLE.to_string(),
        file_stem: "rfa_network".to_string(),
        size: (1500, 1000),
        nodes,
        edges,
        colorbar_label: COLORBAR_LABEL.to_string(),
    })
}
