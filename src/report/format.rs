//! Text output for both pipelines.
//!
//! Everything printed on stdout is built here, so the pipeline code stays
//! free of formatting and the exact lines can be tested.

use crate::domain::{CategoryCount, RankedNode};
use crate::roster::RosterSummary;

pub const OUT_DEGREE_TITLE: &str = "Most Active Voters (Out-Degree)";
pub const EIGENVECTOR_TITLE: &str = "Most Influential Voters (Eigenvector)";

/// Input and graph statistics for the network report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkStats {
    pub rows_read: usize,
    pub rows_retained: usize,
    pub neutral_votes: usize,
    pub nodes: usize,
    pub edges: usize,
    pub largest_scc_nodes: usize,
}

/// Roster run summary: input counts, the international share line, and the
/// three frequency tables.
pub fn format_roster_summary(rows_read: usize, dropped_missing_name: usize, summary: &RosterSummary) -> String {
    let mut out = String::new();

    out.push_str("=== EPL 2018-19 roster ===\n");
    out.push_str(&format!(
        "Rows: read={rows_read} | dropped (missing name)={dropped_missing_name}\n"
    ));
    out.push_str(&format!(
        "Players: total={} | international={} | domestic={}\n",
        summary.total, summary.international, summary.domestic
    ));
    out.push_str(&format!(
        "International Players: {} ({:.2}%)\n",
        summary.international, summary.percentage_international
    ));

    out.push_str("\nTop nationalities (international players):\n");
    out.push_str(&format_counts("Nationality", &summary.top_nationalities));

    out.push_str("\nTop clubs by international players:\n");
    out.push_str(&format_counts("Club", &summary.top_clubs));

    out.push_str("\nInternational players by position:\n");
    out.push_str(&format_counts("Position", &summary.positions));

    out
}

/// Network run summary: input and graph statistics.
pub fn format_network_summary(stats: &NetworkStats) -> String {
    let mut out = String::new();
    out.push_str("=== Wikipedia RfA voting network ===\n");
    out.push_str(&format!(
        "Rows: read={} | retained={} | neutral (no edge)={}\n",
        stats.rows_read, stats.rows_retained, stats.neutral_votes
    ));
    out.push_str(&format!("Graph: nodes={} | edges={}\n", stats.nodes, stats.edges));
    out.push_str(&format!("Largest SCC: nodes={}\n", stats.largest_scc_nodes));
    out
}

/// Ranking block: a blank line, `Top <n> <title>:`, then one line per voter.
///
/// `top_n` is the requested size and appears in the header even when fewer
/// voters exist.
pub fn format_top_voters(title: &str, ranked: &[RankedNode], top_n: usize) -> String {
    let mut out = format!("\nTop {top_n} {title}:\n");
    for r in ranked.iter().take(top_n) {
        out.push_str(&format!("Voter: {}, Score: {:.4}\n", r.id, r.score));
    }
    out
}

fn format_counts(header: &str, counts: &[CategoryCount]) -> String {
    let mut out = String::new();
    out.push_str(format!("{header:<32} {:>6}", "count").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<32} {:-<6}", "", "").trim_end());
    out.push('\n');
    for c in counts {
        out.push_str(&format!("{:<32} {:>6}\n", truncate(&c.label, 32), c.count));
    }
    out
}

/// Cut `s` to at most `max` characters, marking a cut with a trailing `.`.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_voters_lines() {
        let ranked = vec![
            RankedNode { id: "Alice".to_string(), score: 0.123456 },
            RankedNode { id: "Bob".to_string(), score: 0.1 },
        ];
        let txt = format_top_voters(OUT_DEGREE_TITLE, &ranked, 10);
        assert_eq!(
            txt,
            concat!(
                "\nTop 10 Most Active Voters (Out-Degree):\n",
                "Voter: Alice, Score: 0.1235\n",
                "Voter: Bob, Score: 0.1000\n",
            )
        );
    }

    #[test]
    fn roster_summary_has_share_line() {
        let summary = RosterSummary {
            total: 3,
            international: 2,
            domestic: 1,
            percentage_international: 200.0 / 3.0,
            top_nationalities: vec![CategoryCount::new("FRA", 2)],
            top_clubs: Vec::new(),
            positions: vec![CategoryCount::new("Forward", 2)],
        };
        let txt = format_roster_summary(4, 1, &summary);
        assert!(txt.contains("International Players: 2 (66.67%)\n"));
        assert!(txt.contains("Rows: read=4 | dropped (missing name)=1\n"));
        assert!(txt.contains(&format!("{:<32} {:>6}\n", "FRA", 2)));
    }

    #[test]
    fn network_summary_lines() {
        let stats = NetworkStats {
            rows_read: 5,
            rows_retained: 4,
            neutral_votes: 1,
            nodes: 3,
            edges: 3,
            largest_scc_nodes: 3,
        };
        let txt = format_network_summary(&stats);
        assert!(txt.contains("Rows: read=5 | retained=4 | neutral (no edge)=1\n"));
        assert!(txt.contains("Graph: nodes=3 | edges=3\n"));
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("Wolverhampton Wanderers", 8), "Wolverh.");
        assert_eq!(truncate("Spurs", 8), "Spurs");
    }
}
