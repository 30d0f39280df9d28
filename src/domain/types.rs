//! Shared domain types.
//!
//! Records are created once by the normalizers and never mutated afterwards;
//! derived counts and scores are plain values so they can be printed, drawn,
//! and exported as JSON.

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

/// Default input for the roster pipeline.
pub const DEFAULT_ROSTER_PATH: &str = "epl_2018_2019.csv";

/// Default input for the voting-network pipeline.
pub const DEFAULT_VOTES_PATH: &str = "wikiRfA.csv";

/// Nationality code that marks a player as domestic. Compared verbatim.
pub const DOMESTIC_NATIONALITY: &str = "ENG";

/// Length of every printed/charted top-N table.
pub const TOP_N: usize = 10;

/// Number of most influential voters drawn in the network chart.
pub const NETWORK_VISUAL_TOP_N: usize = 20;

/// Where charts go once they are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// One SVG file per chart.
    Svg,
    /// Interactive terminal viewer.
    Tui,
    /// Skip rendering; text output only.
    #[value(name = "none")]
    #[serde(rename = "none")]
    Off,
}

/// Playing position after code expansion.
///
/// Codes outside the fixed table are carried through unchanged as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
    Other(String),
}

impl Position {
    /// Parse an already expanded label; unknown text becomes `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Goalkeeper" => Position::Goalkeeper,
            "Defender" => Position::Defender,
            "Midfielder" => Position::Midfielder,
            "Forward" => Position::Forward,
            other => Position::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
            Position::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One cleaned roster row.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub nationality: Option<String>,
    pub position: Option<Position>,
    pub club: Option<String>,
}

/// Domestic vs international split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Domestic,
    International,
}

/// A label with its frequency, as produced by a value count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

impl CategoryCount {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// A validated vote value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Oppose,
    Neutral,
    Support,
}

impl Vote {
    /// Map an integer vote onto the accepted set `{-1, 0, 1}`.
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            -1 => Some(Vote::Oppose),
            0 => Some(Vote::Neutral),
            1 => Some(Vote::Support),
            _ => None,
        }
    }

    /// Edge sign for this vote; neutral votes carry none.
    pub fn sign(self) -> Option<Sign> {
        match self {
            Vote::Oppose => Some(Sign::Oppose),
            Vote::Neutral => None,
            Vote::Support => Some(Sign::Support),
        }
    }
}

/// Sign carried by a voting edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Oppose,
    Support,
}

/// One cleaned voting row (neutral votes included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteRecord {
    pub source: String,
    pub target: String,
    pub vote: Vote,
}

/// A node with its score, as listed in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedNode {
    pub id: String,
    pub score: f64,
}

/// Rendering options shared by both pipelines.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub display: DisplayMode,
    pub out_dir: PathBuf,
    /// Print ASCII bar charts under the text tables.
    pub ascii: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            display: DisplayMode::Svg,
            out_dir: PathBuf::from("charts"),
            ascii: true,
        }
    }
}

/// Configuration of one roster run, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    pub input: PathBuf,
    pub output: OutputConfig,
    pub export: Option<PathBuf>,
    pub top_n: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_ROSTER_PATH),
            output: OutputConfig::default(),
            export: None,
            top_n: TOP_N,
        }
    }
}

/// Configuration of one voting-network run, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct VotesConfig {
    pub input: PathBuf,
    pub output: OutputConfig,
    pub export: Option<PathBuf>,
    pub top_n: usize,
    pub visual_top_n: usize,
    /// Seed for the force-directed layout's random start.
    pub layout_seed: u64,
}

impl Default for VotesConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_VOTES_PATH),
            output: OutputConfig::default(),
            export: None,
            top_n: TOP_N,
            visual_top_n: NETWORK_VISUAL_TOP_N,
            layout_seed: 42,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back_to_positions() {
        for pos in [Position::Goalkeeper, Position::Defender, Position::Midfielder, Position::Forward] {
            assert_eq!(Position::from_label(pos.label()), pos);
        }
    }

    #[test]
    fn unknown_label_passes_through() {
        let pos = Position::from_label("GK");
        assert_eq!(pos, Position::Other("GK".to_string()));
        assert_eq!(pos.to_string(), "GK");
    }

    #[test]
    fn vote_values_outside_the_set_are_rejected() {
        assert_eq!(Vote::from_value(-1), Some(Vote::Oppose));
        assert_eq!(Vote::from_value(0), Some(Vote::Neutral));
        assert_eq!(Vote::from_value(1), Some(Vote::Support));
        assert_eq!(Vote::from_value(2), None);
        assert_eq!(Vote::from_value(-5), None);
        assert_eq!(Vote::Neutral.sign(), None);
        assert_eq!(Vote::Oppose.sign(), Some(Sign::Oppose));
        assert_eq!(Vote::Support.sign(), Some(Sign::Support));
    }
}
