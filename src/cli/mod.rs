//! Command-line parsing for the roster and voting-network analyses.
//!
//! Argument parsing and command dispatch stay separate from the pipelines:
//! this module only turns flags into [`RosterConfig`] / [`VotesConfig`].

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{
    DEFAULT_ROSTER_PATH, DEFAULT_VOTES_PATH, DisplayMode, NETWORK_VISUAL_TOP_N, OutputConfig, RosterConfig, TOP_N,
    VotesConfig,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "eda", version, about = "EPL roster and Wikipedia RfA voting-network analysis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Roster statistics: international vs. domestic players, top nationalities,
    /// clubs, and positions.
    Roster(RosterArgs),
    /// Voting network: signed graph, centrality rankings, and network chart.
    Votes(VotesArgs),
    /// Run the roster analysis, then the voting-network analysis.
    ///
    /// This is what `eda` with no arguments does.
    All(AllArgs),
}

/// Rendering options shared by every subcommand.
#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    /// Where charts go: SVG files, the terminal viewer, or nowhere.
    #[arg(long, value_enum, default_value_t = DisplayMode::Svg)]
    pub display: DisplayMode,

    /// Directory for SVG charts.
    #[arg(long, default_value = "charts")]
    pub out_dir: PathBuf,

    /// Do not print ASCII bar charts under the frequency tables.
    #[arg(long)]
    pub no_ascii: bool,
}

impl OutputArgs {
    pub fn to_config(&self) -> OutputConfig {
        OutputConfig {
            display: self.display,
            out_dir: self.out_dir.clone(),
            ascii: !self.no_ascii,
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct RosterArgs {
    /// Roster CSV (needs Name, Nat, Pos, Club columns).
    #[arg(long, default_value = DEFAULT_ROSTER_PATH)]
    pub input: PathBuf,

    /// Write the roster summary as JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args, Clone)]
pub struct VotesArgs {
    /// Voting CSV (needs SOURCE, TARGET, VOTE columns).
    #[arg(long, default_value = DEFAULT_VOTES_PATH)]
    pub input: PathBuf,

    /// Seed for the network layout's random start.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Write the network summary as JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args, Clone)]
pub struct AllArgs {
    #[arg(long, default_value = DEFAULT_ROSTER_PATH)]
    pub roster: PathBuf,

    #[arg(long, default_value = DEFAULT_VOTES_PATH)]
    pub votes: PathBuf,

    /// Seed for the network layout's random start.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Write both summaries as one JSON document.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn roster_config(input: PathBuf, export: Option<PathBuf>, output: &OutputArgs) -> RosterConfig {
    RosterConfig {
        input,
        output: output.to_config(),
        export,
        top_n: TOP_N,
    }
}

pub fn votes_config(input: PathBuf, seed: u64, export: Option<PathBuf>, output: &OutputArgs) -> VotesConfig {
    VotesConfig {
        input,
        output: output.to_config(),
        export,
        top_n: TOP_N,
        visual_top_n: NETWORK_VISUAL_TOP_N,
        layout_seed: seed,
    }
}
