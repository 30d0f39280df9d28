//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the roster and/or voting-network pipelines
//! - prints reports and ASCII bars
//! - renders charts (SVG files or the terminal viewer)
//! - writes optional JSON exports

use std::path::Path;

use clap::Parser;
use serde::Serialize;

use crate::cli::{AllArgs, Command, RosterArgs, VotesArgs, roster_config, votes_config};
use crate::domain::{DisplayMode, OutputConfig, RosterConfig, VotesConfig};
use crate::error::AppError;
use crate::io::write_summary_json;
use crate::plot::{Chart, render_ascii_bars, write_svg};
use crate::report::format::{
    EIGENVECTOR_TITLE, OUT_DEGREE_TITLE, format_network_summary, format_roster_summary, format_top_voters,
};
use crate::report::{network_chart, roster_charts};
use crate::roster::RosterSummary;

pub mod pipeline;

use pipeline::{NetworkSummary, RosterRun, VotesRun};

/// Width of the longest ASCII bar.
const ASCII_WIDTH: usize = 40;

/// Entry point for the `eda` binary.
pub fn run() -> Result<(), AppError> {
    crate::logging::init_logging();

    // `eda` alone runs both analyses; clap needs a subcommand name, so the
    // argv list is rewritten before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Roster(args) => handle_roster(args),
        Command::Votes(args) => handle_votes(args),
        Command::All(args) => handle_all(args),
    }
}

fn handle_roster(args: RosterArgs) -> Result<(), AppError> {
    let config = roster_config(args.input, args.export, &args.output);
    let run = roster(&config)?;
    if let Some(path) = &config.export {
        write_summary_json(path, &run.summary)?;
    }
    Ok(())
}

fn handle_votes(args: VotesArgs) -> Result<(), AppError> {
    let config = votes_config(args.input, args.seed, args.export, &args.output);
    let run = votes(&config)?;
    if let Some(path) = &config.export {
        write_summary_json(path, &run.summary)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct CombinedSummary<'a> {
    roster: &'a RosterSummary,
    votes: &'a NetworkSummary,
}

fn handle_all(args: AllArgs) -> Result<(), AppError> {
    let roster_cfg = roster_config(args.roster, None, &args.output);
    let votes_cfg = votes_config(args.votes, args.seed, None, &args.output);

    let roster_run = roster(&roster_cfg)?;
    println!();
    let votes_run = votes(&votes_cfg)?;

    if let Some(path) = &args.export {
        let combined = CombinedSummary {
            roster: &roster_run.summary,
            votes: &votes_run.summary,
        };
        write_summary_json(path, &combined)?;
    }
    Ok(())
}

/// Run, print, and render the roster analysis.
fn roster(config: &RosterConfig) -> Result<RosterRun, AppError> {
    let run = pipeline::run_roster(config)?;
    let summary = &run.summary;

    print!(
        "{}",
        format_roster_summary(run.roster.rows_read, run.roster.dropped_missing_name, summary)
    );

    if config.output.ascii {
        println!();
        println!("{}", render_ascii_bars("Top nationalities", &summary.top_nationalities, ASCII_WIDTH));
        println!("{}", render_ascii_bars("Top clubs (international players)", &summary.top_clubs, ASCII_WIDTH));
        print!("{}", render_ascii_bars("Positions (international players)", &summary.positions, ASCII_WIDTH));
    }

    if config.output.display != DisplayMode::Off {
        present_charts(&roster_charts(summary), &config.output)?;
    }
    Ok(run)
}

/// Run, print, and render the voting-network analysis.
fn votes(config: &VotesConfig) -> Result<VotesRun, AppError> {
    let run = pipeline::run_votes(config)?;
    let summary = &run.summary;

    print!("{}", format_network_summary(&summary.stats()));
    print!("{}", format_top_voters(OUT_DEGREE_TITLE, &summary.top_out_degree, config.top_n));
    print!("{}", format_top_voters(EIGENVECTOR_TITLE, &summary.top_eigenvector, config.top_n));

    if config.output.display != DisplayMode::Off {
        let chart = network_chart(
            &run.graph,
            &run.out_degree,
            &run.eigenvector,
            config.visual_top_n,
            config.layout_seed,
        );
        present_charts(std::slice::from_ref(&chart), &config.output)?;
    }
    Ok(run)
}

fn present_charts(charts: &[Chart], output: &OutputConfig) -> Result<(), AppError> {
    match output.display {
        DisplayMode::Svg => write_all_svg(charts, &output.out_dir),
        DisplayMode::Tui => crate::tui::show_charts(charts),
        DisplayMode::Off => Ok(()),
    }
}

fn write_all_svg(charts: &[Chart], dir: &Path) -> Result<(), AppError> {
    for chart in charts {
        write_svg(chart, dir)?;
    }
    Ok(())
}

/// Rewrite argv so `eda` defaults to `eda all`.
///
/// Rules:
/// - `eda`                       -> `eda all`
/// - `eda --display tui ...`     -> `eda all --display tui ...`
/// - `eda --help/--version/-h`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("all".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "roster" | "votes" | "all");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "all flags".
    if arg1.starts_with('-') {
        argv.insert(1, "all".to_string());
        return argv;
    }

    // Otherwise, leave as-is and let clap report it.
    argv
}
