//! `epl-rfa` library crate.
//!
//! The binary (`eda`) is a thin wrapper around this library so the two
//! pipelines are testable without spawning processes.
//!
//! - `roster`: EPL roster -> domestic/international statistics
//! - `network`: Wikipedia RfA votes -> signed graph -> centrality
//! - `report` / `plot` / `tui`: text, SVG, and terminal output

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod network;
pub mod plot;
pub mod report;
pub mod roster;
pub mod tui;
