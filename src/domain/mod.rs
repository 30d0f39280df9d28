//! Domain types used throughout both pipelines.
//!
//! This module defines:
//!
//! - roster records (`PlayerRecord`, `Position`, `Segment`)
//! - voting records (`VoteRecord`, `Vote`, `Sign`)
//! - derived values (`CategoryCount`, `RankedNode`)
//! - run configuration (`RosterConfig`, `VotesConfig`, `OutputConfig`)

pub mod types;

pub use types::*;
