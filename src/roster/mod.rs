//! Roster pipeline stages: normalize -> segment -> aggregate.

pub mod aggregate;
pub mod normalize;
pub mod segment;

pub use aggregate::{RosterSummary, summarize, value_counts};
pub use normalize::{NormalizedRoster, expand_position_code, normalize_roster};
pub use segment::{Segmented, segment, segment_of};
