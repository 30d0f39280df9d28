//! Domestic / international partition.
//!
//! A player is domestic only when the nationality is exactly `ENG`: case and
//! surrounding whitespace matter, and a missing nationality is international.

use crate::domain::{DOMESTIC_NATIONALITY, PlayerRecord, Segment};

pub fn segment_of(player: &PlayerRecord) -> Segment {
    match player.nationality.as_deref() {
        Some(DOMESTIC_NATIONALITY) => Segment::Domestic,
        _ => Segment::International,
    }
}

/// Borrowed split of a roster, each side in roster order.
#[derive(Debug, Clone, Default)]
pub struct Segmented<'a> {
    pub domestic: Vec<&'a PlayerRecord>,
    pub international: Vec<&'a PlayerRecord>,
}

pub fn segment(players: &[PlayerRecord]) -> Segmented<'_> {
    let mut out = Segmented::default();
    for p in players {
        match segment_of(p) {
            Segment::Domestic => out.domestic.push(p),
            Segment::International => out.international.push(p),
        }
    }
    out
}
