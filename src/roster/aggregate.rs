//! Roster counts and frequency tables.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{CategoryCount, PlayerRecord};
use crate::error::AppError;
use crate::roster::segment::segment;

/// Everything the roster report prints and draws.
#[derive(Debug, Clone, Serialize)]
pub struct RosterSummary {
    pub total: usize,
    pub international: usize,
    pub domestic: usize,
    pub percentage_international: f64,
    /// Top nationalities among international players.
    pub top_nationalities: Vec<CategoryCount>,
    /// Top clubs by international-player count.
    pub top_clubs: Vec<CategoryCount>,
    /// Full position table among international players.
    pub positions: Vec<CategoryCount>,
}

/// Compute the roster summary.
///
/// Fails when the roster is empty: the international share is undefined.
pub fn summarize(players: &[PlayerRecord], top_n: usize) -> Result<RosterSummary, AppError> {
    let total = players.len();
    if total == 0 {
        return Err(AppError::new(
            3,
            "Cannot compute the international share of an empty roster.",
        ));
    }

    let split = segment(players);
    let international = split.international.len();
    let domestic = total - international;
    let percentage_international = international as f64 / total as f64 * 100.0;

    let mut top_nationalities =
        value_counts(split.international.iter().map(|p| p.nationality.as_deref()));
    top_nationalities.truncate(top_n);

    let mut top_clubs = value_counts(split.international.iter().map(|p| p.club.as_deref()));
    top_clubs.truncate(top_n);

    let positions = value_counts(
        split
            .international
            .iter()
            .map(|p| p.position.as_ref().map(|pos| pos.label())),
    );

    Ok(RosterSummary {
        total,
        international,
        domestic,
        percentage_international,
        top_nationalities,
        top_clubs,
        positions,
    })
}

/// Count non-null values, most frequent first.
///
/// Equal counts keep first-seen order.
pub fn value_counts<'a, I>(values: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut slots: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for value in values.into_iter().flatten() {
        match slots.get(value) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                slots.insert(value, counts.len());
                counts.push(CategoryCount::new(value, 1));
            }
        }
    }

    // Stable sort keeps first-seen order among ties.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Position;

    fn player(name: &str, nat: &str, pos: Option<Position>, club: &str) -> PlayerRecord {
        PlayerRecord {
            name: name.to_string(),
            nationality: Some(nat.to_string()),
            position: pos,
            club: Some(club.to_string()),
        }
    }

    #[test]
    fn three_player_example() {
        let players = vec![
            player("A", "ENG", None, "X"),
            player("B", "FRA", None, "X"),
            player("C", "FRA", None, "Y"),
        ];
        let s = summarize(&players, 10).unwrap();
        assert_eq!(s.international, 2);
        assert_eq!(s.domestic, 1);
        assert_eq!(s.total, 3);
        assert_eq!(s.top_nationalities, vec![CategoryCount::new("FRA", 2)]);
        assert!((s.percentage_international - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn international_plus_domestic_is_total() {
        let players: Vec<_> = ["ENG", "BRA", "ENG", "ESP", "eng", "FRA"]
            .iter()
            .enumerate()
            .map(|(i, nat)| player(&format!("P{i}"), nat, None, "Club"))
            .collect();
        let s = summarize(&players, 10).unwrap();
        assert_eq!(s.international + s.domestic, s.total);
        assert_eq!(s.domestic, 2);
    }

    #[test]
    fn empty_roster_is_a_data_error() {
        let err = summarize(&[], 10).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn value_counts_ties_keep_first_seen_order() {
        let counts = value_counts(
            ["BRA", "ESP", "ESP", "BRA", "ARG", "ARG", "FRA", "FRA", "FRA"]
                .into_iter()
                .map(Some),
        );
        let labels: Vec<_> = counts.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["FRA", "BRA", "ESP", "ARG"]);
    }

    #[test]
    fn value_counts_skips_nulls() {
        let counts = value_counts([Some("A"), None, Some("A"), None]);
        assert_eq!(counts, vec![CategoryCount::new("A", 2)]);
    }

    #[test]
    fn tables_are_limited_to_top_n_except_positions() {
        let mut players = Vec::new();
        for i in 0..15 {
            let pos = if i % 2 == 0 { Position::Defender } else { Position::Other(format!("X{i}")) };
            players.push(player(&format!("P{i}"), &format!("N{i}"), Some(pos), &format!("C{i}")));
        }
        let s = summarize(&players, 10).unwrap();
        assert_eq!(s.top_nationalities.len(), 10);
        assert_eq!(s.top_clubs.len(), 10);
        assert_eq!(s.positions.len(), 8);
        assert_eq!(s.positions[0], CategoryCount::new("Defender", 8));
    }
}
