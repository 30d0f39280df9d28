//! Voting-table cleaning: drop incomplete rows, keep votes in `{-1, 0, 1}`.

use tracing::debug;

use crate::domain::{Vote, VoteRecord};
use crate::error::AppError;
use crate::io::table::Table;

pub const REQUIRED_COLUMNS: [&str; 3] = ["SOURCE", "TARGET", "VOTE"];

/// Cleaned votes plus what cleaning did to them.
#[derive(Debug, Clone)]
pub struct NormalizedVotes {
    pub votes: Vec<VoteRecord>,
    pub rows_read: usize,
    pub dropped_missing: usize,
    pub dropped_invalid: usize,
}

impl NormalizedVotes {
    pub fn neutral_count(&self) -> usize {
        self.votes.iter().filter(|v| v.vote == Vote::Neutral).count()
    }
}

/// Parse a raw VOTE cell.
///
/// Integral numbers (`1`, `-1.0`) are accepted; anything else, including text
/// that does not parse as a number, yields `None`.
pub fn parse_vote(raw: &str) -> Option<Vote> {
    let raw = raw.trim();
    if let Ok(v) = raw.parse::<i64>() {
        return Vote::from_value(v);
    }
    let v = raw.parse::<f64>().ok()?;
    if v.is_finite() && v.fract() == 0.0 {
        Vote::from_value(v as i64)
    } else {
        None
    }
}

/// Clean a loaded voting table into vote records.
pub fn normalize_votes(mut table: Table) -> Result<NormalizedVotes, AppError> {
    table.require_columns(&REQUIRED_COLUMNS)?;
    let rows_read = table.len();

    let dropped_missing = table.drop_nulls(&REQUIRED_COLUMNS)?;
    let dropped_invalid = table.retain_rows(|row| row.get("VOTE").and_then(parse_vote).is_some());

    let votes: Vec<VoteRecord> = table
        .rows()
        .filter_map(|row| {
            Some(VoteRecord {
                source: row.get("SOURCE")?.to_string(),
                target: row.get("TARGET")?.to_string(),
                vote: parse_vote(row.get("VOTE")?)?,
            })
        })
        .collect();

    debug!(rows_read, dropped_missing, dropped_invalid, kept = votes.len(), "normalized votes");

    Ok(NormalizedVotes {
        votes,
        rows_read,
        dropped_missing,
        dropped_invalid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ingest::read_table;

    #[test]
    fn parse_vote_accepts_integral_values_only() {
        assert_eq!(parse_vote("1"), Some(Vote::Support));
        assert_eq!(parse_vote("-1"), Some(Vote::Oppose));
        assert_eq!(parse_vote("0"), Some(Vote::Neutral));
        assert_eq!(parse_vote("1.0"), Some(Vote::Support));
        assert_eq!(parse_vote("0.5"), None);
        assert_eq!(parse_vote("2"), None);
        assert_eq!(parse_vote("yes"), None);
    }

    #[test]
    fn drops_incomplete_and_out_of_range_rows() {
        let csv = "SOURCE,TARGET,VOTE\na,b,1\n,b,1\na,,-1\na,c,\na,d,2\nb,a,0\nc,a,x\n";
        let v = normalize_votes(read_table(csv.as_bytes(), "inline").unwrap()).unwrap();
        assert_eq!(v.rows_read, 7);
        assert_eq!(v.dropped_missing, 3);
        assert_eq!(v.dropped_invalid, 2);
        assert_eq!(v.votes.len(), 2);
        assert_eq!(v.neutral_count(), 1);
        assert_eq!(v.votes[0].vote, Vote::Support);
    }

    #[test]
    fn missing_vote_column_is_fatal() {
        let table = read_table("SOURCE,TARGET\na,b\n".as_bytes(), "inline").unwrap();
        let err = normalize_votes(table).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
