//! Roster cleaning: column renames, position expansion, null-name removal.

use tracing::debug;

use crate::domain::{PlayerRecord, Position};
use crate::error::AppError;
use crate::io::table::Table;

/// Columns the raw roster file must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Name", "Nat", "Pos", "Club"];

/// Raw header -> working header.
pub const COLUMN_RENAMES: [(&str, &str); 2] = [("Nat", "Nationality"), ("Pos", "Position")];

/// Cleaned roster plus what cleaning did to it.
#[derive(Debug, Clone)]
pub struct NormalizedRoster {
    pub players: Vec<PlayerRecord>,
    pub rows_read: usize,
    pub dropped_missing_name: usize,
}

/// Expand a position code to its label.
///
/// Anything outside `G`/`D`/`M`/`F` comes back untouched, so applying this to
/// an already expanded label is a no-op.
pub fn expand_position_code(code: &str) -> &str {
    match code {
        "G" => "Goalkeeper",
        "D" => "Defender",
        "M" => "Midfielder",
        "F" => "Forward",
        other => other,
    }
}

/// Clean a loaded roster table into player records.
pub fn normalize_roster(mut table: Table) -> Result<NormalizedRoster, AppError> {
    table.require_columns(&REQUIRED_COLUMNS)?;
    let rows_read = table.len();

    table.rename_columns(&COLUMN_RENAMES);
    table.map_column("Position", |code| expand_position_code(code).to_string())?;
    let dropped_missing_name = table.drop_nulls(&["Name"])?;

    let players: Vec<PlayerRecord> = table
        .rows()
        .filter_map(|row| {
            Some(PlayerRecord {
                name: row.get("Name")?.to_string(),
                nationality: row.get("Nationality").map(str::to_string),
                position: row.get("Position").map(Position::from_label),
                club: row.get("Club").map(str::to_string),
            })
        })
        .collect();

    debug!(rows_read, dropped_missing_name, players = players.len(), "normalized roster");

    Ok(NormalizedRoster {
        players,
        rows_read,
        dropped_missing_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ingest::read_table;

    fn roster(csv: &str) -> NormalizedRoster {
        normalize_roster(read_table(csv.as_bytes(), "inline").unwrap()).unwrap()
    }

    #[test]
    fn expansion_is_idempotent() {
        for code in ["G", "D", "M", "F", "GK", "Goalkeeper"] {
            let once = expand_position_code(code);
            assert_eq!(expand_position_code(once), once);
        }
        assert_eq!(expand_position_code("Goalkeeper"), "Goalkeeper");
    }

    #[test]
    fn rows_without_a_name_are_dropped() {
        let r = roster("Name,Nat,Pos,Club\nA,ENG,G,Arsenal\n,FRA,D,Chelsea\nC,,M,\n");
        assert_eq!(r.rows_read, 3);
        assert_eq!(r.dropped_missing_name, 1);
        assert_eq!(r.players.len(), 2);
        assert!(r.players.iter().all(|p| !p.name.is_empty()));
    }

    #[test]
    fn positions_are_expanded_and_unknown_codes_kept() {
        let r = roster("Name,Nat,Pos,Club\nA,ENG,G,X\nB,FRA,W,X\nC,BRA,,X\n");
        assert_eq!(r.players[0].position, Some(Position::Goalkeeper));
        assert_eq!(r.players[1].position, Some(Position::Other("W".to_string())));
        assert_eq!(r.players[2].position, None);
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let table = read_table("Name,Nat,Club\nA,ENG,X\n".as_bytes(), "inline").unwrap();
        let err = normalize_roster(table).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("`Pos`"));
    }
}
