//! CSV loading.
//!
//! Turns a comma-separated file with a header row into a [`Table`]. The loader
//! does no cleaning beyond null detection; each pipeline's normalizer decides
//! what to keep.
//!
//! Behaviour:
//! - header names are matched exactly; a UTF-8 BOM on the first one is stripped
//! - cell values are kept verbatim (no trimming)
//! - an empty cell or a conventional NA token is a null
//! - a row with more fields than the header is a fatal parse error

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::{debug, info};

use crate::error::AppError;
use crate::io::table::Table;

/// Tokens read as a missing value.
const NA_TOKENS: [&str; 18] = [
    "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "<NA>", "#N/A",
    "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "1.#IND", "1.#QNAN",
];

/// Load a CSV file from disk.
pub fn load_table(path: &Path) -> Result<Table, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open CSV '{}': {e}", path.display())))?;
    let table = read_table(file, &path.display().to_string())?;
    info!(path = %path.display(), rows = table.len(), columns = table.columns().len(), "loaded csv");
    Ok(table)
}

/// Read CSV from any reader. `source` names the input in error messages.
pub fn read_table<R: Read>(reader: R, source: &str) -> Result<Table, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read CSV headers from '{source}': {e}")))?
        .clone();
    let columns = header_names(&headers);
    let width = columns.len();

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| AppError::input(format!("Malformed CSV '{source}': {e}")))?;
        let line = record.position().map(|p| p.line()).unwrap_or(idx as u64 + 2);

        if record.len() > width {
            return Err(AppError::input(format!(
                "Malformed CSV '{source}' at line {line}: expected {width} fields, saw {}",
                record.len()
            )));
        }

        rows.push(record.iter().map(parse_cell).collect());
    }

    debug!(source, rows = rows.len(), "parsed csv records");
    Ok(Table::new(columns, rows))
}

/// `true` when a raw cell denotes a missing value.
pub fn is_missing(raw: &str) -> bool {
    raw.is_empty() || NA_TOKENS.contains(&raw)
}

fn parse_cell(raw: &str) -> Option<String> {
    if is_missing(raw) { None } else { Some(raw.to_string()) }
}

fn header_names(headers: &StringRecord) -> Vec<String> {
    headers
        .iter()
        .enumerate()
        .map(|(i, name)| {
            // Spreadsheet exports often prefix the first header with a BOM.
            if i == 0 {
                name.trim_start_matches('\u{feff}').to_string()
            } else {
                name.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn na_tokens_and_empty_cells_are_null() {
        let csv = "Name,Nat\nA,NA\n,ENG\nnull,FRA\n";
        let table = read_table(csv.as_bytes(), "inline").unwrap();
        let rows: Vec<_> = table.rows().map(|r| (r.get("Name"), r.get("Nat"))).collect();
        assert_eq!(rows, vec![(Some("A"), None), (None, Some("ENG")), (None, Some("FRA"))]);
    }

    #[test]
    fn values_are_not_trimmed() {
        let csv = "Name,Nat\nA,ENG \n";
        let table = read_table(csv.as_bytes(), "inline").unwrap();
        assert_eq!(table.rows().next().unwrap().get("Nat"), Some("ENG "));
    }

    #[test]
    fn bom_is_stripped_from_first_header() {
        let csv = "\u{feff}Name,Nat\nA,ENG\n";
        let table = read_table(csv.as_bytes(), "inline").unwrap();
        assert!(table.has_column("Name"));
    }

    #[test]
    fn short_rows_pad_and_long_rows_fail() {
        let short = "Name,Nat,Club\nA,ENG\n";
        let table = read_table(short.as_bytes(), "inline").unwrap();
        assert!(table.rows().next().unwrap().is_null("Club"));

        let long = "Name,Nat\nA,ENG,extra\n";
        let err = read_table(long.as_bytes(), "inline").unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("line 2"), "{err}");
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_table(&dir.path().join("absent.csv")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("Failed to open CSV"));
    }

    #[test]
    fn loads_from_disk_in_file_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "SOURCE,TARGET,VOTE\nx,y,1\ny,x,-1\n").unwrap();
        let table = load_table(file.path()).unwrap();
        let sources: Vec<_> = table.rows().map(|r| r.get("SOURCE").unwrap()).collect();
        assert_eq!(sources, vec!["x", "y"]);
    }
}
