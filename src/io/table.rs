//! In-memory table: named columns over ordered rows of nullable strings.
//!
//! This is the shape both loaders produce and both normalizers consume. Row
//! order is the file order and survives every operation here.

use std::collections::HashMap;

use crate::error::AppError;

#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<Option<String>>>,
}

/// Borrowed view of one row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    index: &'a HashMap<String, usize>,
    values: &'a [Option<String>],
}

impl<'a> Row<'a> {
    /// Value of `column`, or `None` when the cell is null or the column is absent.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let idx = *self.index.get(column)?;
        self.values.get(idx)?.as_deref()
    }

    pub fn is_null(&self, column: &str) -> bool {
        self.get(column).is_none()
    }
}

impl Table {
    /// Build a table. Short rows are padded with nulls.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        let index = build_index(&columns);
        Self { columns, index, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Fail with an input error naming the first absent column.
    pub fn require_columns(&self, names: &[&str]) -> Result<(), AppError> {
        for name in names {
            if !self.has_column(name) {
                return Err(AppError::input(format!("Missing required column: `{name}`")));
            }
        }
        Ok(())
    }

    /// Rename columns in place. Renames naming an absent column are ignored.
    pub fn rename_columns(&mut self, renames: &[(&str, &str)]) {
        for (from, to) in renames {
            if let Some(col) = self.columns.iter_mut().find(|c| c.as_str() == *from) {
                *col = (*to).to_string();
            }
        }
        self.index = build_index(&self.columns);
    }

    /// Rewrite every non-null cell of `column`; null cells stay null.
    pub fn map_column<F>(&mut self, column: &str, mut f: F) -> Result<(), AppError>
    where
        F: FnMut(&str) -> String,
    {
        let idx = self.column_index(column)?;
        for row in &mut self.rows {
            if let Some(value) = row[idx].as_mut() {
                *value = f(value);
            }
        }
        Ok(())
    }

    /// Drop rows with a null in any of `subset`. Returns how many were dropped.
    pub fn drop_nulls(&mut self, subset: &[&str]) -> Result<usize, AppError> {
        let idxs = subset
            .iter()
            .map(|name| self.column_index(name))
            .collect::<Result<Vec<_>, _>>()?;
        let before = self.rows.len();
        self.rows.retain(|row| idxs.iter().all(|&i| row[i].is_some()));
        Ok(before - self.rows.len())
    }

    /// Keep rows matching `keep`. Returns how many were dropped.
    pub fn retain_rows<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(Row<'_>) -> bool,
    {
        let index = &self.index;
        let before = self.rows.len();
        self.rows.retain(|values| keep(Row { index, values }));
        before - self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        self.rows.iter().map(|values| Row {
            index: &self.index,
            values,
        })
    }

    fn column_index(&self, name: &str) -> Result<usize, AppError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| AppError::input(format!("Missing required column: `{name}`")))
    }
}

fn build_index(columns: &[String]) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(columns.len());
    for (i, name) in columns.iter().enumerate() {
        // Duplicate headers resolve to the first occurrence.
        index.entry(name.clone()).or_insert(i);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    fn sample() -> Table {
        Table::new(
            vec!["Name".into(), "Nat".into()],
            vec![
                vec![cell("A"), cell("ENG")],
                vec![None, cell("FRA")],
                vec![cell("C")],
            ],
        )
    }

    #[test]
    fn short_rows_are_padded_with_nulls() {
        let table = sample();
        let last = table.rows().nth(2).unwrap();
        assert_eq!(last.get("Name"), Some("C"));
        assert!(last.is_null("Nat"));
    }

    #[test]
    fn rename_ignores_absent_columns() {
        let mut table = sample();
        table.rename_columns(&[("Nat", "Nationality"), ("Pos", "Position")]);
        assert_eq!(table.columns(), &["Name".to_string(), "Nationality".to_string()]);
        assert_eq!(table.rows().next().unwrap().get("Nationality"), Some("ENG"));
        assert!(!table.has_column("Nat"));
    }

    #[test]
    fn drop_nulls_keeps_row_order() {
        let mut table = sample();
        let dropped = table.drop_nulls(&["Name"]).unwrap();
        assert_eq!(dropped, 1);
        let names: Vec<_> = table.rows().map(|r| r.get("Name").unwrap()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn drop_nulls_on_missing_column_is_an_input_error() {
        let mut table = sample();
        let err = table.drop_nulls(&["Club"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn map_column_leaves_nulls_alone() {
        let mut table = sample();
        table.map_column("Nat", |v| v.to_lowercase()).unwrap();
        let nats: Vec<_> = table.rows().map(|r| r.get("Nat")).collect();
        assert_eq!(nats, vec![Some("eng"), Some("fra"), None]);
    }
}
