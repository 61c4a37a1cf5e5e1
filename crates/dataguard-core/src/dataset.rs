use std::collections::HashSet;

use crate::column::Column;
use crate::errors::RuleError;

/// A named collection of equal-length columns.
pub struct Dataset {
    names: Vec<String>,
    columns: Vec<Column>,
}

impl Dataset {
    /// Rejects mismatched lengths and duplicate header names up front, so
    /// every later lookup by name is unambiguous and every column access is
    /// guaranteed in-bounds against the dataset's row count.
    pub fn new(names: Vec<String>, columns: Vec<Column>) -> Result<Dataset, RuleError> {
        if names.len() != columns.len() {
            return Err(RuleError::InvalidDataset(format!(
                "{} headers but {} columns",
                names.len(),
                columns.len()
            )));
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(RuleError::InvalidDataset(format!("duplicate header '{name}'")));
            }
        }

        let rows = columns.first().map(Column::len);
        if let Some(rows) = rows {
            if let Some((name, col)) = names
                .iter()
                .zip(&columns)
                .find(|(_, col)| col.len() != rows)
            {
                return Err(RuleError::InvalidDataset(format!(
                    "column '{name}' has {} rows, expected {rows}",
                    col.len()
                )));
            }
        }

        Ok(Dataset { names, columns })
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        let rows = self.columns.first().map(Column::len).unwrap_or(0);
        (rows, self.columns.len())
    }

    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn get_column_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn get_column_by_name(&self, name: &str) -> Option<&Column> {
        self.get_column_index(name).map(|i| &self.columns[i])
    }

    pub fn get_column_by_index(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }
}
