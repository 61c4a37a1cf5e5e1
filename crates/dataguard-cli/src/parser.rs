use std::fs;
use std::path::Path;

use dataguard_core::Rule;
use serde::Deserialize;

use crate::errors::ConfigError;

/// Top-level TOML document: one dataset, its schema, and the rules to run
/// against it.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub table: Table,
}

#[derive(Debug, Deserialize)]
pub struct Table {
    pub name: String,
    pub path: String,
    pub column: Vec<ColumnSpec>,
    /// Deserializes straight into `dataguard_core::Rule` — the CLI's rule
    /// config *is* the library's `Rule`/`Constraint` shape, tagged by
    /// `type` (see `dataguard_core::Constraint`'s `#[serde(tag = "type")]`).
    #[serde(default)]
    pub rule: Vec<Rule>,
}

#[derive(Debug, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub datatype: String,
}

pub fn parse_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_schema_and_rules() {
        let file = write_config(
            r#"
            [table]
            name = "people"
            path = "people.csv"

            [[table.column]]
            name = "id"
            datatype = "integer"

            [[table.column]]
            name = "name"
            datatype = "string"

            [[table.rule]]
            column_name = "id"
            type = "not_null"

            [[table.rule]]
            column_name = "name"
            type = "length_between"
            min = 1
            max = 50
            "#,
        );
        let config = parse_config(file.path()).unwrap();
        assert_eq!(config.table.name, "people");
        assert_eq!(config.table.column.len(), 2);
        assert_eq!(config.table.rule.len(), 2);
    }

    #[test]
    fn rejects_malformed_toml() {
        let file = write_config("not valid toml {{{");
        let err = parse_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn reports_missing_file() {
        let err = parse_config("/does/not/exist.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
