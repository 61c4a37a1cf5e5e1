use dataguard_core::{DataType, Schema};

use crate::errors::ConfigError;
use crate::parser::Table;

/// Turns a parsed config's column list into the `Schema` `Dataset::from_csv`
/// needs to coerce the CSV's raw text fields.
pub fn construct_schema(table: &Table) -> Result<Schema, ConfigError> {
    let fields = table
        .column
        .iter()
        .map(|column| {
            let dtype = match column.datatype.as_str() {
                "integer" => DataType::Integer,
                "float" => DataType::Float,
                "string" => DataType::String,
                "boolean" => DataType::Boolean,
                other => {
                    return Err(ConfigError::UnknownDatatype {
                        datatype: other.to_string(),
                        column_name: column.name.clone(),
                    })
                }
            };
            Ok((column.name.clone(), dtype))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Schema::new(fields))
}
