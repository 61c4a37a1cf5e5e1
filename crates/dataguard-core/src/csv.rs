use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::csv::reader::Format;
use arrow::csv::ReaderBuilder;
use arrow::datatypes::{DataType as ArrowDataType, Field, Schema as ArrowSchema};
use arrow_array::{Array, BooleanArray, Float64Array, Int64Array, RecordBatch, StringArray};

use crate::column::Column;
use crate::dataset::Dataset;
use crate::errors::RuleError;
use crate::schema::{DataType, Schema};

impl Dataset {
    /// Reads a CSV file into a [`Dataset`], using `schema` to coerce each
    /// column from raw text.
    ///
    /// The header row is read to build an all-`Utf8` Arrow schema (mirroring
    /// how a raw batch is first materialized), then every field is coerced
    /// into its declared kind by this crate's own parser rather than Arrow's
    /// `compute::cast` — `cast` is more permissive than the empty-field-is-null,
    /// strict-boolean-token contract this format needs.
    pub fn from_csv(path: impl AsRef<Path>, schema: &Schema) -> Result<Dataset, RuleError> {
        let path = path.as_ref();
        let format = Format::default().with_header(true);
        let (inferred, _) = format.infer_schema(File::open(path)?, None)?;

        let declared_names: Vec<String> =
            schema.fields().iter().map(|(name, _)| name.clone()).collect();
        let header_names: Vec<&str> =
            inferred.fields().iter().map(|f| f.name().as_str()).collect();
        if header_names != declared_names.iter().map(String::as_str).collect::<Vec<_>>() {
            return Err(RuleError::ValidationError(format!(
                "csv header {header_names:?} does not match declared schema {declared_names:?}"
            )));
        }

        let utf8_fields: Vec<Field> = inferred
            .fields()
            .iter()
            .map(|f| Field::new(f.name(), ArrowDataType::Utf8, true))
            .collect();
        let utf8_schema = Arc::new(ArrowSchema::new(utf8_fields));

        let reader = ReaderBuilder::new(utf8_schema)
            .with_header(true)
            .build(File::open(path)?)?;

        let mut batches = Vec::new();
        for batch in reader {
            batches.push(batch?);
        }

        let columns = coerce_columns(&batches, schema)?;
        Dataset::new(declared_names, columns)
    }
}

fn coerce_columns(batches: &[RecordBatch], schema: &Schema) -> Result<Vec<Column>, RuleError> {
    schema
        .fields()
        .iter()
        .enumerate()
        .map(|(i, (name, dtype))| {
            let values: Vec<Option<&str>> = batches
                .iter()
                .flat_map(|batch| {
                    batch
                        .column(i)
                        .as_any()
                        .downcast_ref::<StringArray>()
                        .expect("csv columns are read as Utf8 before coercion")
                        .iter()
                })
                .collect();
            coerce_column(name, *dtype, &values)
        })
        .collect()
}

fn coerce_column(name: &str, dtype: DataType, values: &[Option<&str>]) -> Result<Column, RuleError> {
    match dtype {
        DataType::Integer => {
            let mut out = Vec::with_capacity(values.len());
            for v in values {
                out.push(match blank_is_null(*v) {
                    None => None,
                    Some(s) => Some(s.trim().parse::<i64>().map_err(|_| {
                        RuleError::ValidationError(format!(
                            "column '{name}': '{s}' is not a valid integer"
                        ))
                    })?),
                });
            }
            Ok(Column::Integer(Int64Array::from(out)))
        }
        DataType::Float => {
            let mut out = Vec::with_capacity(values.len());
            for v in values {
                out.push(match blank_is_null(*v) {
                    None => None,
                    Some(s) => Some(s.trim().parse::<f64>().map_err(|_| {
                        RuleError::ValidationError(format!(
                            "column '{name}': '{s}' is not a valid float"
                        ))
                    })?),
                });
            }
            Ok(Column::Floating(Float64Array::from(out)))
        }
        DataType::Boolean => {
            let mut out = Vec::with_capacity(values.len());
            for v in values {
                out.push(match blank_is_null(*v) {
                    None => None,
                    Some(s) => Some(parse_bool(s).ok_or_else(|| {
                        RuleError::ValidationError(format!(
                            "column '{name}': '{s}' is not a valid boolean"
                        ))
                    })?),
                });
            }
            Ok(Column::Boolean(BooleanArray::from(out)))
        }
        DataType::String => {
            let out: Vec<Option<String>> = values
                .iter()
                .map(|v| empty_is_null(*v).map(str::to_string))
                .collect();
            Ok(Column::String(StringArray::from(out)))
        }
    }
}

/// Nulls a field only when trimming leaves nothing — used for Integer/Float/
/// Boolean, where surrounding whitespace is never part of the value.
fn blank_is_null(v: Option<&str>) -> Option<&str> {
    v.filter(|s| !s.trim().is_empty())
}

/// Nulls a field only when it is genuinely empty — string columns take their
/// value verbatim, so a quoted `"  "` is a value, not null.
fn empty_is_null(v: Option<&str>) -> Option<&str> {
    v.filter(|s| !s.is_empty())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn schema() -> Schema {
        Schema::new(vec![
            ("id".to_string(), DataType::Integer),
            ("score".to_string(), DataType::Float),
            ("name".to_string(), DataType::String),
            ("active".to_string(), DataType::Boolean),
        ])
    }

    #[test]
    fn loads_and_coerces_a_well_formed_csv() {
        let file = write_csv("id,score,name,active\n1,1.5,alice,true\n2,2.5,bob,0\n");
        let dataset = Dataset::from_csv(file.path(), &schema()).unwrap();
        assert_eq!(dataset.shape(), (2, 4));
        let id = dataset.get_column_by_name("id").unwrap();
        assert_eq!(id.sum().unwrap(), Some(3.0));
    }

    #[test]
    fn empty_field_becomes_null() {
        let file = write_csv("id,score,name,active\n,1.5,,true\n");
        let dataset = Dataset::from_csv(file.path(), &schema()).unwrap();
        let id = dataset.get_column_by_name("id").unwrap();
        assert_eq!(id.null_count(), 1);
        let name = dataset.get_column_by_name("name").unwrap();
        assert_eq!(name.null_count(), 1);
    }

    #[test]
    fn whitespace_only_string_field_is_not_null() {
        let file = write_csv("id,score,name,active\n1,1.0,\"  \",true\n");
        let dataset = Dataset::from_csv(file.path(), &schema()).unwrap();
        let name = dataset.get_column_by_name("name").unwrap();
        assert_eq!(name.null_count(), 0);
    }

    #[test]
    fn boolean_tokens_are_case_insensitive() {
        let file = write_csv("id,score,name,active\n1,1.0,a,YES\n2,2.0,b,No\n");
        let dataset = Dataset::from_csv(file.path(), &schema()).unwrap();
        let active = dataset.get_column_by_name("active").unwrap();
        assert_eq!(active.null_count(), 0);
    }

    #[test]
    fn invalid_integer_field_fails_the_whole_load() {
        let file = write_csv("id,score,name,active\nnotanumber,1.0,a,true\n");
        let err = Dataset::from_csv(file.path(), &schema()).unwrap_err();
        assert!(matches!(err, RuleError::ValidationError(_)));
    }

    #[test]
    fn header_mismatch_is_rejected() {
        let file = write_csv("a,b,c,d\n1,1.0,x,true\n");
        let err = Dataset::from_csv(file.path(), &schema()).unwrap_err();
        assert!(matches!(err, RuleError::ValidationError(_)));
    }
}
