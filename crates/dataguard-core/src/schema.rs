use serde::Deserialize;

/// The declared kind of a column, independent of any particular Arrow
/// array — used by [`crate::csv`] to coerce raw text fields and by rule
/// config to name the kind a rule targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Integer,
    Float,
    String,
    Boolean,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Integer => "integer",
            DataType::Float => "float",
            DataType::String => "string",
            DataType::Boolean => "boolean",
        }
    }
}

/// An ordered list of `(name, type)` pairs describing how to coerce a CSV's
/// columns.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<(String, DataType)>,
}

impl Schema {
    pub fn new(fields: Vec<(String, DataType)>) -> Self {
        Schema { fields }
    }

    pub fn fields(&self) -> &[(String, DataType)] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_is_lowercase() {
        assert_eq!(DataType::Integer.as_str(), "integer");
        assert_eq!(DataType::Boolean.as_str(), "boolean");
    }
}
