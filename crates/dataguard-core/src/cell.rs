use serde::Deserialize;

/// A single logically-tagged, possibly-null scalar.
///
/// Columns never actually store `Cell`s internally (see [`crate::column::Column`],
/// which is backed by typed Arrow arrays) — `Cell` exists at the boundaries
/// where a caller needs to name a value without already knowing its kind:
/// building a Column from a literal sequence, and the scalar members passed to
/// `is_in`, which are deserialized straight out of a rule's configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    #[serde(skip)]
    Null,
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Int(v)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Cell::Str(v)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Str(v.to_string())
    }
}

impl From<bool> for Cell {
    fn from(v: bool) -> Self {
        Cell::Bool(v)
    }
}

impl<T> From<Option<T>> for Cell
where
    T: Into<Cell>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Cell::Null,
        }
    }
}
