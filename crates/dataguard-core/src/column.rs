use arrow_array::{Array, BooleanArray, Float64Array, Int64Array, StringArray};

use crate::cell::Cell;
use crate::errors::RuleError;
use crate::kernels::{generic, membership, numeric, string, TernarySeq};

/// A single typed, nullable column, backed directly by an Arrow array.
///
/// Arrow's own validity bitmap is this crate's null model — there is no
/// separate bitmap to keep in sync.
#[derive(Debug)]
pub enum Column {
    Integer(Int64Array),
    Floating(Float64Array),
    String(StringArray),
    Boolean(BooleanArray),
}

impl Column {
    /// Builds an `Integer` column from a sequence of nullable `i64`s.
    pub fn integer(values: impl IntoIterator<Item = Option<i64>>) -> Column {
        Column::Integer(Int64Array::from(values.into_iter().collect::<Vec<_>>()))
    }

    /// Builds a `Floating` column from a sequence of nullable `f64`s.
    pub fn floating(values: impl IntoIterator<Item = Option<f64>>) -> Column {
        Column::Floating(Float64Array::from(values.into_iter().collect::<Vec<_>>()))
    }

    /// Builds a `String` column from a sequence of nullable strings.
    pub fn string<S: Into<String>>(values: impl IntoIterator<Item = Option<S>>) -> Column {
        let values: Vec<Option<String>> = values.into_iter().map(|v| v.map(Into::into)).collect();
        Column::String(StringArray::from(values))
    }

    /// Builds a `Boolean` column from a sequence of nullable `bool`s.
    pub fn boolean(values: impl IntoIterator<Item = Option<bool>>) -> Column {
        Column::Boolean(BooleanArray::from(values.into_iter().collect::<Vec<_>>()))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Column::Integer(_) => "Integer",
            Column::Floating(_) => "Floating",
            Column::String(_) => "String",
            Column::Boolean(_) => "Boolean",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Integer(a) => a.len(),
            Column::Floating(a) => a.len(),
            Column::String(a) => a.len(),
            Column::Boolean(a) => a.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn null_count(&self) -> usize {
        match self {
            Column::Integer(a) => a.null_count(),
            Column::Floating(a) => a.null_count(),
            Column::String(a) => a.null_count(),
            Column::Boolean(a) => a.null_count(),
        }
    }

    pub fn not_null_count(&self) -> usize {
        self.len() - self.null_count()
    }

    /// `true` where the row is null, `false` where it holds a value; length
    /// `len`.
    pub fn is_null(&self) -> Vec<bool> {
        self.null_mask()
    }

    fn null_mask(&self) -> Vec<bool> {
        (0..self.len()).map(|i| self.is_null_at(i)).collect()
    }

    fn is_null_at(&self, i: usize) -> bool {
        match self {
            Column::Integer(a) => a.is_null(i),
            Column::Floating(a) => a.is_null(i),
            Column::String(a) => a.is_null(i),
            Column::Boolean(a) => a.is_null(i),
        }
    }

    /// `true`/`false` per row according to nullity; never itself `null`.
    pub fn not_null(&self) -> TernarySeq {
        generic::not_null(&self.null_mask())
    }

    fn mismatch(&self, operation: &'static str) -> RuleError {
        RuleError::KindMismatch { operation, kind: self.kind() }
    }

    /// Widened view for `Integer`/`Floating` columns; `i64`s widen losslessly
    /// for any value a real dataset would carry.
    fn numeric_values(&self, operation: &'static str) -> Result<Vec<Option<f64>>, RuleError> {
        match self {
            Column::Integer(a) => Ok(a.iter().map(|v| v.map(|v| v as f64)).collect()),
            Column::Floating(a) => Ok(a.iter().collect()),
            _ => Err(self.mismatch(operation)),
        }
    }

    fn string_values(&self, operation: &'static str) -> Result<Vec<Option<&str>>, RuleError> {
        match self {
            Column::String(a) => Ok(a.iter().collect()),
            _ => Err(self.mismatch(operation)),
        }
    }

    pub fn gt(&self, x: f64) -> Result<TernarySeq, RuleError> {
        Ok(numeric::gt(&self.numeric_values("gt")?, x))
    }

    pub fn ge(&self, x: f64) -> Result<TernarySeq, RuleError> {
        Ok(numeric::ge(&self.numeric_values("ge")?, x))
    }

    pub fn lt(&self, x: f64) -> Result<TernarySeq, RuleError> {
        Ok(numeric::lt(&self.numeric_values("lt")?, x))
    }

    pub fn le(&self, x: f64) -> Result<TernarySeq, RuleError> {
        Ok(numeric::le(&self.numeric_values("le")?, x))
    }

    pub fn equal(&self, x: f64) -> Result<TernarySeq, RuleError> {
        Ok(numeric::equal(&self.numeric_values("equal")?, x))
    }

    pub fn between(&self, lo: f64, hi: f64) -> Result<TernarySeq, RuleError> {
        Ok(numeric::between(&self.numeric_values("between")?, lo, hi))
    }

    pub fn sum(&self) -> Result<Option<f64>, RuleError> {
        Ok(numeric::sum(&self.numeric_values("sum")?))
    }

    pub fn mean(&self) -> Result<Option<f64>, RuleError> {
        Ok(numeric::mean(&self.numeric_values("mean")?))
    }

    pub fn min(&self) -> Result<Option<f64>, RuleError> {
        Ok(numeric::min(&self.numeric_values("min")?))
    }

    pub fn max(&self) -> Result<Option<f64>, RuleError> {
        Ok(numeric::max(&self.numeric_values("max")?))
    }

    pub fn std(&self) -> Result<Option<f64>, RuleError> {
        Ok(numeric::std(&self.numeric_values("std")?))
    }

    pub fn median(&self) -> Result<Option<f64>, RuleError> {
        Ok(numeric::median(&self.numeric_values("median")?))
    }

    pub fn str_equal(&self, needle: &str) -> Result<TernarySeq, RuleError> {
        Ok(string::equal(&self.string_values("equal")?, needle))
    }

    pub fn contains(&self, needle: &str) -> Result<TernarySeq, RuleError> {
        Ok(string::contains(&self.string_values("contains")?, needle))
    }

    pub fn starts_with(&self, prefix: &str) -> Result<TernarySeq, RuleError> {
        Ok(string::starts_with(&self.string_values("starts_with")?, prefix))
    }

    pub fn ends_with(&self, suffix: &str) -> Result<TernarySeq, RuleError> {
        Ok(string::ends_with(&self.string_values("ends_with")?, suffix))
    }

    pub fn matches_regex(&self, pattern: &str) -> Result<TernarySeq, RuleError> {
        string::matches_regex(&self.string_values("matches_regex")?, pattern)
    }

    /// Unicode scalar value (`char`) count per cell, `None` where null.
    pub fn str_length(&self) -> Result<Vec<Option<i64>>, RuleError> {
        Ok(string::str_length(&self.string_values("str_length")?))
    }

    pub fn length_between(&self, lo: usize, hi: usize) -> Result<TernarySeq, RuleError> {
        Ok(string::length_between(&self.string_values("length_between")?, lo, hi))
    }

    pub fn is_in(&self, members: &[Cell]) -> Result<TernarySeq, RuleError> {
        match self {
            Column::Integer(a) => {
                let members: Vec<i64> = members
                    .iter()
                    .filter_map(|c| match c {
                        Cell::Int(v) => Some(*v),
                        _ => None,
                    })
                    .collect();
                let values: Vec<Option<i64>> = a.iter().collect();
                Ok(membership::is_in_integer(&values, &members))
            }
            Column::Floating(a) => {
                let members: Vec<f64> = members
                    .iter()
                    .filter_map(|c| match c {
                        Cell::Float(v) => Some(*v),
                        _ => None,
                    })
                    .collect();
                let values: Vec<Option<f64>> = a.iter().collect();
                Ok(membership::is_in_floating(&values, &members))
            }
            Column::String(a) => {
                let members: Vec<&str> = members
                    .iter()
                    .filter_map(|c| match c {
                        Cell::Str(v) => Some(v.as_str()),
                        _ => None,
                    })
                    .collect();
                let values: Vec<Option<&str>> = a.iter().collect();
                Ok(membership::is_in_string(&values, &members))
            }
            Column::Boolean(_) => Err(self.mismatch("is_in")),
        }
    }

    fn uniqueness(&self) -> (usize, usize) {
        match self {
            Column::Integer(a) => {
                generic::count_unique_and_duplicates(a.iter().flatten())
            }
            Column::Floating(a) => generic::count_unique_and_duplicates(
                a.iter().flatten().map(canonicalize_nan),
            ),
            Column::String(a) => generic::count_unique_and_duplicates(a.iter().flatten()),
            Column::Boolean(a) => generic::count_unique_and_duplicates(a.iter().flatten()),
        }
    }

    pub fn unique_count(&self) -> usize {
        self.uniqueness().0
    }

    pub fn duplicates_count(&self) -> usize {
        self.uniqueness().1
    }
}

/// Normalizes NaN's bit pattern so every NaN counts as the same distinct
/// value for uniqueness purposes, unlike `is_in`'s IEEE equality.
fn canonicalize_nan(v: f64) -> u64 {
    if v.is_nan() {
        f64::NAN.to_bits()
    } else {
        v.to_bits()
    }
}
