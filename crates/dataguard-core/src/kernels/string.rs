//! String predicate kernels, operating over `&[Option<&str>]` views of a
//! `String` column.

use regex::Regex;

use crate::errors::RuleError;

use super::{Ternary, TernarySeq};

fn predicate(values: &[Option<&str>], f: impl Fn(&str) -> bool) -> TernarySeq {
    TernarySeq(values.iter().map(|v| v.map(f)).collect())
}

pub fn equal(values: &[Option<&str>], needle: &str) -> TernarySeq {
    predicate(values, |v| v == needle)
}

pub fn contains(values: &[Option<&str>], needle: &str) -> TernarySeq {
    predicate(values, |v| v.contains(needle))
}

pub fn starts_with(values: &[Option<&str>], prefix: &str) -> TernarySeq {
    predicate(values, |v| v.starts_with(prefix))
}

pub fn ends_with(values: &[Option<&str>], suffix: &str) -> TernarySeq {
    predicate(values, |v| v.ends_with(suffix))
}

/// Partial match, same as `Regex::is_match` — the pattern need not anchor
/// the whole string.
pub fn matches_regex(values: &[Option<&str>], pattern: &str) -> Result<TernarySeq, RuleError> {
    let re = Regex::new(pattern).map_err(|source| RuleError::InvalidRegex {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(predicate(values, |v| re.is_match(v)))
}

/// Unicode scalar value (`char`) count per cell; `None` where the cell is
/// null.
pub fn str_length(values: &[Option<&str>]) -> Vec<Option<i64>> {
    values.iter().map(|v| v.map(|s| s.chars().count() as i64)).collect()
}

pub fn length_between(values: &[Option<&str>], lo: usize, hi: usize) -> TernarySeq {
    predicate(values, |v| {
        let n = v.chars().count();
        n >= lo && n <= hi
    })
}
