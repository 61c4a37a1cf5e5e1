use serde::Deserialize;

use crate::cell::Cell;

/// A single checkable condition against one named column.
///
/// Deserializes directly from a rule configuration file (TOML), tagged by
/// `type`. Every variant carries its parameters as named fields rather than
/// a tuple — serde's internally tagged representation can only merge the
/// `type` discriminant into a map, so a bare scalar payload (a newtype
/// variant around `f64` or `String`) would not deserialize; a one-field
/// struct variant does.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Constraint {
    NotNull,
    Unique,
    Gt { x: f64 },
    Ge { x: f64 },
    Lt { x: f64 },
    Le { x: f64 },
    Equal { x: f64 },
    Between { min: f64, max: f64 },
    StrEqual { s: String },
    Contains { s: String },
    StartsWith { s: String },
    EndsWith { s: String },
    MatchesRegex { pattern: String },
    LengthBetween { min: usize, max: usize },
    IsIn { values: Vec<Cell> },
}

impl Constraint {
    pub fn not_null() -> Constraint {
        Constraint::NotNull
    }

    pub fn unique() -> Constraint {
        Constraint::Unique
    }

    pub fn gt(x: f64) -> Constraint {
        Constraint::Gt { x }
    }

    pub fn ge(x: f64) -> Constraint {
        Constraint::Ge { x }
    }

    pub fn lt(x: f64) -> Constraint {
        Constraint::Lt { x }
    }

    pub fn le(x: f64) -> Constraint {
        Constraint::Le { x }
    }

    pub fn equal(x: f64) -> Constraint {
        Constraint::Equal { x }
    }

    pub fn between(lo: f64, hi: f64) -> Constraint {
        Constraint::Between { min: lo, max: hi }
    }

    pub fn str_equal(s: impl Into<String>) -> Constraint {
        Constraint::StrEqual { s: s.into() }
    }

    pub fn contains(s: impl Into<String>) -> Constraint {
        Constraint::Contains { s: s.into() }
    }

    pub fn starts_with(s: impl Into<String>) -> Constraint {
        Constraint::StartsWith { s: s.into() }
    }

    pub fn ends_with(s: impl Into<String>) -> Constraint {
        Constraint::EndsWith { s: s.into() }
    }

    pub fn matches_regex(pattern: impl Into<String>) -> Constraint {
        Constraint::MatchesRegex { pattern: pattern.into() }
    }

    pub fn length_between(lo: usize, hi: usize) -> Constraint {
        Constraint::LengthBetween { min: lo, max: hi }
    }

    pub fn is_in(values: Vec<Cell>) -> Constraint {
        Constraint::IsIn { values }
    }

    /// The name used in error messages and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Constraint::NotNull => "not_null",
            Constraint::Unique => "unique",
            Constraint::Gt { .. } => "gt",
            Constraint::Ge { .. } => "ge",
            Constraint::Lt { .. } => "lt",
            Constraint::Le { .. } => "le",
            Constraint::Equal { .. } => "equal",
            Constraint::Between { .. } => "between",
            Constraint::StrEqual { .. } => "str_equal",
            Constraint::Contains { .. } => "contains",
            Constraint::StartsWith { .. } => "starts_with",
            Constraint::EndsWith { .. } => "ends_with",
            Constraint::MatchesRegex { .. } => "matches_regex",
            Constraint::LengthBetween { .. } => "length_between",
            Constraint::IsIn { .. } => "is_in",
        }
    }
}

/// A constraint bound to the column it checks.
#[derive(Debug, Clone, Deserialize)]
pub struct Rule {
    pub column_name: String,
    #[serde(flatten)]
    pub constraint: Constraint,
}

impl Rule {
    pub fn new(column_name: impl Into<String>, constraint: Constraint) -> Rule {
        Rule { column_name: column_name.into(), constraint }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_matches_constraint_kind() {
        assert_eq!(Constraint::NotNull.name(), "not_null");
        assert_eq!(Constraint::between(0.0, 1.0).name(), "between");
    }

    #[test]
    fn constructors_build_the_matching_variant() {
        assert!(matches!(Constraint::gt(1.0), Constraint::Gt { x } if x == 1.0));
        assert!(matches!(Constraint::contains("a"), Constraint::Contains { s } if s == "a"));
    }

    #[test]
    fn deserializes_from_a_tagged_toml_document() {
        let rule: Rule = toml::from_str(
            r#"
            column_name = "score"
            type = "between"
            min = 0.0
            max = 100.0
            "#,
        )
        .unwrap();
        assert_eq!(rule.column_name, "score");
        assert_eq!(rule.constraint.name(), "between");
        assert!(matches!(rule.constraint, Constraint::Between { min, max } if min == 0.0 && max == 100.0));
    }

    #[test]
    fn deserializes_is_in_with_a_mixed_scalar_list() {
        let rule: Rule = toml::from_str(
            r#"
            column_name = "status"
            type = "is_in"
            values = ["pending", "approved"]
            "#,
        )
        .unwrap();
        assert!(matches!(
            rule.constraint,
            Constraint::IsIn { values } if values == vec![Cell::Str("pending".to_string()), Cell::Str("approved".to_string())]
        ));
    }

    #[test]
    fn deserializes_a_unit_variant_with_no_extra_fields() {
        let rule: Rule = toml::from_str(
            r#"
            column_name = "id"
            type = "not_null"
            "#,
        )
        .unwrap();
        assert!(matches!(rule.constraint, Constraint::NotNull));
    }
}
