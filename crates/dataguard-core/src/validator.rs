use crate::constraint::{Constraint, Rule};
use crate::dataset::Dataset;
use crate::errors::RuleError;
use crate::kernels::TernarySeq;

/// The outcome of checking a single [`Rule`] against a [`Dataset`].
///
/// A rule that couldn't even be evaluated (missing column, kind mismatch,
/// invalid regex) still produces one of these, with `error` set and
/// `is_passed` false, rather than aborting the whole batch.
#[derive(Debug, Clone)]
pub struct RuleOutcome {
    pub column_name: String,
    pub constraint_name: &'static str,
    pub checked_count: usize,
    pub failed_count: usize,
    pub is_passed: bool,
    pub error: Option<String>,
}

impl RuleOutcome {
    fn from_ternary(rule: &Rule, seq: TernarySeq) -> RuleOutcome {
        let checked = seq.iter().filter(|v| v.is_some()).count();
        let failed = seq.false_count();
        RuleOutcome {
            column_name: rule.column_name.clone(),
            constraint_name: rule.constraint.name(),
            checked_count: checked,
            failed_count: failed,
            is_passed: failed == 0,
            error: None,
        }
    }

    fn error(rule: &Rule, err: RuleError) -> RuleOutcome {
        RuleOutcome {
            column_name: rule.column_name.clone(),
            constraint_name: rule.constraint.name(),
            checked_count: 0,
            failed_count: 0,
            is_passed: false,
            error: Some(err.to_string()),
        }
    }
}

/// Checks every rule against `dataset`, one outcome per rule, in order.
///
/// A rule never short-circuits another: a missing column or a kind mismatch
/// produces a failed outcome with an explanatory error, and evaluation moves
/// on to the next rule.
pub fn validate(dataset: &Dataset, rules: &[Rule]) -> Vec<RuleOutcome> {
    rules.iter().map(|rule| validate_one(dataset, rule)).collect()
}

fn validate_one(dataset: &Dataset, rule: &Rule) -> RuleOutcome {
    let Some(column) = dataset.get_column_by_name(&rule.column_name) else {
        return RuleOutcome {
            column_name: rule.column_name.clone(),
            constraint_name: rule.constraint.name(),
            checked_count: 0,
            failed_count: 0,
            is_passed: false,
            error: Some(format!("column '{}' not found", rule.column_name)),
        };
    };

    let seq = match &rule.constraint {
        Constraint::NotNull => Ok(column.not_null()),
        Constraint::Unique => {
            let duplicates = column.duplicates_count();
            return RuleOutcome {
                column_name: rule.column_name.clone(),
                constraint_name: rule.constraint.name(),
                checked_count: column.not_null_count(),
                failed_count: duplicates,
                is_passed: duplicates == 0,
                error: None,
            };
        }
        Constraint::Gt { x } => column.gt(*x),
        Constraint::Ge { x } => column.ge(*x),
        Constraint::Lt { x } => column.lt(*x),
        Constraint::Le { x } => column.le(*x),
        Constraint::Equal { x } => column.equal(*x),
        Constraint::Between { min, max } => column.between(*min, *max),
        Constraint::StrEqual { s } => column.str_equal(s),
        Constraint::Contains { s } => column.contains(s),
        Constraint::StartsWith { s } => column.starts_with(s),
        Constraint::EndsWith { s } => column.ends_with(s),
        Constraint::MatchesRegex { pattern } => column.matches_regex(pattern),
        Constraint::LengthBetween { min, max } => column.length_between(*min, *max),
        Constraint::IsIn { values } => column.is_in(values),
    };

    match seq {
        Ok(seq) => RuleOutcome::from_ternary(rule, seq),
        Err(err) => RuleOutcome::error(rule, err),
    }
}
