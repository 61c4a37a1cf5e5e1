use chrono::Local;
use serde::Serialize;
use serde_json::Error;

use dataguard_core::RuleOutcome;

use crate::Reporter;

/// Machine-readable report: one JSON document per validation run, timestamped
/// the way the teacher's `JsonFormatter` stamps its table-shaped reports.
#[derive(Serialize)]
pub struct JsonFormatter {
    version: String,
    timestamp: String,
    #[serde(skip)]
    timestamp_compact: String,
    dataset_path: String,
    rules: Vec<RuleReport>,
    passed: usize,
    failed: usize,
}

#[derive(Serialize)]
struct RuleReport {
    column: String,
    constraint: &'static str,
    failed_count: usize,
    is_passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl JsonFormatter {
    pub fn new(version: String, dataset_path: String) -> Self {
        let now = Local::now();
        Self {
            version,
            timestamp: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            timestamp_compact: now.format("%Y%m%d-%H%M%S").to_string(),
            dataset_path,
            rules: Vec::new(),
            passed: 0,
            failed: 0,
        }
    }

    pub fn get_timestamp_compact(&self) -> &str {
        &self.timestamp_compact
    }

    pub fn record(&mut self, outcome: &RuleOutcome) {
        if outcome.is_passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.rules.push(RuleReport {
            column: outcome.column_name.clone(),
            constraint: outcome.constraint_name,
            failed_count: outcome.failed_count,
            is_passed: outcome.is_passed,
            error: outcome.error.clone(),
        });
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Reporter for JsonFormatter {
    fn on_start(&self) {}

    fn on_loading(&self, _path: &str) {}

    fn on_validation_start(&self) {}

    fn on_result(&mut self, outcome: &RuleOutcome) {
        self.record(outcome);
    }

    fn on_complete(&self, _passed: usize, _failed: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(passed: bool) -> RuleOutcome {
        RuleOutcome {
            column_name: "age".to_string(),
            constraint_name: "not_null",
            checked_count: 10,
            failed_count: if passed { 0 } else { 3 },
            is_passed: passed,
            error: None,
        }
    }

    #[test]
    fn records_tally_passed_and_failed_rules() {
        let mut formatter = JsonFormatter::new("0.1.0".to_string(), "data.csv".to_string());
        formatter.record(&outcome(true));
        formatter.record(&outcome(false));
        assert_eq!(formatter.passed, 1);
        assert_eq!(formatter.failed, 1);
        let json = formatter.to_json().unwrap();
        assert!(json.contains("\"column\": \"age\""));
    }
}
