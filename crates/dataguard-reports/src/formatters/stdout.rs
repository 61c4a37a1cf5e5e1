use dataguard_core::RuleOutcome;

use crate::utils::numbers::format_numbers;
use crate::Reporter;

/// Human-readable report, one line per rule, printed as the validation run
/// progresses.
pub struct StdOutFormatter {}

impl StdOutFormatter {
    pub fn new(version: String) -> Self {
        let s = format!("DataGuard v{} - Validation Report", version);
        let n = s.len();
        let i = "=".repeat(n);

        println!("{}", s);
        println!("{}", i);
        Self {}
    }

    pub fn print_loading_start(&self, path: &str) {
        println!("Loading '{}'...", path);
    }

    pub fn print_validation_start(&self) {
        println!("\nValidating...");
    }

    pub fn print_result(&self, outcome: &RuleOutcome) {
        let status = if outcome.is_passed { "PASSED" } else { "FAILED" };
        let dots_len = 40usize.saturating_sub(
            outcome.column_name.len() + outcome.constraint_name.len() + 3,
        );
        let dots = ".".repeat(dots_len.max(1));
        println!(
            "  {}.{} {} {} {:>6}",
            outcome.column_name,
            outcome.constraint_name,
            dots,
            status,
            format_numbers(outcome.failed_count)
        );
        if let Some(err) = &outcome.error {
            println!("    Error: {}", err);
        }
    }

    pub fn print_summary(&self, passed: usize, failed: usize) {
        println!("\n===================================");
        println!("Result: {} failed, {} passed", failed, passed);
    }
}

impl Reporter for StdOutFormatter {
    fn on_start(&self) {}

    fn on_loading(&self, path: &str) {
        self.print_loading_start(path);
    }

    fn on_validation_start(&self) {
        self.print_validation_start();
    }

    fn on_result(&mut self, outcome: &RuleOutcome) {
        self.print_result(outcome);
    }

    fn on_complete(&self, passed: usize, failed: usize) {
        self.print_summary(passed, failed);
    }
}
