pub mod formatters;
pub mod utils;

use dataguard_core::RuleOutcome;
pub use formatters::{json::JsonFormatter, stdout::StdOutFormatter};

/// Callbacks a CLI driver invokes while loading a dataset and running a
/// validation pass against it.
///
/// Trimmed from the teacher's table/column/relation-shaped callback set:
/// this crate's `Vec<RuleOutcome>` has no column grouping, so there is one
/// loading phase and one flat list of per-rule outcomes, not a callback per
/// table.
pub trait Reporter {
    fn on_start(&self);
    fn on_loading(&self, path: &str);
    fn on_validation_start(&self);
    fn on_result(&mut self, outcome: &RuleOutcome);
    fn on_complete(&self, passed: usize, failed: usize);
}
