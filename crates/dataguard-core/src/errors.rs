use thiserror::Error;

/// Synchronous, construction- and kernel-level failures.
///
/// Per-rule failures surfaced by [`crate::validator::validate`] are never
/// represented here — they fold into a [`crate::validator::RuleOutcome`]
/// instead, so a batch of rules always yields a full list of outcomes.
#[derive(Error, Debug)]
pub enum RuleError {
    /// `Dataset::new` received headers/columns of mismatched length, or
    /// headers that aren't pairwise unique.
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    /// A kernel was invoked on a column kind it isn't defined for
    /// (e.g. `sum()` on a String column).
    #[error("operation '{operation}' is not defined for {kind} columns")]
    KindMismatch { operation: &'static str, kind: &'static str },

    /// An Arrow computation failed (CSV parsing, casting, string kernels).
    #[error("arrow computation error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),

    /// CSV coercion failure: a field could not be parsed as the schema's
    /// declared type, or the header row doesn't match the schema.
    #[error("invalid data: {0}")]
    ValidationError(String),

    /// Underlying file IO failure while loading a CSV.
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    /// An invalid regex pattern was supplied to `matches_regex`.
    #[error("invalid regex pattern '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
