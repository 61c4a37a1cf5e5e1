use thiserror::Error;

/// Failures reading or parsing the TOML rule config itself — distinct from
/// `dataguard_core::RuleError`, which only ever covers dataset/kernel
/// failures. Per-rule failures never surface here either — they fold into a
/// `RuleOutcome` instead, per the core crate's quiet-per-rule-errors policy.
///
/// `run()` reports both this and `dataguard_core::RuleError` through
/// `anyhow::Context` at the CLI boundary rather than a wrapping enum: neither
/// error ever needs to be matched on by the caller, only displayed, and
/// `anyhow` already chains the `#[source]`/`#[from]` context each of these
/// carries.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file '{path}': {source}")]
    Read { path: String, #[source] source: std::io::Error },

    #[error("could not parse config file '{path}': {source}")]
    Parse { path: String, #[source] source: toml::de::Error },

    #[error("unknown datatype '{datatype}' for column '{column_name}'. Supported: integer, float, string, boolean")]
    UnknownDatatype { datatype: String, column_name: String },
}
