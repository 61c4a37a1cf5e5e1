use anyhow::{Context, Result};
use dataguard_core::{validate, Dataset};
use dataguard_reports::{JsonFormatter, Reporter, StdOutFormatter};

use crate::writer::resolve_file_path;
use crate::{constructor::construct_schema, parser::parse_config, Args, OutputFormat};

/// Runs one validation pass and reports it. Returns `true` iff every rule
/// passed — `main` turns that into the process exit code.
pub fn run(args: Args) -> Result<bool> {
    let version = env!("CARGO_PKG_VERSION");
    let config = parse_config(&args.config).with_context(|| {
        format!("failed to load config '{}'", args.config)
    })?;
    let table = &config.table;

    let schema = construct_schema(table)
        .with_context(|| format!("failed to build schema for table '{}'", table.name))?;
    let dataset = Dataset::from_csv(&table.path, &schema)
        .with_context(|| format!("failed to load dataset '{}'", table.path))?;
    let outcomes = validate(&dataset, &table.rule);

    match args.output {
        OutputFormat::Stdout => {
            let mut formatter = StdOutFormatter::new(version.to_string());
            formatter.on_start();
            formatter.on_loading(&table.path);
            formatter.on_validation_start();
            for outcome in &outcomes {
                formatter.on_result(outcome);
            }
            let passed = outcomes.iter().filter(|o| o.is_passed).count();
            let failed = outcomes.len() - passed;
            formatter.on_complete(passed, failed);
            Ok(failed == 0)
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(version.to_string(), table.path.clone());
            for outcome in &outcomes {
                formatter.on_result(outcome);
            }
            let failed = outcomes.iter().filter(|o| !o.is_passed).count();
            let json = formatter.to_json().context("failed to serialize validation report")?;
            let out_path = resolve_file_path(&args.path, formatter.get_timestamp_compact())?;
            std::fs::write(&out_path, json)
                .with_context(|| format!("failed to write report to '{}'", out_path.display()))?;
            println!("Wrote report to {}", out_path.display());
            Ok(failed == 0)
        }
    }
}
