mod constructor;
mod errors;
mod parser;
mod rules_doc;
mod runner;
mod writer;

use clap::{Parser, ValueEnum};

use crate::runner::run;

/// Output format for validation results
#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Print results to standard output (human-readable)
    Stdout,
    /// Output results in JSON format
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "dataguard",
    version,
    author = "DataGuard Contributors",
    about = "DataGuard CLI - Data validation tool for CSV tables",
    long_about = "DataGuard validates a CSV table against a batch of declarative rules \
                  described in a TOML config: a dataset path, a column schema, and a list \
                  of constraints bound to column names.\n\n\
                  Example usage:\n  \
                  dataguard --config validation.toml --output stdout"
)]
struct Args {
    /// Path to the TOML configuration file that defines the schema and rules
    #[arg(short, long, value_name = "FILE")]
    config: String,

    /// Output format for validation results
    #[arg(short, long, value_enum, default_value = "stdout")]
    output: OutputFormat,

    /// Path to directory or file for JSON output
    /// - If directory (e.g., ".", "/results/"): generates validation_{timestamp}.json
    /// - If file path: uses the exact filename provided
    /// - Defaults to current directory if not specified
    #[arg(short, long)]
    path: Option<String>,

    /// Enable debug mode with detailed error backtraces and stack traces
    #[arg(short, long)]
    debug: bool,

    /// Print documentation for every supported constraint and exit
    #[arg(long)]
    rules: bool,
}

fn main() {
    let args = Args::parse();

    if args.rules {
        rules_doc::print_rules_documentation();
        return;
    }

    if args.debug {
        std::env::set_var("RUST_BACKTRACE", "1");
    }

    match run(args) {
        Ok(all_passed) => {
            if !all_passed {
                std::process::exit(1)
            }
        }
        Err(err) => {
            if std::env::var("RUST_BACKTRACE").is_ok() {
                eprintln!("Error: {:?}", err);
            } else {
                eprintln!("Error: {:#}", err);
                eprintln!("\nHint: Run with --debug flag for detailed stack traces");
            }
            std::process::exit(2);
        }
    }
}
