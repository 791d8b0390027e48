//! Command line front end over the version library

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{Config, OutputFormat, SortOrder};
use crate::version::compare::{compare, compare_by_latest};
use crate::version::value::SemanticVersion;

#[derive(Debug, Parser)]
#[command(name = "semantic-version")]
#[command(version, about = "Parse, compare and sort major.minor.patch versions")]
pub struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides the configuration file)
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print versions in sorted order
    Sort {
        /// Sort direction (overrides the configuration file)
        #[arg(long, value_enum)]
        order: Option<SortOrder>,

        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// Print -1, 0 or 1 depending on whether A is older, the same or newer than B
    Compare { a: String, b: String },
    /// Report the normalized form and validity of each version
    Check {
        #[arg(required = true)]
        versions: Vec<String>,
    },
}

#[derive(Debug, Serialize)]
struct CompareRecord<'a> {
    a: &'a str,
    b: &'a str,
    result: i32,
}

#[derive(Debug, Serialize)]
struct CheckRecord<'a> {
    input: &'a str,
    version: SemanticVersion,
    valid: bool,
}

/// Run `cli.command`, writing results to `out`.
///
/// Returns `false` when the command found invalid input.
pub fn execute(cli: &Cli, config: Config, out: &mut impl Write) -> anyhow::Result<bool> {
    let format = cli.format.unwrap_or(config.format);

    match &cli.command {
        Command::Sort { order, versions } => {
            let order = order.unwrap_or(config.order);
            let sorted = sort_versions(versions, order);
            debug!(count = sorted.len(), ?order, "Sorted versions");

            match format {
                OutputFormat::Text => {
                    for version in sorted {
                        writeln!(out, "{version}")?;
                    }
                }
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&sorted)?)?,
            }
            Ok(true)
        }
        Command::Compare { a, b } => {
            let result = compare(a, b) as i32;

            match format {
                OutputFormat::Text => writeln!(out, "{result}")?,
                OutputFormat::Json => writeln!(
                    out,
                    "{}",
                    serde_json::to_string(&CompareRecord { a, b, result })?
                )?,
            }
            Ok(true)
        }
        Command::Check { versions } => {
            let records: Vec<CheckRecord> = versions
                .iter()
                .map(|input| {
                    let version = SemanticVersion::parse(input);
                    if !version.is_valid() {
                        warn!(input = %input, "Invalid version");
                    }
                    CheckRecord {
                        input,
                        version,
                        valid: version.is_valid(),
                    }
                })
                .collect();

            match format {
                OutputFormat::Text => {
                    for record in &records {
                        let validity = if record.valid { "valid" } else { "invalid" };
                        writeln!(out, "{}\t{}\t{validity}", record.input, record.version)?;
                    }
                }
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&records)?)?,
            }
            Ok(records.iter().all(|record| record.valid))
        }
    }
}

/// Stable sort of the raw inputs, keeping their original spelling
fn sort_versions(versions: &[String], order: SortOrder) -> Vec<&str> {
    let mut sorted: Vec<&str> = versions.iter().map(String::as_str).collect();
    sorted.sort_by(|a, b| match order {
        SortOrder::Ascending => compare(*a, *b),
        SortOrder::LatestFirst => compare_by_latest(*a, *b),
    });
    sorted
}
