use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use serde::Deserialize;

/// Environment variable holding the `tracing` filter directive
pub const LOG_ENV: &str = "SEMANTIC_VERSION_LOG";

/// Filter used when [`LOG_ENV`] is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// CLI configuration structure
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub format: OutputFormat,
    pub order: SortOrder,
}

/// How command results are printed
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum OutputFormat {
    /// One tab separated record per line
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Direction of the `sort` command
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    /// Oldest first
    #[default]
    Ascending,
    /// Newest first
    LatestFirst,
}

impl Config {
    /// Load the configuration from a JSON file, or defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Config::default());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
