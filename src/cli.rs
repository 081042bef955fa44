//! CLI argument definitions.
//!
//! All arguments are defined with clap's derive macros and double as
//! environment variables (`REGISTRIES`, `TEMPLATE`) for drop-in use from
//! shell profiles and CI.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// ecr-login - print registry login commands for ECR credentials.
#[derive(Debug, Parser)]
#[command(name = "ecr-login")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Comma-separated registry IDs to fetch tokens for (default: all
    /// registries the current AWS identity can access)
    #[arg(short, long, env = "REGISTRIES", value_delimiter = ',')]
    pub registries: Vec<String>,

    /// Path to a custom output template (overrides the built-in
    /// docker-login format)
    #[arg(short, long, env = "TEMPLATE")]
    pub template: Option<PathBuf>,

    /// AWS region override (default: ambient SDK configuration)
    #[arg(long)]
    pub region: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Resolve the parsed arguments into pipeline configuration.
    pub fn config(&self) -> Config {
        // An empty REGISTRIES env var parses as one empty segment; treat it
        // the same as unset.
        let registry_ids = self
            .registries
            .iter()
            .filter(|id| !id.is_empty())
            .cloned()
            .collect();
        Config::new(registry_ids, self.template.clone())
    }
}
