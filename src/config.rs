//! Pipeline configuration.
//!
//! The CLI layer resolves flags and environment variables into an explicit
//! [`Config`] that is handed to the pipeline at construction time, so each
//! component can be tested in isolation without ambient lookups.

use std::path::PathBuf;

/// Resolved configuration for one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Registry identifiers to request tokens for. Empty means "all
    /// registries the ambient AWS identity can access".
    pub registry_ids: Vec<String>,

    /// Path to a custom output template. `None` uses the built-in default
    /// that prints `docker login` commands.
    pub template: Option<PathBuf>,
}

impl Config {
    /// Create a configuration for the given registry identifiers and
    /// optional template path.
    pub fn new(registry_ids: Vec<String>, template: Option<PathBuf>) -> Self {
        Self {
            registry_ids,
            template,
        }
    }
}
