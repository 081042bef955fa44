//! ecr-login - fetch ECR registry credentials and render login commands.
//!
//! A single-shot tool: every run fetches fresh short-lived authorization
//! tokens from ECR, decodes them into `user`/`pass` credentials, and renders
//! them through a text template (by default, one `docker login` command per
//! registry). Nothing is cached or persisted.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Pipeline configuration
//! - [`credential`] - Token decoding into structured credentials
//! - [`error`] - Error types and result alias
//! - [`fetch`] - Authorization token fetching from ECR
//! - [`render`] - Template-based output rendering
//!
//! # Example
//!
//! ```no_run
//! use ecr_login::config::Config;
//! use ecr_login::fetch::EcrTokenFetcher;
//!
//! # async fn example() -> ecr_login::error::Result<()> {
//! let config = Config::new(vec!["123456789012".into()], None);
//! let fetcher = EcrTokenFetcher::from_env(None).await;
//! let mut out = Vec::new();
//! ecr_login::run(&config, &fetcher, &mut out).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod credential;
pub mod error;
pub mod fetch;
pub mod render;

use std::io::Write;

use config::Config;
use error::Result;
use fetch::TokenFetcher;
use render::Renderer;

/// Run the full pipeline: fetch tokens, decode them all, render to `out`.
///
/// Strictly sequential with no retries; the first failure in any stage
/// aborts the run before a single byte of output is written.
pub async fn run<F, W>(config: &Config, fetcher: &F, out: &mut W) -> Result<()>
where
    F: TokenFetcher,
    W: Write,
{
    let records = fetcher.fetch(&config.registry_ids).await?;
    let credentials = credential::decode_all(&records)?;
    tracing::debug!("Decoded {} credentials", credentials.len());
    let renderer = Renderer::from_config(config.template.as_deref())?;
    renderer.render_to(&credentials, out)
}
