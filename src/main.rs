//! ecr-login CLI entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use ecr_login::cli::Cli;
use ecr_login::fetch::EcrTokenFetcher;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN (stdout carries the rendered output, so logs stay
///    quiet unless asked for)
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("ecr_login=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ecr_login=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("ecr-login starting with args: {:?}", cli);

    let config = cli.config();
    let fetcher = EcrTokenFetcher::from_env(cli.region.clone()).await;

    let mut stdout = io::stdout().lock();
    match ecr_login::run(&config, &fetcher, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ecr-login error: {e}");
            ExitCode::FAILURE
        }
    }
}
