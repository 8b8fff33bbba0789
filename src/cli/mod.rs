//! cli
//!
//! Command-line interface layer for sonar-extract.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments
//! - Configure logging
//! - Drive the fetch → group → write pipeline
//!
//! Errors are returned to `main.rs`, which owns the exit code. No business
//! logic terminates the process directly.

pub mod args;

pub use args::Cli;

use std::path::Path;

use anyhow::{Context, Result};

use crate::report::{self, REPORT_FILE_NAME};
use crate::sonar::{fetch_all_issues, SonarClient};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. It is a synchronous
/// wrapper that uses tokio to run the async pipeline.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    log::info!("extract sonar issues: started");

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(extract(&cli))?;

    log::info!("extract sonar issues: done");
    Ok(())
}

/// Configure env_logger.
///
/// `RUST_LOG` takes precedence; otherwise the level defaults to `info`,
/// or `debug` when `--debug` is set.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Async implementation of the pipeline.
async fn extract(cli: &Cli) -> Result<()> {
    let client = SonarClient::new(&cli.url, &cli.token, &cli.project_key);

    let issues = fetch_all_issues(&client).await?;
    let grouped = report::group_by_file(issues);

    report::write_report(Path::new(REPORT_FILE_NAME), &grouped)
        .with_context(|| format!("failed to write {}", REPORT_FILE_NAME))?;

    Ok(())
}
