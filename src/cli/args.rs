//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! The three connection options keep the dotted names of the original
//! interface (`--sq.url`, `--user.token`, `--project.key`); all three are
//! required.

use clap::Parser;

/// Extract open SonarQube issues into a flat text report
#[derive(Parser, Debug)]
#[command(name = "sonar-extract")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// SonarQube or SonarCloud base URL; must end with a trailing slash
    #[arg(long = "sq.url", value_name = "URL")]
    pub url: String,

    /// SonarQube or SonarCloud user token
    #[arg(long = "user.token", value_name = "TOKEN")]
    pub token: String,

    /// SonarQube or SonarCloud project key
    #[arg(long = "project.key", value_name = "KEY")]
    pub project_key: String,

    /// Enable debug logging (includes raw API response bodies)
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
