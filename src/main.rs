//! Binary entry point for sonar-extract.
//!
//! All errors propagate up to this boundary as `Result`; this is the only
//! place that decides the process exit code.

use std::process::ExitCode;

fn main() -> ExitCode {
    match sonar_extract::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("aborted: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
