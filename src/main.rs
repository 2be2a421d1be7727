//! CodeSense CLI entrypoint: submit a pull request for review in a terminal
//! UI.

use std::io::{self, Write};
use std::process::ExitCode;

use codesense::logging::init_logging;
use codesense::{CodesenseConfig, ReviewError};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ReviewError> {
    let config = load_config()?;
    init_logging(&config)?;
    cli::review_tui::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<CodesenseConfig, ReviewError> {
    CodesenseConfig::load().map_err(|error| ReviewError::Configuration {
        message: error.to_string(),
    })
}
