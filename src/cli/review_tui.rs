//! TUI mode for submitting pull requests for review.
//!
//! Builds the HTTP review service from configuration, stores it with the form
//! defaults for `ReviewApp::init()`, and runs the bubbletea-rs program.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;
use tracing::info;

use codesense::tui::state::FormDefaults;
use codesense::tui::{ReviewApp, set_initial_terminal_size, set_launch_context};
use codesense::{CodesenseConfig, HttpReviewService, ReviewError};

/// Runs the review TUI.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] if the service URL is invalid or
/// the HTTP client cannot be built, and [`ReviewError::Io`] if the terminal
/// program fails.
pub async fn run(config: &CodesenseConfig) -> Result<(), ReviewError> {
    let service = HttpReviewService::new(&config.review_service_config()?)?;
    info!(endpoint = %service.endpoint(), "starting review TUI");

    // Already-set context (re-running in the same process) keeps the
    // existing values.
    let _ = set_launch_context(Arc::new(service), form_defaults(config));
    if let Ok((width, height)) = crossterm::terminal::size() {
        let _ = set_initial_terminal_size(width, height);
    }

    run_tui().await.map_err(|error| ReviewError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Seeds the submission form from configuration.
fn form_defaults(config: &CodesenseConfig) -> FormDefaults {
    FormDefaults {
        mode: config.initial_mode(),
        pr_url: config.pr_url.clone().unwrap_or_default(),
        credential: config.resolve_token().unwrap_or_default(),
    }
}

/// Runs the bubbletea-rs program with the `ReviewApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<ReviewApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
