//! Startup context storage for the review TUI.
//!
//! `bubbletea_rs::Model::init` takes no arguments, so everything the app
//! needs at startup is stored in `OnceLock` values by the CLI wiring before
//! the program runs and read back by `ReviewApp::init()`.

use std::sync::{Arc, OnceLock};

use crossterm::terminal;

use crate::review::ReviewService;

use super::state::FormDefaults;

/// Review service and form defaults for the session.
static LAUNCH_CONTEXT: OnceLock<LaunchContext> = OnceLock::new();

/// Terminal dimensions captured before the program starts, so the first frame
/// uses the actual terminal size.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

struct LaunchContext {
    service: Arc<dyn ReviewService>,
    defaults: FormDefaults,
}

/// Sets the review service and form defaults for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. Without it
/// every submission fails with the generic failure message.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_launch_context(service: Arc<dyn ReviewService>, defaults: FormDefaults) -> bool {
    LAUNCH_CONTEXT
        .set(LaunchContext { service, defaults })
        .is_ok()
}

/// Sets the initial terminal dimensions for the TUI application.
///
/// # Returns
///
/// `true` if the dimensions were set, `false` if they were already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Gets the configured review service, if any.
pub(crate) fn get_review_service() -> Option<Arc<dyn ReviewService>> {
    LAUNCH_CONTEXT
        .get()
        .map(|context| Arc::clone(&context.service))
}

/// Gets the form defaults, falling back to an empty public form.
pub(crate) fn get_form_defaults() -> FormDefaults {
    LAUNCH_CONTEXT
        .get()
        .map(|context| context.defaults.clone())
        .unwrap_or_default()
}

/// Gets the initial terminal dimensions.
///
/// Prefers stored dimensions, then the live terminal size, then 80x24.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .or_else(|| {
            terminal::size()
                .ok()
                .filter(|(width, height)| *width > 0 && *height > 0)
        })
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}
