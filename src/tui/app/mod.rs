//! Main TUI application model implementing the MVU pattern.
//!
//! `ReviewApp` hosts the start and result views. It forwards form values to
//! the [`SubmissionController`], turns a successful outcome into a one-shot
//! handoff, and opens the result view by consuming that handoff.
//!
//! # Module Structure
//!
//! - `routing`: view-mode gating and category dispatch
//! - `form_handlers`: submission form editing
//! - `submission_handlers`: submit and service completion
//! - `result_handlers`: result view entry, exit and scrolling
//! - `lifecycle_handlers`: quit, help and resize
//! - `rendering`: view rendering methods for terminal output
//! - `model_impl`: the `bubbletea_rs::Model` implementation

use std::fmt;
use std::sync::Arc;

use crate::review::{HandoffSlot, ReviewService, SubmissionController, SubmissionState};

use super::components::ReportView;
use super::state::{FormDefaults, FormState, ResultViewState};

mod form_handlers;
mod lifecycle_handlers;
mod model_impl;
mod rendering;
mod result_handlers;
mod routing;
mod submission_handlers;
mod view_mode;

pub use view_mode::ViewMode;
pub(crate) use view_mode::{MIN_BODY_HEIGHT, RESULT_CHROME_HEIGHT};

/// Main application model for the review TUI.
pub struct ReviewApp {
    /// Owns the submission lifecycle state.
    pub(crate) controller: SubmissionController,
    /// Submission form backing the start view.
    pub(crate) form: FormState,
    /// Values the form is reset to when starting over.
    defaults: FormDefaults,
    /// One-shot transfer from a successful submission to the result view.
    pub(crate) handoff: HandoffSlot,
    /// Result view state, present while the result view is open.
    pub(crate) result: Option<ResultViewState>,
    /// Active view.
    pub(crate) view_mode: ViewMode,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Review backend; submissions fail when it is missing.
    service: Option<Arc<dyn ReviewService>>,
    /// Lays out report blocks for the result view.
    report_view: ReportView,
}

impl fmt::Debug for ReviewApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReviewApp")
            .field("controller", &self.controller)
            .field("form", &self.form)
            .field("handoff", &self.handoff)
            .field("view_mode", &self.view_mode)
            .field("show_help", &self.show_help)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("has_service", &self.service.is_some())
            .finish_non_exhaustive()
    }
}

impl ReviewApp {
    /// Creates an application on the start view with a form seeded from
    /// `defaults` and no review service.
    #[must_use]
    pub fn new(defaults: FormDefaults) -> Self {
        let (width, height) = super::get_initial_terminal_size();
        Self {
            controller: SubmissionController::new(),
            form: FormState::from_defaults(&defaults),
            defaults,
            handoff: HandoffSlot::new(),
            result: None,
            view_mode: ViewMode::Start,
            show_help: false,
            width,
            height,
            service: None,
            report_view: ReportView::new(),
        }
    }

    /// Creates an application with an empty public form.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(FormDefaults::default())
    }

    /// Attaches the review service used for submissions.
    #[must_use]
    pub fn with_service(mut self, service: Arc<dyn ReviewService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Current submission lifecycle state.
    #[must_use]
    pub const fn submission_state(&self) -> &SubmissionState {
        self.controller.state()
    }

    /// Submission form state.
    #[must_use]
    pub const fn form(&self) -> &FormState {
        &self.form
    }

    /// Active view.
    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Result view state, when the result view is open.
    #[must_use]
    pub const fn result_view(&self) -> Option<&ResultViewState> {
        self.result.as_ref()
    }

    /// Returns true while a handoff is waiting to be consumed.
    #[must_use]
    pub const fn has_pending_handoff(&self) -> bool {
        self.handoff.is_occupied()
    }

    /// Width available to report content, one column short of the terminal
    /// to avoid autowrap.
    pub(crate) fn content_width(&self) -> usize {
        usize::from(self.width).saturating_sub(1).max(1)
    }

    /// Rows available to the report body in the result view.
    pub(crate) fn body_height(&self) -> usize {
        usize::from(self.height)
            .saturating_sub(RESULT_CHROME_HEIGHT)
            .max(MIN_BODY_HEIGHT)
    }
}


#[cfg(test)]
#[path = "help_overlay_input_tests.rs"]
mod help_overlay_input_tests;
