//! Message routing and dispatch logic.
//!
//! Messages are first gated by the active view mode, then dispatched by
//! category. The start view ignores result-view scrolling; the result view
//! ignores form editing and submission so a finished report cannot be
//! resubmitted from underneath it.

use bubbletea_rs::Cmd;

use super::{ReviewApp, ViewMode};
use crate::tui::messages::AppMsg;

impl ReviewApp {
    /// Returns true when the active view does not accept `msg`.
    const fn is_blocked_in_view(&self, msg: &AppMsg) -> bool {
        match self.view_mode {
            ViewMode::Start => {
                msg.is_result() && !matches!(msg, AppMsg::ShowResult | AppMsg::BackToStart)
            }
            ViewMode::Result => msg.is_form() || matches!(msg, AppMsg::Submit),
        }
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This is the core update function: it applies view-mode gating, then
    /// dispatches to the category handler.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if self.is_blocked_in_view(msg) {
            return None;
        }

        if msg.is_form() {
            return self.handle_form_msg(msg);
        }
        if msg.is_submission() {
            return self.handle_submission_msg(msg);
        }
        if msg.is_result() {
            return self.handle_result_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }
}
