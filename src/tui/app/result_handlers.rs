//! Result view handlers.
//!
//! Entering the result view consumes the pending handoff. Without one the
//! app stays on, or returns to, a fresh start view; no error is shown.

use bubbletea_rs::Cmd;
use tracing::debug;

use super::{ReviewApp, ViewMode};
use crate::review::{HandoffEntry, consume};
use crate::tui::messages::AppMsg;
use crate::tui::state::{FormState, ResultViewState};

impl ReviewApp {
    /// Dispatches result view messages to their handlers.
    pub(super) fn handle_result_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::ShowResult => self.handle_show_result(),
            AppMsg::BackToStart => {
                self.return_to_start();
                None
            }
            AppMsg::ScrollUp => self.scroll_result(|state, _| state.scroll_up(1)),
            AppMsg::ScrollDown => self.scroll_result(|state, page| state.scroll_down(1, page)),
            AppMsg::PageUp => self.scroll_result(|state, page| state.scroll_up(page)),
            AppMsg::PageDown => self.scroll_result(|state, page| state.scroll_down(page, page)),
            AppMsg::Home => self.scroll_result(|state, _| state.scroll_to_top()),
            AppMsg::End => self.scroll_result(ResultViewState::scroll_to_bottom),
            _ => {
                debug_assert!(false, "non-result message routed to handle_result_msg");
                None
            }
        }
    }

    fn handle_show_result(&mut self) -> Option<Cmd> {
        match consume(self.handoff.take()) {
            HandoffEntry::Render(handoff) => {
                let state = ResultViewState::new(handoff, &self.report_view, self.content_width());
                self.result = Some(state);
                self.view_mode = ViewMode::Result;
                None
            }
            HandoffEntry::Redirect => {
                debug!("no review to show; redirecting to start view");
                if self.view_mode == ViewMode::Result {
                    self.return_to_start();
                }
                None
            }
        }
    }

    /// Leaves the result view for a fresh start view.
    ///
    /// The form is reseeded from the defaults and the controller returns to
    /// `Idle`, so the next submission starts a new lifecycle.
    fn return_to_start(&mut self) {
        self.result = None;
        self.view_mode = ViewMode::Start;
        self.form = FormState::from_defaults(&self.defaults);
        if !self.controller.state().is_loading() {
            self.controller.reset();
        }
    }

    fn scroll_result<F>(&mut self, scroll: F) -> Option<Cmd>
    where
        F: FnOnce(&mut ResultViewState, usize),
    {
        let page = self.body_height();
        if let Some(state) = self.result.as_mut() {
            scroll(state, page);
        }
        None
    }
}
