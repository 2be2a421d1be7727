//! Lifecycle and window handlers for the review TUI.
//!
//! This module handles terminal resize events and high-level lifecycle
//! messages such as quit and help toggling.

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::tui::messages::AppMsg;

impl ReviewApp {
    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => {
                debug_assert!(
                    false,
                    "non-lifecycle message routed to handle_lifecycle_msg"
                );
                None
            }
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        let content_width = self.content_width();
        let page = self.body_height();
        if let Some(state) = self.result.as_mut() {
            state.relayout(&self.report_view, content_width);
            state.scroll_down(0, page);
        }
        None
    }
}
