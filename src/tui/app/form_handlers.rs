//! Submission form handlers.
//!
//! The form stays editable in every submission state, including while a
//! review is loading and after a failure.

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::tui::messages::AppMsg;

impl ReviewApp {
    /// Dispatches form editing messages to the form state.
    pub(super) fn handle_form_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::InsertChar(ch) => self.form.insert_char(*ch),
            AppMsg::Backspace => self.form.backspace(),
            AppMsg::ClearField => self.form.clear_field(),
            AppMsg::NextField => self.form.next_field(),
            AppMsg::ToggleMode => self.form.toggle_mode(),
            _ => {
                debug_assert!(false, "non-form message routed to handle_form_msg");
            }
        }
        None
    }
}
