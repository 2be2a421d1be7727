//! Input handling for the TUI application.
//!
//! Translates terminal key events into application messages. The start view
//! is a text form, so printable keys type into the focused field there;
//! the result view uses single-letter shortcuts.

use bubbletea_rs::event::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;

/// View the key was pressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Submission form.
    Start,
    /// Rendered report.
    Result,
}

/// Maps a key event to an application message for the given view.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
/// `Ctrl+C` quits from either view.
#[must_use]
pub const fn map_key_to_message_with_context(
    key: &KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return map_control_key(key.key, context);
    }

    match context {
        InputContext::Start => map_start_key(key.key),
        InputContext::Result => map_result_key(key.key),
    }
}

const fn map_control_key(code: KeyCode, context: InputContext) -> Option<AppMsg> {
    match (code, context) {
        (KeyCode::Char('c'), _) => Some(AppMsg::Quit),
        (KeyCode::Char('t'), InputContext::Start) => Some(AppMsg::ToggleMode),
        (KeyCode::Char('u'), InputContext::Start) => Some(AppMsg::ClearField),
        _ => None,
    }
}

const fn map_start_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Enter => Some(AppMsg::Submit),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => Some(AppMsg::NextField),
        KeyCode::Backspace => Some(AppMsg::Backspace),
        KeyCode::Esc => Some(AppMsg::Quit),
        KeyCode::F(1) => Some(AppMsg::ToggleHelp),
        KeyCode::Char(ch) => Some(AppMsg::InsertChar(ch)),
        _ => None,
    }
}

const fn map_result_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(AppMsg::BackToStart),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::ScrollDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::ScrollUp),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Char('?') | KeyCode::F(1) => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}
