//! `Model` trait implementation for the review TUI application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `ReviewApp`, handling initialisation, update dispatch, and view rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::{ReviewApp, ViewMode};
use crate::tui::input::{InputContext, map_key_to_message_with_context};
use crate::tui::messages::AppMsg;

impl Model for ReviewApp {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Self::new(crate::tui::get_form_defaults());
        if let Some(service) = crate::tui::get_review_service() {
            model = model.with_service(service);
        }
        (model, None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Any key closes the help overlay
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let mapped = map_key_to_message_with_context(key_msg, self.input_context());
            return mapped.and_then(|app_msg| self.handle_message(&app_msg));
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }
        self.normalise_viewport(&self.render_active_view())
    }
}

impl ReviewApp {
    /// Returns the current input context for context-aware key mapping.
    pub(super) const fn input_context(&self) -> InputContext {
        match self.view_mode {
            ViewMode::Start => InputContext::Start,
            ViewMode::Result => InputContext::Result,
        }
    }

    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap, and padded with spaces to clear stale trailing cells after a
    /// resize.
    fn normalise_viewport(&self, output: &str) -> String {
        let width = usize::from(self.width.max(1));
        let safe_width = width.saturating_sub(1).max(1);
        let height = usize::from(self.height.max(1));

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

fn pad_or_truncate_line(line: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    if line.contains('\x1b') {
        return truncate_ansi_line(line, width);
    }

    let mut output = String::new();
    let mut visible_width = 0_usize;
    for ch in line.chars() {
        if append_visible_char(ch, width, &mut visible_width, &mut output) {
            break;
        }
    }
    output.push_str(&" ".repeat(width.saturating_sub(visible_width)));
    output
}

/// Truncates a line carrying ANSI escapes by visible width, keeping the
/// escapes and closing with a reset if the line left a style open.
fn truncate_ansi_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible_width = 0_usize;
    let mut escape_state = AnsiEscapeState::default();

    for ch in line.chars() {
        if escape_state.in_escape {
            output.push(ch);
            escape_state.ended_with_reset = ch == 'm';
            if ch.is_ascii_alphabetic() {
                escape_state.in_escape = false;
            }
            continue;
        }

        if ch == '\x1b' {
            escape_state.in_escape = true;
            escape_state.had_ansi = true;
            escape_state.ended_with_reset = false;
            output.push(ch);
            continue;
        }

        if append_visible_char(ch, width, &mut visible_width, &mut output) {
            break;
        }
    }

    output.push_str(&" ".repeat(width.saturating_sub(visible_width)));

    if escape_state.had_ansi && !escape_state.ended_with_reset {
        output.push_str("\x1b[0m");
    }

    output
}

#[derive(Default)]
struct AnsiEscapeState {
    in_escape: bool,
    had_ansi: bool,
    ended_with_reset: bool,
}

/// Appends `ch` if it fits. Returns true once the line is full.
fn append_visible_char(
    ch: char,
    width: usize,
    visible_width: &mut usize,
    output: &mut String,
) -> bool {
    let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
    if char_width == 0 {
        output.push(ch);
        return false;
    }

    if visible_width.saturating_add(char_width) > width {
        return true;
    }

    output.push(ch);
    *visible_width = visible_width.saturating_add(char_width);
    false
}
