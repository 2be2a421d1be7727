//! Rendering logic for the review TUI application.
//!
//! These are pure query methods that read state without modification.

use super::{ReviewApp, ViewMode};
use crate::review::{ReviewMode, SubmissionState};
use crate::tui::state::FormField;

const TITLE: &str = "CodeSense - Pull Request Review";
const MASK_CHAR: char = '•';

impl ReviewApp {
    /// Renders the active view.
    pub(super) fn render_active_view(&self) -> String {
        match (self.view_mode, self.result.as_ref()) {
            (ViewMode::Result, Some(_)) => self.render_result_view(),
            _ => self.render_start_view(),
        }
    }

    /// Renders the submission form.
    pub(super) fn render_start_view(&self) -> String {
        let mut output = String::new();

        output.push_str(TITLE);
        output.push_str("\n\n");
        output.push_str(&self.render_mode_selector());
        output.push('\n');
        output.push_str(&self.render_field(FormField::PrUrl, "PR URL", self.form.pr_url()));
        if self.form.mode().requires_credential() {
            let masked: String = self.form.credential().chars().map(|_| MASK_CHAR).collect();
            output.push_str(&self.render_field(FormField::Credential, "Credential", &masked));
        }
        output.push('\n');
        output.push_str(&self.render_start_status());

        output
    }

    fn render_mode_selector(&self) -> String {
        let marker = |mode: ReviewMode| {
            if self.form.mode() == mode {
                "(•)"
            } else {
                "( )"
            }
        };
        format!(
            "Mode: {} Public  {} Private\n",
            marker(ReviewMode::Public),
            marker(ReviewMode::Private)
        )
    }

    fn render_field(&self, field: FormField, label: &str, value: &str) -> String {
        let cursor = if self.form.focus() == field { ">" } else { " " };
        let mut output = format!("{cursor} {label}: {value}\n");
        if let Some(error) = self.form.error_for(field) {
            output.push_str(&format!("    {error}\n"));
        }
        output
    }

    fn render_start_status(&self) -> String {
        match self.controller.state() {
            SubmissionState::Loading(request) => format!("Reviewing {}...\n", request.pr_url),
            SubmissionState::Failed(message) => format!("Error: {message}\n"),
            SubmissionState::Idle | SubmissionState::Succeeded(_) => self.start_status_hints(),
        }
    }

    fn start_status_hints(&self) -> String {
        let hints = if self.width <= 80 {
            "Enter:submit  Tab:field  Ctrl+T:mode  F1:help  Esc:quit"
        } else {
            "Enter:submit  Tab:next field  Ctrl+T:public/private  Ctrl+U:clear  F1:help  Esc:quit"
        };
        format!("{hints}\n")
    }

    /// Renders the review report with its title and status bar.
    pub(super) fn render_result_view(&self) -> String {
        let Some(state) = self.result.as_ref() else {
            return String::new();
        };

        let mut output = String::new();
        output.push_str(&state.title());
        output.push('\n');
        output.push_str(&"─".repeat(self.content_width()));
        output.push('\n');

        let body_height = self.body_height();
        let lines = state.lines();
        let visible: Vec<&str> = lines
            .iter()
            .skip(state.scroll())
            .take(body_height)
            .map(String::as_str)
            .collect();
        for line in &visible {
            output.push_str(line);
            output.push('\n');
        }
        for _ in visible.len()..body_height {
            output.push('\n');
        }

        output.push_str(&self.render_result_status(lines.len(), visible.len()));
        output
    }

    fn render_result_status(&self, total: usize, shown: usize) -> String {
        let hints = if self.width <= 80 {
            "j/k:scroll  b:back  ?:help  q:quit"
        } else {
            "j/k:scroll  PgUp/PgDn:page  g/G:top/end  b:new review  ?:help  q:quit"
        };
        let Some(state) = self.result.as_ref() else {
            return format!("{hints}\n");
        };
        if total == 0 {
            return format!("{hints}  (empty report)\n");
        }
        let first = state.scroll().saturating_add(1);
        let last = state.scroll().saturating_add(shown);
        format!("{hints}  {first}-{last}/{total}\n")
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Start view:
  text keys    Type into the focused field
  Tab          Next field
  Ctrl+T       Switch Public/Private
  Ctrl+U       Clear the focused field
  Backspace    Delete one character
  Enter        Submit for review
  Esc          Quit

Result view:
  j, Down      Scroll down
  k, Up        Scroll up
  PgDn, Space  Page down
  PgUp         Page up
  Home, g      Go to top
  End, G       Go to end
  b, Esc       Start a new review
  q            Quit

Anywhere:
  Ctrl+C       Quit
  F1           Toggle this help

Press any key to close this help.
";
        help_text.to_owned()
    }
}
