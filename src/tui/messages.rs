//! Message types for the TUI update loop.
//!
//! Messages represent user actions, async command results, and system
//! events.

use crate::review::{ReviewError, ReviewReport};

/// Messages for the review TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Form editing
    /// Append a character to the focused field.
    InsertChar(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Empty the focused field.
    ClearField,
    /// Move focus to the next visible field.
    NextField,
    /// Switch between public and private mode.
    ToggleMode,

    // Submission
    /// Validate the form and start a review.
    Submit,
    /// The review service call finished.
    ReviewFinished(Result<ReviewReport, ReviewError>),

    // Result view
    /// Consume the pending handoff and open the result view.
    ShowResult,
    /// Leave the result view and start over.
    BackToStart,
    /// Scroll the report up one line.
    ScrollUp,
    /// Scroll the report down one line.
    ScrollDown,
    /// Scroll the report up one page.
    PageUp,
    /// Scroll the report down one page.
    PageDown,
    /// Jump to the top of the report.
    Home,
    /// Jump to the end of the report.
    End,

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for messages that edit the submission form.
    #[must_use]
    pub const fn is_form(&self) -> bool {
        matches!(
            self,
            Self::InsertChar(_)
                | Self::Backspace
                | Self::ClearField
                | Self::NextField
                | Self::ToggleMode
        )
    }

    /// Returns true for messages that drive the submission lifecycle.
    #[must_use]
    pub const fn is_submission(&self) -> bool {
        matches!(self, Self::Submit | Self::ReviewFinished(_))
    }

    /// Returns true for messages handled by the result view.
    #[must_use]
    pub const fn is_result(&self) -> bool {
        matches!(
            self,
            Self::ShowResult
                | Self::BackToStart
                | Self::ScrollUp
                | Self::ScrollDown
                | Self::PageUp
                | Self::PageDown
                | Self::Home
                | Self::End
        )
    }

    /// Returns true for lifecycle and window messages.
    #[must_use]
    pub const fn is_lifecycle(&self) -> bool {
        matches!(
            self,
            Self::Quit | Self::ToggleHelp | Self::WindowResized { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::AppMsg;
    use crate::review::ReviewReport;

    #[rstest]
    #[case::insert(AppMsg::InsertChar('a'), true, false, false, false)]
    #[case::toggle_mode(AppMsg::ToggleMode, true, false, false, false)]
    #[case::submit(AppMsg::Submit, false, true, false, false)]
    #[case::finished(
        AppMsg::ReviewFinished(Ok(ReviewReport::new("x"))),
        false,
        true,
        false,
        false
    )]
    #[case::show_result(AppMsg::ShowResult, false, false, true, false)]
    #[case::end(AppMsg::End, false, false, true, false)]
    #[case::quit(AppMsg::Quit, false, false, false, true)]
    #[case::resize(AppMsg::WindowResized { width: 1, height: 1 }, false, false, false, true)]
    fn messages_belong_to_one_category(
        #[case] msg: AppMsg,
        #[case] form: bool,
        #[case] submission: bool,
        #[case] result: bool,
        #[case] lifecycle: bool,
    ) {
        assert_eq!(msg.is_form(), form);
        assert_eq!(msg.is_submission(), submission);
        assert_eq!(msg.is_result(), result);
        assert_eq!(msg.is_lifecycle(), lifecycle);
    }
}
