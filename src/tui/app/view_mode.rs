//! Shared view-mode and layout constants for the review TUI.

/// Rows reserved in the result view for the title, separator and status bar.
pub(crate) const RESULT_CHROME_HEIGHT: usize = 3;
/// Minimum rows for the report body, so at least one line is visible even
/// when the terminal is very short.
pub(crate) const MIN_BODY_HEIGHT: usize = 1;

/// Tracks which view is currently active in the TUI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Submission form.
    #[default]
    Start,
    /// Rendered review report.
    Result,
}
