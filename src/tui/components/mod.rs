//! UI components for the review TUI.
//!
//! Components are stateless renderers: they take report content and a width
//! and return terminal lines. The application model owns all state.

mod code_highlight;
mod report_view;
mod text_wrap;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub use code_highlight::{CodeHighlighter, HighlightError};
pub use report_view::{ReportView, inline_text};
pub use text_wrap::{wrap_to_width, wrap_words};
