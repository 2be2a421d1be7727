//! State management for the review TUI.
//!
//! The submission form backs the start view; the result view state holds a
//! consumed handoff and its scroll position.

mod form;
mod result_view;

pub use form::{FormDefaults, FormField, FormState};
pub use result_view::ResultViewState;
