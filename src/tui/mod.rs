//! Terminal User Interface for submitting pull requests for review.
//!
//! This module provides an interactive TUI built on bubbletea-rs with two
//! views: a start view holding the submission form, and a result view that
//! renders the returned review report.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::ReviewApp`]
//! - **View**: Rendering logic in `app::rendering` and [`components`]
//! - **Update**: Message-driven state transitions in `update()`
//!
//! The submission lifecycle itself lives in
//! [`crate::review::SubmissionController`]; the app only forwards form
//! values to it and reacts to its outcomes. A successful review is passed to
//! the result view through a one-shot [`crate::review::HandoffSlot`].
//!
//! # Startup Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, call [`set_launch_context`] before starting the program to
//! provide the review service and form defaults.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;
mod storage;

pub use app::ReviewApp;
pub use storage::{set_initial_terminal_size, set_launch_context};
pub(crate) use storage::{get_form_defaults, get_initial_terminal_size, get_review_service};
