//! CLI operation mode handlers.
//!
//! - [`review_tui`]: interactive TUI for submitting a pull request and
//!   reading its review

pub mod review_tui;
