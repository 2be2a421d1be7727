//! CodeSense library crate for requesting automated pull request reviews.
//!
//! The library validates a pull request URL (and, for private repositories,
//! an access credential), submits it to a review service, and renders the
//! returned markdown report. The workflow is split into:
//!
//! - [`review`]: validation, the submission state machine, the one-shot
//!   handoff to the result view, and the HTTP review service client
//! - [`report`]: markdown to structured block conversion
//! - [`tui`]: the bubbletea-rs terminal interface hosting both views
//! - [`config`] and [`logging`]: layered configuration and file logging

pub mod config;
pub mod logging;
pub mod report;
pub mod review;
pub mod tui;

pub use config::CodesenseConfig;
pub use review::{
    HttpReviewService, HttpReviewServiceConfig, PullRequestLocator, ReviewError, ReviewMode,
    ReviewReport, ReviewRequest, ReviewService, SubmissionController, SubmissionState,
};
