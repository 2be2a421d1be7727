//! Review request workflow.
//!
//! This module covers everything between the submission form and the
//! rendered report: URL parsing ([`locator`]), request validation
//! ([`validation`]), the service contract ([`service`]) and its HTTP client
//! ([`http`]), the submission state machine ([`submission`]) and the one-shot
//! handoff to the result view ([`handoff`]).

pub mod error;
pub mod handoff;
pub mod http;
pub mod locator;
pub mod request;
pub mod service;
pub mod submission;
pub mod validation;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::{GENERIC_FAILURE_MESSAGE, ReviewError};
pub use handoff::{HandoffEntry, HandoffSlot, NavigationHandoff, consume};
pub use http::{DEFAULT_SERVICE_URL, HttpReviewService, HttpReviewServiceConfig};
pub use locator::{
    LocatorError, PullRequestLocator, PullRequestNumber, RepositoryName, RepositoryOwner,
};
pub use request::{ReviewMode, ReviewModeParseError, ReviewRequest, SubmittedRequest};
pub use service::{ReviewReport, ReviewService};
pub use submission::{PendingReview, SubmissionController, SubmissionState, SubmitOutcome};
pub use validation::{
    INVALID_PR_URL_MESSAGE, MISSING_CREDENTIAL_MESSAGE, RequestField, ValidationResult, validate,
};
