//! Submission lifecycle state machine.
//!
//! [`SubmissionController`] is the only owner of [`SubmissionState`]. Callers
//! drive it with [`SubmissionController::begin`] and
//! [`SubmissionController::complete`]; the TUI issues the service call itself
//! between the two so the event loop never blocks.

use std::mem;

use tracing::{debug, info};

use super::error::ReviewError;
use super::handoff::NavigationHandoff;
use super::request::{ReviewRequest, SubmittedRequest};
use super::service::{ReviewReport, ReviewService};
use super::validation::{ValidationResult, validate};

/// Lifecycle of a single review submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Nothing submitted yet, or the controller was reset.
    #[default]
    Idle,
    /// A request is in flight.
    Loading(SubmittedRequest),
    /// The last request produced a report.
    Succeeded(ReviewReport),
    /// The last request failed with the given user-facing message.
    Failed(String),
}

impl SubmissionState {
    /// Returns true while a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    /// Failure message, when the last request failed.
    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Short label used in logs and the status bar.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading(_) => "loading",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}

/// The single service call to make after a submission starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReview {
    pr_url: String,
}

impl PendingReview {
    /// Pull request URL to send to the review service.
    #[must_use]
    pub const fn pr_url(&self) -> &str {
        self.pr_url.as_str()
    }

    /// Performs the service call.
    ///
    /// # Errors
    ///
    /// Propagates the service's [`ReviewError`].
    pub async fn dispatch(&self, service: &dyn ReviewService) -> Result<ReviewReport, ReviewError> {
        service.request_review(&self.pr_url).await
    }
}

/// Result of asking the controller to start a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The request was accepted; make the described call.
    Started(PendingReview),
    /// The request failed validation; the state is unchanged.
    Rejected(ValidationResult),
    /// A request is already in flight.
    Busy,
    /// A report is waiting to be viewed; call `reset` first.
    AwaitingReset,
}

/// Owns the submission lifecycle.
#[derive(Debug, Default)]
pub struct SubmissionController {
    state: SubmissionState,
}

impl SubmissionController {
    /// Creates an idle controller.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Attempts to start a submission.
    ///
    /// Submits while loading or before a finished report has been reset are
    /// no-ops. Otherwise the request is validated and, if valid, the
    /// controller enters `Loading`.
    pub fn begin(&mut self, request: &ReviewRequest) -> SubmitOutcome {
        match self.state {
            SubmissionState::Loading(_) => {
                debug!("submission ignored: request already in flight");
                return SubmitOutcome::Busy;
            }
            SubmissionState::Succeeded(_) => {
                debug!("submission ignored: report awaiting reset");
                return SubmitOutcome::AwaitingReset;
            }
            SubmissionState::Idle | SubmissionState::Failed(_) => {}
        }

        let validation = validate(request);
        if !validation.is_valid() {
            debug!(errors = validation.len(), "submission rejected by validation");
            return SubmitOutcome::Rejected(validation);
        }

        if request.credential().is_some() {
            debug!("credential validated but not forwarded to the review service");
        }

        let snapshot = request.snapshot();
        info!(pr_url = %snapshot.pr_url, mode = %snapshot.mode, "review submission started");
        let pending = PendingReview {
            pr_url: snapshot.pr_url.clone(),
        };
        self.state = SubmissionState::Loading(snapshot);
        SubmitOutcome::Started(pending)
    }

    /// Records the service outcome.
    ///
    /// Returns the handoff on success. Completions that arrive while no
    /// request is in flight are ignored.
    pub fn complete(
        &mut self,
        outcome: Result<ReviewReport, ReviewError>,
    ) -> Option<NavigationHandoff> {
        if !self.state.is_loading() {
            debug!(
                state = self.state.label(),
                "ignoring review completion with no request in flight"
            );
            return None;
        }

        let SubmissionState::Loading(request) = mem::take(&mut self.state) else {
            return None;
        };

        match outcome {
            Ok(report) => {
                info!(pr_url = %request.pr_url, "review submission succeeded");
                self.state = SubmissionState::Succeeded(report.clone());
                Some(NavigationHandoff::create(request, report))
            }
            Err(error) => {
                info!(pr_url = %request.pr_url, %error, "review submission failed");
                self.state = SubmissionState::Failed(error.user_message());
                None
            }
        }
    }

    /// Returns to `Idle`.
    pub fn reset(&mut self) {
        self.state = SubmissionState::Idle;
    }

    /// Validates, calls the service, and records the outcome in one step.
    ///
    /// Returns the handoff on success and `None` when the request was not
    /// started or the call failed; [`Self::state`] tells the two apart.
    pub async fn submit(
        &mut self,
        request: &ReviewRequest,
        service: &dyn ReviewService,
    ) -> Option<NavigationHandoff> {
        let SubmitOutcome::Started(pending) = self.begin(request) else {
            return None;
        };
        let outcome = pending.dispatch(service).await;
        self.complete(outcome)
    }
}

#[cfg(test)]
#[path = "submission_tests.rs"]
mod tests;
