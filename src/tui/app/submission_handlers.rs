//! Submission handlers for the review TUI.
//!
//! `Submit` asks the controller to start; a started submission becomes a
//! `Cmd` that performs the single service call and reports back with
//! `ReviewFinished`. A successful completion stores the handoff and asks to
//! open the result view.

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::Cmd;
use tracing::warn;

use super::ReviewApp;
use crate::review::{
    PendingReview, ReviewError, ReviewReport, ReviewService, SubmitOutcome, ValidationResult,
};
use crate::tui::messages::AppMsg;

impl ReviewApp {
    /// Dispatches submission messages to their handlers.
    pub(super) fn handle_submission_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Submit => self.handle_submit(),
            AppMsg::ReviewFinished(outcome) => self.handle_review_finished(outcome),
            _ => {
                debug_assert!(
                    false,
                    "non-submission message routed to handle_submission_msg"
                );
                None
            }
        }
    }

    fn handle_submit(&mut self) -> Option<Cmd> {
        let request = self.form.to_request();
        match self.controller.begin(&request) {
            SubmitOutcome::Started(pending) => {
                self.form.set_errors(ValidationResult::default());
                Some(review_cmd(self.service.clone(), pending))
            }
            SubmitOutcome::Rejected(errors) => {
                self.form.set_errors(errors);
                None
            }
            SubmitOutcome::Busy | SubmitOutcome::AwaitingReset => None,
        }
    }

    fn handle_review_finished(
        &mut self,
        outcome: &Result<ReviewReport, ReviewError>,
    ) -> Option<Cmd> {
        let handoff = self.controller.complete(outcome.clone())?;
        self.handoff.put(handoff);
        Some(show_result_cmd())
    }
}

/// Builds the command that performs the review call.
///
/// Without a configured service the call fails immediately with a
/// configuration error, which the controller surfaces as the generic
/// failure message.
fn review_cmd(service: Option<Arc<dyn ReviewService>>, pending: PendingReview) -> Cmd {
    Box::pin(async move {
        let outcome = match service {
            Some(found) => pending.dispatch(found.as_ref()).await,
            None => {
                warn!("review submitted without a configured review service");
                Err(ReviewError::Configuration {
                    message: "review service not configured".to_owned(),
                })
            }
        };
        Some(Box::new(AppMsg::ReviewFinished(outcome)) as Box<dyn Any + Send>)
    })
}

/// Creates a command that emits `ShowResult` immediately.
fn show_result_cmd() -> Cmd {
    Box::pin(async { Some(Box::new(AppMsg::ShowResult) as Box<dyn Any + Send>) })
}
