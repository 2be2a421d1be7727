//! One-shot transfer of a finished review from the start view to the result
//! view.
//!
//! The result view may only be entered with a handoff produced by a
//! successful submission. A missing handoff, or one that has already been
//! taken, sends the user back to the start view.

use super::request::SubmittedRequest;
use super::service::ReviewReport;

/// The submitted request together with the report it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationHandoff {
    request: SubmittedRequest,
    report: ReviewReport,
}

impl NavigationHandoff {
    /// Bundles a submitted request with its report.
    #[must_use]
    pub const fn create(request: SubmittedRequest, report: ReviewReport) -> Self {
        Self { request, report }
    }

    /// The request that produced the report.
    #[must_use]
    pub const fn request(&self) -> &SubmittedRequest {
        &self.request
    }

    /// The review report.
    #[must_use]
    pub const fn report(&self) -> &ReviewReport {
        &self.report
    }
}

/// What the result view should do on entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandoffEntry {
    /// Render the report carried by the handoff.
    Render(NavigationHandoff),
    /// No usable handoff; return to the start view.
    Redirect,
}

/// Decides how the result view is entered.
///
/// A handoff is only usable when it carries a non-empty PR URL.
#[must_use]
pub fn consume(handoff: Option<NavigationHandoff>) -> HandoffEntry {
    match handoff {
        Some(found) if !found.request.pr_url.is_empty() => HandoffEntry::Render(found),
        _ => HandoffEntry::Redirect,
    }
}

/// Single-use cell holding at most one pending handoff.
#[derive(Debug, Default)]
pub struct HandoffSlot {
    pending: Option<NavigationHandoff>,
}

impl HandoffSlot {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Stores a handoff, replacing any that was never taken.
    pub fn put(&mut self, handoff: NavigationHandoff) {
        self.pending = Some(handoff);
    }

    /// Removes and returns the pending handoff.
    pub const fn take(&mut self) -> Option<NavigationHandoff> {
        self.pending.take()
    }

    /// Returns true when a handoff is waiting.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.pending.is_some()
    }
}
