//! Test-support utilities for review submission flows.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::error::ReviewError;
use super::service::{ReviewReport, ReviewService};

/// Deterministic review-service stub used by unit and behavioural tests.
///
/// Clones share one call counter, so a test can keep a handle while the
/// application owns another.
#[derive(Debug, Clone)]
pub struct StubReviewService {
    response: Result<ReviewReport, ReviewError>,
    calls: Arc<AtomicUsize>,
}

impl StubReviewService {
    /// Creates a stub that always returns the provided markdown report.
    #[must_use]
    pub fn success(markdown: impl Into<String>) -> Self {
        Self {
            response: Ok(ReviewReport::new(markdown)),
            calls: Arc::default(),
        }
    }

    /// Creates a stub that always returns the provided error.
    #[must_use]
    pub fn failure(error: ReviewError) -> Self {
        Self {
            response: Err(error),
            calls: Arc::default(),
        }
    }

    /// Number of review requests received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReviewService for StubReviewService {
    async fn request_review(&self, _pr_url: &str) -> Result<ReviewReport, ReviewError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}
