//! Review request data types.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Visibility of the repository hosting the pull request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReviewMode {
    /// Public repository; no credential needed.
    #[default]
    Public,
    /// Private repository; a credential must accompany the request.
    Private,
}

impl ReviewMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Public => Self::Private,
            Self::Private => Self::Public,
        }
    }

    /// Returns true when a credential is required.
    #[must_use]
    pub const fn requires_credential(self) -> bool {
        matches!(self, Self::Private)
    }
}

impl fmt::Display for ReviewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => f.write_str("Public"),
            Self::Private => f.write_str("Private"),
        }
    }
}

/// Error returned when a review mode string is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown review mode '{value}', expected 'public' or 'private'")]
pub struct ReviewModeParseError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for ReviewMode {
    type Err = ReviewModeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("public") {
            Ok(Self::Public)
        } else if value.eq_ignore_ascii_case("private") {
            Ok(Self::Private)
        } else {
            Err(ReviewModeParseError {
                value: value.to_owned(),
            })
        }
    }
}

/// A review request as entered in the submission form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ReviewRequest {
    mode: ReviewMode,
    pr_url: String,
    credential: String,
}

impl ReviewRequest {
    /// Creates a request from raw form values.
    #[must_use]
    pub fn new(mode: ReviewMode, pr_url: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            mode,
            pr_url: pr_url.into(),
            credential: credential.into(),
        }
    }

    /// Creates a public request with no credential.
    #[must_use]
    pub fn public(pr_url: impl Into<String>) -> Self {
        Self::new(ReviewMode::Public, pr_url, String::new())
    }

    /// Repository visibility selected for this request.
    #[must_use]
    pub const fn mode(&self) -> ReviewMode {
        self.mode
    }

    /// Pull request URL exactly as entered.
    #[must_use]
    pub const fn pr_url(&self) -> &str {
        self.pr_url.as_str()
    }

    /// Credential, exposed only in private mode.
    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.mode
            .requires_credential()
            .then_some(self.credential.as_str())
    }

    /// Snapshot of the fields that travel with a submission.
    #[must_use]
    pub fn snapshot(&self) -> SubmittedRequest {
        SubmittedRequest {
            mode: self.mode,
            pr_url: self.pr_url.clone(),
        }
    }
}

// The credential never appears in logs or panic messages.
impl fmt::Debug for ReviewRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReviewRequest")
            .field("mode", &self.mode)
            .field("pr_url", &self.pr_url)
            .field("credential", &"<redacted>")
            .finish()
    }
}

/// The subset of a request carried from the submission view to the result
/// view. The credential is never part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedRequest {
    /// Repository visibility at submission time.
    pub mode: ReviewMode,
    /// Pull request URL that was reviewed.
    pub pr_url: String,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{ReviewMode, ReviewModeParseError, ReviewRequest};

    #[rstest]
    #[case("public", ReviewMode::Public)]
    #[case("PRIVATE", ReviewMode::Private)]
    #[case("Private", ReviewMode::Private)]
    fn parses_mode_case_insensitively(#[case] input: &str, #[case] expected: ReviewMode) {
        assert_eq!(input.parse::<ReviewMode>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_mode() {
        assert_eq!(
            "internal".parse::<ReviewMode>(),
            Err(ReviewModeParseError {
                value: "internal".to_owned()
            })
        );
    }

    #[test]
    fn credential_hidden_in_public_mode() {
        let request = ReviewRequest::new(ReviewMode::Public, "https://x/a/b/pull/1", "secret");

        assert_eq!(request.credential(), None);
    }

    #[test]
    fn credential_exposed_in_private_mode() {
        let request = ReviewRequest::new(ReviewMode::Private, "https://x/a/b/pull/1", "secret");

        assert_eq!(request.credential(), Some("secret"));
    }

    #[test]
    fn debug_output_redacts_credential() {
        let request = ReviewRequest::new(ReviewMode::Private, "https://x/a/b/pull/1", "secret");

        let rendered = format!("{request:?}");

        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn snapshot_drops_credential() {
        let request = ReviewRequest::new(ReviewMode::Private, "https://x/a/b/pull/1", "secret");

        let snapshot = request.snapshot();

        assert_eq!(snapshot.mode, ReviewMode::Private);
        assert_eq!(snapshot.pr_url, "https://x/a/b/pull/1");
    }
}
