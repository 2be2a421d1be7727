//! Request validation performed before anything is submitted.

use std::collections::BTreeMap;
use std::fmt;

use super::locator::PullRequestLocator;
use super::request::ReviewRequest;

/// Message attached to an invalid pull request URL.
pub const INVALID_PR_URL_MESSAGE: &str = "Enter a valid pull request URL.";

/// Message attached to a missing credential in private mode.
pub const MISSING_CREDENTIAL_MESSAGE: &str = "Credential is required for Private mode.";

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RequestField {
    /// The pull request URL input.
    PrUrl,
    /// The access credential input.
    Credential,
}

impl fmt::Display for RequestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrUrl => f.write_str("PR URL"),
            Self::Credential => f.write_str("Credential"),
        }
    }
}

/// Field-level validation outcome. Empty means the request is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    field_errors: BTreeMap<RequestField, String>,
}

impl ValidationResult {
    /// Returns true when no field has an error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    /// Returns the error message for a field, if any.
    #[must_use]
    pub fn error_for(&self, field: RequestField) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    /// Iterates over field errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (RequestField, &str)> {
        self.field_errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    /// Number of fields with an error.
    #[must_use]
    pub fn len(&self) -> usize {
        self.field_errors.len()
    }

    /// Returns true when there are no errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty()
    }

    /// Drops the error for `field`, typically after the user edits it.
    pub fn clear(&mut self, field: RequestField) {
        self.field_errors.remove(&field);
    }

    fn reject(&mut self, field: RequestField, message: &str) {
        self.field_errors.insert(field, message.to_owned());
    }
}

/// Checks the shape of a request before submission.
///
/// The URL must have the canonical pull request shape and, in private mode,
/// the credential must be non-blank. Both checks run independently so every
/// problem is reported at once.
///
/// The pull request number must fit in a `u64`. Larger numbers are
/// rejected as invalid URLs, since the result view titles the report with
/// the parsed number.
///
/// # Example
///
/// ```
/// use codesense::review::{ReviewRequest, validate};
///
/// let result = validate(&ReviewRequest::public("https://github.com/octocat/hello-world/pull/42"));
/// assert!(result.is_valid());
/// ```
#[must_use]
pub fn validate(request: &ReviewRequest) -> ValidationResult {
    let mut result = ValidationResult::default();

    if PullRequestLocator::parse(request.pr_url()).is_err() {
        result.reject(RequestField::PrUrl, INVALID_PR_URL_MESSAGE);
    }

    if request
        .credential()
        .is_some_and(|credential| credential.trim().is_empty())
    {
        result.reject(RequestField::Credential, MISSING_CREDENTIAL_MESSAGE);
    }

    result
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{
        INVALID_PR_URL_MESSAGE, MISSING_CREDENTIAL_MESSAGE, RequestField, validate,
    };
    use crate::review::request::{ReviewMode, ReviewRequest};

    const VALID_URL: &str = "https://github.com/octocat/hello-world/pull/42";

    #[test]
    fn canonical_public_request_is_valid() {
        let result = validate(&ReviewRequest::public(VALID_URL));

        assert!(result.is_valid());
        assert!(result.is_empty());
    }

    #[rstest]
    #[case::repository_url("https://github.com/octocat/hello-world")]
    #[case::surrounding_blanks(" https://github.com/octocat/hello-world/pull/42 ")]
    #[case::free_text("not a url")]
    #[case::number_overflowing_u64("https://github.com/octocat/hello-world/pull/18446744073709551616")]
    fn malformed_url_flags_pr_url(#[case] url: &str) {
        let result = validate(&ReviewRequest::public(url));

        assert_eq!(
            result.error_for(RequestField::PrUrl),
            Some(INVALID_PR_URL_MESSAGE)
        );
        assert_eq!(result.error_for(RequestField::Credential), None);
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("   \t")]
    fn private_blank_credential_flags_credential(#[case] credential: &str) {
        let result = validate(&ReviewRequest::new(
            ReviewMode::Private,
            VALID_URL,
            credential,
        ));

        assert_eq!(
            result.error_for(RequestField::Credential),
            Some(MISSING_CREDENTIAL_MESSAGE)
        );
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn private_request_reports_both_errors() {
        let result = validate(&ReviewRequest::new(ReviewMode::Private, "bad", ""));

        let fields: Vec<_> = result.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![RequestField::PrUrl, RequestField::Credential]);
    }

    #[test]
    fn public_mode_never_checks_credential() {
        let result = validate(&ReviewRequest::new(ReviewMode::Public, VALID_URL, ""));

        assert!(result.is_valid());
    }

    #[test]
    fn private_request_with_credential_is_valid() {
        let result = validate(&ReviewRequest::new(
            ReviewMode::Private,
            VALID_URL,
            "ghp_example",
        ));

        assert!(result.is_valid());
    }

    #[test]
    fn clear_removes_one_field_error() {
        let mut result = validate(&ReviewRequest::new(ReviewMode::Private, "bad", ""));

        result.clear(RequestField::PrUrl);

        assert_eq!(result.error_for(RequestField::PrUrl), None);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn validation_is_idempotent() {
        let request = ReviewRequest::new(ReviewMode::Private, "bad", " ");

        assert_eq!(validate(&request), validate(&request));
    }
}
