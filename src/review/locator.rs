//! Parsing and identity wrappers for pull request URLs.
//!
//! A review can only be requested for a URL of the canonical shape
//! `https://<host>/<owner>/<repo>/pull/<number>`. [`PullRequestLocator`]
//! recognises exactly that shape and exposes its parts so the result view can
//! title the report.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Canonical pull request URL pattern.
///
/// ASCII-only matching keeps case folding to the Latin alphabet, so the
/// Kelvin sign never stands in for `k`.
static PULL_REQUEST_URL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i-u)^https://",
        r"(?P<host>[a-z0-9-]+(?:\.[a-z0-9-]+)*(?::[0-9]{1,5})?)",
        r"/(?P<owner>[a-z0-9-]+)",
        r"/(?P<repository>[a-z0-9-]+)",
        r"/pull/(?P<number>[0-9]+)$",
    ))
    .ok()
});

/// Errors raised while parsing a pull request URL.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocatorError {
    /// The input does not have the canonical pull request URL shape.
    #[error("pull request URL must match https://<host>/<owner>/<repo>/pull/<number>")]
    Malformed,

    /// The pull request number does not fit in 64 bits.
    #[error("pull request number is out of range")]
    NumberOutOfRange,
}

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Pull request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestNumber(u64);

impl PullRequestNumber {
    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Parsed pull request URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestLocator {
    host: String,
    owner: RepositoryOwner,
    repository: RepositoryName,
    number: PullRequestNumber,
}

impl PullRequestLocator {
    /// Parses a pull request URL in the form
    /// `https://<host>/<owner>/<repo>/pull/<number>`.
    ///
    /// The scheme, host and `pull` marker match case-insensitively. Owner and
    /// repository segments accept ASCII letters, digits and hyphens. Input is
    /// not trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::Malformed`] when the input does not have the
    /// canonical shape and [`LocatorError::NumberOutOfRange`] when the number
    /// overflows `u64`.
    ///
    /// # Example
    ///
    /// ```
    /// use codesense::review::PullRequestLocator;
    ///
    /// let locator = PullRequestLocator::parse("https://github.com/octocat/hello-world/pull/42")
    ///     .expect("should parse pull request URL");
    /// assert_eq!(locator.owner().as_str(), "octocat");
    /// assert_eq!(locator.number().get(), 42);
    /// ```
    pub fn parse(input: &str) -> Result<Self, LocatorError> {
        let pattern = PULL_REQUEST_URL.as_ref().ok_or(LocatorError::Malformed)?;
        let captures = pattern.captures(input).ok_or(LocatorError::Malformed)?;

        let segment = |name: &str| {
            captures
                .name(name)
                .map(|found| found.as_str())
                .ok_or(LocatorError::Malformed)
        };

        let number = segment("number")?
            .parse::<u64>()
            .map_err(|_| LocatorError::NumberOutOfRange)?;

        Ok(Self {
            host: segment("host")?.to_owned(),
            owner: RepositoryOwner(segment("owner")?.to_owned()),
            repository: RepositoryName(segment("repository")?.to_owned()),
            number: PullRequestNumber(number),
        })
    }

    /// Host (and optional port) the pull request lives on.
    #[must_use]
    pub const fn host(&self) -> &str {
        self.host.as_str()
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Pull request number.
    #[must_use]
    pub const fn number(&self) -> PullRequestNumber {
        self.number
    }
}

impl fmt::Display for PullRequestLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} #{}",
            self.owner.as_str(),
            self.repository.as_str(),
            self.number.get()
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{LocatorError, PullRequestLocator};

    #[test]
    fn parses_canonical_github_url() {
        let locator = PullRequestLocator::parse("https://github.com/octocat/hello-world/pull/42")
            .expect("canonical URL should parse");

        assert_eq!(locator.host(), "github.com");
        assert_eq!(locator.owner().as_str(), "octocat");
        assert_eq!(locator.repository().as_str(), "hello-world");
        assert_eq!(locator.number().get(), 42);
        assert_eq!(locator.to_string(), "octocat/hello-world #42");
    }

    #[rstest]
    #[case::upper_case_scheme_and_host("HTTPS://GitHub.COM/a/b/pull/1")]
    #[case::enterprise_host_with_port("https://ghe.example.com:8443/team/repo/pull/7")]
    #[case::upper_case_marker("https://github.com/a/b/PULL/1")]
    fn accepts_case_and_host_variants(#[case] input: &str) {
        assert!(PullRequestLocator::parse(input).is_ok(), "{input} should parse");
    }

    #[rstest]
    #[case::missing_pull_segment("https://github.com/octocat/hello-world")]
    #[case::plain_http("http://github.com/a/b/pull/1")]
    #[case::pulls_marker("https://github.com/a/b/pulls/1")]
    #[case::non_numeric_number("https://github.com/a/b/pull/abc")]
    #[case::trailing_slash("https://github.com/a/b/pull/1/")]
    #[case::trailing_path("https://github.com/a/b/pull/1/files")]
    #[case::query_string("https://github.com/a/b/pull/1?diff=split")]
    #[case::underscore_owner("https://github.com/my_org/b/pull/1")]
    #[case::dotted_repository("https://github.com/a/b.rs/pull/1")]
    #[case::leading_whitespace(" https://github.com/a/b/pull/1")]
    #[case::trailing_newline("https://github.com/a/b/pull/1\n")]
    #[case::empty("")]
    fn rejects_non_canonical_urls(#[case] input: &str) {
        assert_eq!(
            PullRequestLocator::parse(input),
            Err(LocatorError::Malformed),
            "{input:?} should be rejected"
        );
    }

    #[test]
    fn rejects_number_overflowing_u64() {
        let result = PullRequestLocator::parse("https://github.com/a/b/pull/99999999999999999999999");

        assert_eq!(result, Err(LocatorError::NumberOutOfRange));
    }
}
