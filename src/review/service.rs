//! Review service contract and the report payload it returns.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::error::ReviewError;

/// Markdown review report produced by the review service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewReport {
    markdown: String,
}

impl ReviewReport {
    /// Wraps a markdown document.
    #[must_use]
    pub fn new(markdown: impl Into<String>) -> Self {
        Self {
            markdown: markdown.into(),
        }
    }

    /// Borrow the markdown source.
    #[must_use]
    pub const fn markdown(&self) -> &str {
        self.markdown.as_str()
    }

    /// Builds a report from the `report` field of a service response.
    ///
    /// Strings are taken as markdown. Structured values are pretty-printed
    /// into a fenced `json` block so they still render.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Service`] without a message when the value is
    /// `null`.
    pub fn from_wire(value: Value) -> Result<Self, ReviewError> {
        match value {
            Value::String(markdown) => Ok(Self::new(markdown)),
            Value::Null => Err(ReviewError::Service {
                status: None,
                message: None,
            }),
            structured => {
                let pretty = serde_json::to_string_pretty(&structured).map_err(|error| {
                    ReviewError::Service {
                        status: None,
                        message: Some(format!("unreadable report: {error}")),
                    }
                })?;
                Ok(Self::new(format!("```json\n{pretty}\n```\n")))
            }
        }
    }
}

/// Success body returned by the review service.
#[derive(Debug, Deserialize)]
pub(crate) struct ReviewResponse {
    #[serde(default)]
    pub(crate) report: Value,
}

/// Service that produces a review report for a pull request URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// Requests a review of the pull request at `pr_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Transport`] when the service cannot be reached
    /// and [`ReviewError::Service`] when it reports a failure.
    async fn request_review(&self, pr_url: &str) -> Result<ReviewReport, ReviewError>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ReviewError, ReviewReport};

    #[test]
    fn string_report_is_markdown() {
        let report = ReviewReport::from_wire(json!("# Title")).expect("string report");

        assert_eq!(report.markdown(), "# Title");
    }

    #[test]
    fn structured_report_becomes_json_fence() {
        let report =
            ReviewReport::from_wire(json!({"summary": "ok"})).expect("structured report");

        assert_eq!(
            report.markdown(),
            "```json\n{\n  \"summary\": \"ok\"\n}\n```\n"
        );
    }

    #[test]
    fn null_report_is_a_service_error() {
        assert_eq!(
            ReviewReport::from_wire(serde_json::Value::Null),
            Err(ReviewError::Service {
                status: None,
                message: None
            })
        );
    }
}
