//! HTTP implementation of the review service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::error::ReviewError;
use super::service::{ReviewReport, ReviewResponse, ReviewService};

/// Default base URL of the review backend.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000/api/v1";

const REVIEW_ENDPOINT: &str = "review-pr";

/// Configuration for [`HttpReviewService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReviewServiceConfig {
    /// Base API URL (e.g., `http://localhost:8000/api/v1`).
    pub base_url: String,
    /// Transport timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for HttpReviewServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.to_owned(),
            timeout: None,
        }
    }
}

impl HttpReviewServiceConfig {
    /// Constructs configuration for the given base URL and timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Full URL of the review endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when the base URL is not an
    /// absolute `http` or `https` URL.
    pub fn endpoint(&self) -> Result<Url, ReviewError> {
        let base = Url::parse(self.base_url.trim()).map_err(|error| ReviewError::Configuration {
            message: format!("invalid review service URL '{}': {error}", self.base_url),
        })?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(ReviewError::Configuration {
                message: format!(
                    "review service URL must use http or https, got '{}'",
                    base.scheme()
                ),
            });
        }

        let joined = format!("{}/{REVIEW_ENDPOINT}", base.as_str().trim_end_matches('/'));
        Url::parse(&joined).map_err(|error| ReviewError::Configuration {
            message: format!("invalid review endpoint '{joined}': {error}"),
        })
    }
}

/// Review service backed by the CodeSense HTTP API.
#[derive(Debug, Clone)]
pub struct HttpReviewService {
    client: Client,
    endpoint: Url,
}

impl HttpReviewService {
    /// Creates a service from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when the base URL is invalid or
    /// the HTTP client cannot be built.
    pub fn new(config: &HttpReviewServiceConfig) -> Result<Self, ReviewError> {
        let endpoint = config.endpoint()?;
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|error| ReviewError::Configuration {
            message: format!("failed to configure review HTTP client: {error}"),
        })?;

        Ok(Self { client, endpoint })
    }

    /// URL the service posts review requests to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ReviewService for HttpReviewService {
    async fn request_review(&self, pr_url: &str) -> Result<ReviewReport, ReviewError> {
        debug!(endpoint = %self.endpoint, "posting review request");
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&ReviewRequestBody { pr_url })
            .send()
            .await
            .map_err(|error| ReviewError::Transport {
                message: format!("review request transport failed: {error}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = read_error_message(response).await;
            return Err(ReviewError::Service {
                status: Some(status.as_u16()),
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| ReviewError::Transport {
                message: format!("failed to read review response: {error}"),
            })?;

        let payload: ReviewResponse = serde_json::from_slice(&body).map_err(|error| {
            warn!(%error, "review response JSON decoding failed");
            ReviewError::Service {
                status: Some(status.as_u16()),
                message: None,
            }
        })?;

        ReviewReport::from_wire(payload.report).map_err(|error| match error {
            ReviewError::Service { message, .. } => ReviewError::Service {
                status: Some(status.as_u16()),
                message,
            },
            other => other,
        })
    }
}

#[derive(Debug, Serialize)]
struct ReviewRequestBody<'a> {
    pr_url: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    detail: Option<Value>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        [self.message, self.detail]
            .into_iter()
            .flatten()
            .find_map(|value| match value {
                Value::String(text) if !text.trim().is_empty() => Some(text),
                _ => None,
            })
    }
}

/// Extracts the user-facing message from an error response body.
///
/// `message` wins over `detail`; non-string values and unreadable bodies
/// yield `None`.
async fn read_error_message(response: Response) -> Option<String> {
    let body = response.bytes().await.ok()?;
    parse_error_message(&body)
}

fn parse_error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
