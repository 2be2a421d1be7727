//! Error types exposed by the review request layer.

use thiserror::Error;

/// Message shown when the review call fails without a usable explanation.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to review PR. Please try again.";

/// Errors surfaced while configuring or calling the review service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewError {
    /// The service call could not complete (connection, timeout, body read).
    #[error("network error talking to the review service: {message}")]
    Transport {
        /// Transport-level error detail.
        message: String,
    },

    /// The service responded but signalled failure.
    #[error("review service error{}: {}", status_suffix(*.status), message.as_deref().unwrap_or("no message"))]
    Service {
        /// HTTP status code, when the failure came with one.
        status: Option<u16>,
        /// Human-readable message supplied by the service, if any.
        message: Option<String>,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl ReviewError {
    /// Builds a service error without an HTTP status.
    #[must_use]
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            status: None,
            message: Some(message.into()),
        }
    }

    /// Returns the text shown to the user when a submission fails.
    ///
    /// Service-provided messages are surfaced verbatim; everything else maps
    /// to [`GENERIC_FAILURE_MESSAGE`].
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Service {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_owned(),
        }
    }
}

fn status_suffix(status: Option<u16>) -> String {
    status.map_or_else(String::new, |code| format!(" (status {code})"))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{GENERIC_FAILURE_MESSAGE, ReviewError};

    #[rstest]
    #[case::service_message(ReviewError::service("PR not found"), "PR not found")]
    #[case::blank_service_message(ReviewError::service("   "), GENERIC_FAILURE_MESSAGE)]
    #[case::service_without_message(
        ReviewError::Service { status: Some(500), message: None },
        GENERIC_FAILURE_MESSAGE
    )]
    #[case::transport(
        ReviewError::Transport { message: "connection refused".to_owned() },
        GENERIC_FAILURE_MESSAGE
    )]
    fn user_message_prefers_service_text(#[case] error: ReviewError, #[case] expected: &str) {
        assert_eq!(error.user_message(), expected);
    }

    #[test]
    fn service_error_display_includes_status() {
        let error = ReviewError::Service {
            status: Some(502),
            message: Some("bad gateway".to_owned()),
        };

        assert_eq!(
            error.to_string(),
            "review service error (status 502): bad gateway"
        );
    }
}
