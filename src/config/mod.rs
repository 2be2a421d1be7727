//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.codesense.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `CODESENSE_SERVICE_URL`, `CODESENSE_TOKEN`,
//!    or legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--service-url`/`-s`, `--pr-url`/`-u`,
//!    `--token`/`-t`, `--private`/`-p`
//!
//! # Configuration File
//!
//! ```toml
//! service_url = "https://review.example.com/api/v1"
//! request_timeout_seconds = 120
//! pr_url = "https://github.com/owner/repo/pull/123"
//! private = true
//! log_file = "codesense.log"
//! log_filter = "codesense=debug"
//! ```

use std::env;
use std::time::Duration;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::review::{DEFAULT_SERVICE_URL, HttpReviewServiceConfig, ReviewError, ReviewMode};

const DEFAULT_LOG_FILTER: &str = "info";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use codesense::CodesenseConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = CodesenseConfig::load().expect("failed to load configuration");
/// let service = config.review_service_config().expect("valid service URL");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "CODESENSE",
    discovery(
        dotfile_name = ".codesense.toml",
        config_file_name = "codesense.toml",
        app_name = "codesense"
    )
)]
pub struct CodesenseConfig {
    /// Base URL of the review service.
    ///
    /// Can be provided via:
    /// - CLI: `--service-url <URL>` or `-s <URL>`
    /// - Environment: `CODESENSE_SERVICE_URL`
    /// - Config file: `service_url = "..."`
    ///
    /// Defaults to `http://localhost:8000/api/v1`.
    #[ortho_config(cli_short = 's')]
    pub service_url: String,

    /// Transport timeout for review requests, in seconds.
    ///
    /// Unset means the client waits for as long as the service takes.
    #[ortho_config()]
    pub request_timeout_seconds: Option<u64>,

    /// Pull request URL used to pre-fill the submission form.
    ///
    /// Can be provided via:
    /// - CLI: `--pr-url <URL>` or `-u <URL>`
    /// - Environment: `CODESENSE_PR_URL`
    /// - Config file: `pr_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub pr_url: Option<String>,

    /// Access credential used to pre-fill the form in private mode.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `CODESENSE_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Starts the form in private mode.
    ///
    /// Can be provided via:
    /// - CLI: `--private` / `-p`
    /// - Config file: `private = true`
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment, so there is no `CODESENSE_PRIVATE`.
    #[ortho_config(cli_short = 'p')]
    pub private: bool,

    /// File that receives structured logs. Logging is off when unset.
    #[ortho_config()]
    pub log_file: Option<Utf8PathBuf>,

    /// `tracing` filter directive, e.g. `info` or `codesense=debug`.
    #[ortho_config()]
    pub log_filter: String,
}

impl Default for CodesenseConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_owned(),
            request_timeout_seconds: None,
            pr_url: None,
            token: None,
            private: false,
            log_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl CodesenseConfig {
    /// Resolves the credential from configuration or the legacy
    /// `GITHUB_TOKEN` environment variable.
    #[must_use]
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .filter(|token| !token.trim().is_empty())
    }

    /// Review mode the form starts in.
    #[must_use]
    pub const fn initial_mode(&self) -> ReviewMode {
        if self.private {
            ReviewMode::Private
        } else {
            ReviewMode::Public
        }
    }

    /// Transport timeout, if configured. Zero disables the timeout.
    #[must_use]
    pub fn service_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds
            .filter(|seconds| *seconds > 0)
            .map(Duration::from_secs)
    }

    /// Builds the HTTP review service configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when `service_url` is not an
    /// absolute `http` or `https` URL.
    pub fn review_service_config(&self) -> Result<HttpReviewServiceConfig, ReviewError> {
        let config = HttpReviewServiceConfig::new(self.service_url.clone(), self.service_timeout());
        config.endpoint()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests;
