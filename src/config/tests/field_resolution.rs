//! Tests for derived configuration values (`resolve_token`, `initial_mode`,
//! `service_timeout`, `review_service_config`).

use std::time::Duration;

use rstest::rstest;

use crate::CodesenseConfig;
use crate::review::{ReviewError, ReviewMode};

#[rstest]
fn resolve_token_returns_configured_value() {
    let config = CodesenseConfig {
        token: Some("my-token".to_owned()),
        ..Default::default()
    };

    assert_eq!(config.resolve_token(), Some("my-token".to_owned()));
}

#[rstest]
fn resolve_token_falls_back_to_github_token() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
    let config = CodesenseConfig::default();

    assert_eq!(config.resolve_token(), Some("legacy-token".to_owned()));
}

#[rstest]
fn resolve_token_is_none_without_sources() {
    // Lock and clear GITHUB_TOKEN to ensure test isolation
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", None::<&str>)]);
    let config = CodesenseConfig::default();

    assert_eq!(config.resolve_token(), None);
}

#[rstest]
fn resolve_token_ignores_blank_values() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", None::<&str>)]);
    let config = CodesenseConfig {
        token: Some("   ".to_owned()),
        ..Default::default()
    };

    assert_eq!(config.resolve_token(), None);
}

#[rstest]
#[case(false, ReviewMode::Public)]
#[case(true, ReviewMode::Private)]
fn initial_mode_follows_private_flag(#[case] private: bool, #[case] expected: ReviewMode) {
    let config = CodesenseConfig {
        private,
        ..Default::default()
    };

    assert_eq!(config.initial_mode(), expected);
}

#[rstest]
#[case::unset(None, None)]
#[case::zero_disables(Some(0), None)]
#[case::seconds(Some(90), Some(Duration::from_secs(90)))]
fn service_timeout_maps_seconds(#[case] seconds: Option<u64>, #[case] expected: Option<Duration>) {
    let config = CodesenseConfig {
        request_timeout_seconds: seconds,
        ..Default::default()
    };

    assert_eq!(config.service_timeout(), expected);
}

#[rstest]
fn review_service_config_carries_url_and_timeout() {
    let config = CodesenseConfig {
        service_url: "https://review.example.com/api/v1".to_owned(),
        request_timeout_seconds: Some(30),
        ..Default::default()
    };

    let service = config
        .review_service_config()
        .expect("service config should be valid");

    assert_eq!(service.base_url, "https://review.example.com/api/v1");
    assert_eq!(service.timeout, Some(Duration::from_secs(30)));
}

#[rstest]
fn review_service_config_rejects_invalid_url() {
    let config = CodesenseConfig {
        service_url: "localhost:8000".to_owned(),
        ..Default::default()
    };

    let result = config.review_service_config();

    assert!(
        matches!(result, Err(ReviewError::Configuration { .. })),
        "expected configuration error, got {result:?}"
    );
}
