//! Tests for loading configuration from the environment and CLI arguments.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use rstest::rstest;

use crate::CodesenseConfig;

/// Loads configuration with an isolated home directory and the given
/// environment overrides.
fn load_with(
    service_url_env: Option<&str>,
    log_filter_env: Option<&str>,
    cli_args: &[&str],
) -> CodesenseConfig {
    let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
    let home = temp_dir.path().to_string_lossy().to_string();

    let _guard = env_lock::lock_env([
        ("HOME", Some(home.as_str())),
        ("XDG_CONFIG_HOME", Some(home.as_str())),
        ("CODESENSE_SERVICE_URL", service_url_env),
        ("CODESENSE_PR_URL", None),
        ("CODESENSE_LOG_FILTER", log_filter_env),
    ]);

    let mut args: Vec<OsString> = vec![OsString::from("codesense")];
    args.extend(cli_args.iter().map(OsString::from));

    CodesenseConfig::load_from_iter(args).expect("config should load")
}

#[rstest]
fn service_url_loads_from_environment_variable() {
    let config = load_with(Some("http://env.example/api"), None, &[]);

    assert_eq!(config.service_url, "http://env.example/api");
}

#[rstest]
fn cli_flags_override_environment() {
    let config = load_with(
        Some("http://env.example/api"),
        None,
        &[
            "-s",
            "http://cli.example/api",
            "--pr-url",
            "https://github.com/a/b/pull/1",
            "--private",
        ],
    );

    assert_eq!(config.service_url, "http://cli.example/api");
    assert_eq!(
        config.pr_url.as_deref(),
        Some("https://github.com/a/b/pull/1")
    );
    assert!(config.private);
}

#[rstest]
fn log_filter_loads_from_environment_variable() {
    let config = load_with(None, Some("codesense=debug"), &[]);

    assert_eq!(config.log_filter, "codesense=debug");
}
