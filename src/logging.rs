//! Structured logging setup.
//!
//! The TUI owns the terminal, so log output goes to a file or nowhere. When
//! `log_file` is configured a `tracing-subscriber` formatter is installed
//! that appends plain-text events to it, filtered by `log_filter`.

use std::sync::Mutex;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, File, OpenOptions};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::CodesenseConfig;
use crate::review::ReviewError;

/// Installs the global subscriber when a log file is configured.
///
/// Returns `true` when a subscriber was installed.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] for an invalid filter directive or
/// when a global subscriber is already set, and [`ReviewError::Io`] when the
/// log file cannot be opened.
pub fn init_logging(config: &CodesenseConfig) -> Result<bool, ReviewError> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(false);
    };

    let filter = build_filter(&config.log_filter)?;
    let file = open_log_file(path)?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .try_init()
        .map_err(|error| ReviewError::Configuration {
            message: format!("failed to install log subscriber: {error}"),
        })?;

    Ok(true)
}

/// Parses a `tracing` filter directive.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] when the directive is invalid.
pub fn build_filter(directive: &str) -> Result<EnvFilter, ReviewError> {
    EnvFilter::try_new(directive).map_err(|error| ReviewError::Configuration {
        message: format!("invalid log filter '{directive}': {error}"),
    })
}

/// Opens `path` for appending, creating it and its parent directories.
///
/// # Errors
///
/// Returns [`ReviewError::Io`] when a directory or the file cannot be
/// created.
pub fn open_log_file(path: &Utf8Path) -> Result<File, ReviewError> {
    let file_name = path.file_name().ok_or_else(|| ReviewError::Io {
        message: format!("invalid log file path '{path}': no file name"),
    })?;
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new(""));

    let (dir, relative_parent) = if parent.is_absolute() {
        let root = open_ambient("/")?;
        let relative = parent.strip_prefix("/").map_err(|_| ReviewError::Io {
            message: format!("failed to normalise log directory '{parent}'"),
        })?;
        (root, relative)
    } else {
        (open_ambient(".")?, parent)
    };

    let is_current_dir =
        relative_parent.as_str().is_empty() || relative_parent == Utf8Path::new(".");
    let target_dir = if is_current_dir {
        dir
    } else {
        dir.create_dir_all(relative_parent)
            .map_err(|error| ReviewError::Io {
                message: format!("failed to create log directory '{parent}': {error}"),
            })?;
        dir.open_dir(relative_parent)
            .map_err(|error| ReviewError::Io {
                message: format!("failed to open log directory '{parent}': {error}"),
            })?
    };

    target_dir
        .open_with(file_name, OpenOptions::new().create(true).append(true))
        .map_err(|error| ReviewError::Io {
            message: format!("failed to open log file '{path}': {error}"),
        })
}

fn open_ambient(path: &str) -> Result<Dir, ReviewError> {
    Dir::open_ambient_dir(path, ambient_authority()).map_err(|error| ReviewError::Io {
        message: format!("failed to open directory '{path}' for logs: {error}"),
    })
}
