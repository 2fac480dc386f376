// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup.

use crate::env;
use std::ffi::OsStr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "off";

/// Install the global subscriber.
///
/// Logs go to stderr, or to `RL_LOG_FILE` through a non-blocking writer whose
/// guard must outlive the run.
pub fn init() -> Option<WorkerGuard> {
    let filter = build_filter(env::log_filter().as_deref());

    if let Some(path) = env::log_file() {
        match split_log_path(&path) {
            Some((dir, file_name)) => {
                let file_appender = tracing_appender::rolling::never(dir, file_name);
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                    .try_init()
                    .ok()?;
                return Some(guard);
            }
            None => eprintln!(
                "warning: RL_LOG_FILE has no file name ({}), logging to stderr",
                path.display()
            ),
        }
    }

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
    None
}

/// Directory and file name of a log path. Bare names land in the current
/// directory; paths without a file name (`/`, `logs/..`) are rejected.
fn split_log_path(path: &Path) -> Option<(&Path, &OsStr)> {
    let file_name = path.file_name()?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    Some((dir, file_name))
}

/// Parse filter directives, falling back to the default on bad input.
fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
