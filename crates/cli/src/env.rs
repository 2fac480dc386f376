// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

// --- Logging ---

/// Log filter directives: RL_LOG > RUST_LOG
pub fn log_filter() -> Option<String> {
    std::env::var("RL_LOG")
        .ok()
        .filter(|s| !s.is_empty())
        .or_else(|| std::env::var("RUST_LOG").ok().filter(|s| !s.is_empty()))
}

/// File to write logs to instead of stderr
pub fn log_file() -> Option<PathBuf> {
    std::env::var_os("RL_LOG_FILE")
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}
