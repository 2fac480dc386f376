// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the adapters crate.
//!
//! These configure the orchestrator only. Nothing read here is forwarded to
//! the launched process.

use std::path::PathBuf;
use std::time::Duration;

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// lldb executable (default: `lldb` on PATH).
pub fn lldb_binary() -> PathBuf {
    std::env::var_os("RL_LLDB")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("lldb"))
}

/// Endpoint reachability probe timeout (default: 5000ms).
pub fn connect_timeout() -> Duration {
    parse_duration_ms("RL_CONNECT_TIMEOUT_MS").unwrap_or(Duration::from_secs(5))
}

/// Upper bound for one lldb batch run (default: 10 minutes).
pub fn launch_timeout() -> Duration {
    parse_duration_ms("RL_LAUNCH_TIMEOUT_MS").unwrap_or(Duration::from_secs(600))
}
