// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Launching a process on a connection and waiting for its outcome.

use crate::classify::classify;
use crate::connection::Connection;
use rl_adapters::{LaunchRequest, RemoteAdapter};
use rl_core::{ConnectError, Failure, LaunchSpec, ProcessOutcome, RemoteState};

/// Submits launches and classifies what the remote reports.
///
/// No retries: one call, one remote launch attempt, one outcome.
#[derive(Clone)]
pub struct ProcessMonitor<R> {
    remote: R,
}

impl<R: RemoteAdapter> ProcessMonitor<R> {
    pub fn new(remote: R) -> Self {
        Self { remote }
    }

    /// Launch `spec` on `conn` and wait until the process exits or stops.
    ///
    /// Fails only with [`ConnectError::Busy`] when another launch is in
    /// flight on the same connection. Every other failure is an outcome.
    pub async fn launch_and_wait(
        &self,
        conn: &Connection,
        spec: &LaunchSpec,
    ) -> Result<ProcessOutcome, ConnectError> {
        let Some(_claim) = conn.begin_launch() else {
            tracing::warn!(endpoint = conn.endpoint(), "launch rejected, connection busy");
            return Err(ConnectError::Busy);
        };

        // Precondition: only connected connections reach the remote
        if !conn.is_connected() {
            let mut diagnostic = format!(
                "launch failed: connection to {} is {}",
                conn.endpoint(),
                conn.status()
            );
            if let Some(e) = conn.last_error() {
                diagnostic.push_str(&format!(" ({e})"));
            }
            return Ok(launch_error(diagnostic));
        }

        let Some(request) = resolve(conn, spec) else {
            return Ok(launch_error("launch failed: no target binary"));
        };

        let report = self.remote.launch(&request).await;
        let outcome = classify(&report);
        tracing::info!(
            endpoint = conn.endpoint(),
            state = %outcome.state(),
            failure = ?outcome.failure(),
            exit_code = outcome.process_exit_code(),
            "launch finished"
        );
        Ok(outcome)
    }
}

fn launch_error(diagnostic: impl Into<String>) -> ProcessOutcome {
    ProcessOutcome::failed(RemoteState::Unknown, None, Failure::LaunchError, diagnostic)
}

/// Pair the spec with the connection's binary context.
///
/// An explicit target in the spec overrides the connection's remote path.
/// `None` when there is nothing to launch.
fn resolve(conn: &Connection, spec: &LaunchSpec) -> Option<LaunchRequest> {
    let binary = conn.binary().map(|p| p.to_path_buf());
    let remote_path = spec
        .target()
        .or(conn.remote_path())
        .map(str::to_string);
    if binary.is_none() && remote_path.is_none() {
        return None;
    }
    Some(LaunchRequest {
        endpoint: conn.endpoint().to_string(),
        platform: conn.platform().to_string(),
        binary,
        remote_path,
        spec: spec.clone(),
    })
}

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod tests;
