// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! lldb-backed remote adapter

mod script;
mod transcript;

use super::{Endpoint, LaunchRequest, RemoteAdapter, RemoteError};
use crate::env;
use crate::subprocess::run_with_timeout;
use async_trait::async_trait;
use rl_core::{RemoteReport, RemoteState};
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::process::Command;

/// Drives a debug server through `lldb --batch`.
///
/// `connect` only probes the endpoint. Each launch runs its own lldb
/// session which selects the platform, connects, launches and waits.
#[derive(Debug, Clone)]
pub struct LldbAdapter {
    lldb: PathBuf,
    connect_timeout: Duration,
    launch_timeout: Duration,
}

impl Default for LldbAdapter {
    fn default() -> Self {
        Self {
            lldb: env::lldb_binary(),
            connect_timeout: env::connect_timeout(),
            launch_timeout: env::launch_timeout(),
        }
    }
}

impl LldbAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific lldb executable instead of `RL_LLDB`/`lldb`.
    pub fn with_lldb(mut self, lldb: impl Into<PathBuf>) -> Self {
        self.lldb = lldb.into();
        self
    }

    pub fn with_launch_timeout(mut self, timeout: Duration) -> Self {
        self.launch_timeout = timeout;
        self
    }

    async fn run_script(&self, request: &LaunchRequest) -> Result<RemoteReport, String> {
        let dir = tempfile::Builder::new()
            .prefix("rl-lldb")
            .tempdir()
            .map_err(|e| format!("failed to create script directory: {e}"))?;
        let script_path = dir.path().join("launch.lldb");
        tokio::fs::write(&script_path, script::render(request))
            .await
            .map_err(|e| format!("failed to write lldb script: {e}"))?;

        let mut cmd = Command::new(&self.lldb);
        cmd.arg("--batch")
            .arg("-s")
            .arg(&script_path)
            .arg("-k")
            .arg(script::ON_STOP_COMMAND)
            .stdin(Stdio::null());

        let output = run_with_timeout(cmd, self.launch_timeout, "lldb").await?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::debug!(
            status = %output.status,
            stdout_len = stdout.len(),
            stderr_len = stderr.len(),
            "lldb finished"
        );

        let report = transcript::parse(&stdout, &stderr);
        if report.state() == RemoteState::Unknown
            && report.error().is_none()
            && !output.status.success()
        {
            return Ok(report.with_error(format!("lldb exited with {}", output.status)));
        }
        Ok(report)
    }
}

#[async_trait]
impl RemoteAdapter for LldbAdapter {
    async fn connect(&self, endpoint: &str) -> Result<(), RemoteError> {
        let endpoint = Endpoint::parse(endpoint)?;
        let authority = endpoint.authority();
        match tokio::time::timeout(self.connect_timeout, TcpStream::connect(&authority)).await {
            Ok(Ok(_stream)) => Ok(()),
            Ok(Err(e)) => Err(RemoteError::Unreachable(format!("{endpoint}: {e}"))),
            Err(_elapsed) => Err(RemoteError::Unreachable(format!(
                "{endpoint}: timed out after {}ms",
                self.connect_timeout.as_millis()
            ))),
        }
    }

    async fn launch(&self, request: &LaunchRequest) -> RemoteReport {
        // Precondition: the local binary must exist for `target create`
        if let Some(binary) = &request.binary {
            if !binary.exists() {
                return RemoteReport::failed(format!(
                    "local binary does not exist: {}",
                    binary.display()
                ));
            }
        }

        match self.run_script(request).await {
            Ok(report) => report,
            Err(e) => RemoteReport::failed(e),
        }
    }

    async fn disconnect(&self, _endpoint: &str) -> Result<(), RemoteError> {
        // Each launch owns its lldb session; nothing outlives it.
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
