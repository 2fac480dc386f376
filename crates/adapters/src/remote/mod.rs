// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote debug target adapters

mod endpoint;
mod lldb;

pub use endpoint::Endpoint;
pub use lldb::LldbAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeRemoteAdapter, RemoteCall};

use async_trait::async_trait;
use rl_core::{LaunchSpec, RemoteReport};
use std::path::PathBuf;
use thiserror::Error;

/// Errors from remote operations
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("unreachable: {0}")]
    Unreachable(String),
    #[error("protocol error: {0}")]
    Protocol(String),
    #[error("command failed: {0}")]
    CommandFailed(String),
}

/// Everything an adapter needs to start one process on the remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// Endpoint of the debug server, e.g. `connect://127.0.0.1:62078`.
    pub endpoint: String,
    /// Debugger platform to select, e.g. `remote-ios`.
    pub platform: String,
    /// Local copy of the binary, when one is known.
    pub binary: Option<PathBuf>,
    /// Path of the binary on the device.
    pub remote_path: Option<String>,
    pub spec: LaunchSpec,
}

/// Adapter for a remote debug/execution target (lldb debugserver, etc.)
///
/// `launch` never fails: whatever goes wrong is recorded in the returned
/// [`RemoteReport`] so it can be classified.
#[async_trait]
pub trait RemoteAdapter: Clone + Send + Sync + 'static {
    /// Open or verify a channel to `endpoint`
    async fn connect(&self, endpoint: &str) -> Result<(), RemoteError>;

    /// Launch a process and wait until it exits or stops
    async fn launch(&self, request: &LaunchRequest) -> RemoteReport;

    /// Release whatever `connect` holds for `endpoint`
    async fn disconnect(&self, endpoint: &str) -> Result<(), RemoteError>;
}
