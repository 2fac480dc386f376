// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Connections to remote debug targets.

use rl_adapters::{RemoteAdapter, RemoteError};
use rl_core::{ConnectError, ConnectionStatus};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// Debugger platform used when none is configured.
pub const DEFAULT_PLATFORM: &str = "remote-ios";

/// An established channel to one remote target.
///
/// Carries the binary context launches resolve against. At most one launch
/// may be in flight at a time.
#[derive(Debug)]
pub struct Connection {
    endpoint: String,
    platform: String,
    status: ConnectionStatus,
    last_error: Option<ConnectError>,
    binary: Option<PathBuf>,
    remote_path: Option<String>,
    in_flight: AtomicBool,
}

impl Connection {
    fn new(endpoint: &str, platform: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            platform: platform.to_string(),
            status: ConnectionStatus::Disconnected,
            last_error: None,
            binary: None,
            remote_path: None,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&ConnectError> {
        self.last_error.as_ref()
    }

    /// Local copy of the target binary, once a target was created.
    pub fn binary(&self) -> Option<&Path> {
        self.binary.as_deref()
    }

    /// On-device path of the target binary.
    pub fn remote_path(&self) -> Option<&str> {
        self.remote_path.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }

    /// Whether a launch is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Claim the connection for one launch, or `None` if already claimed.
    pub(crate) fn begin_launch(&self) -> Option<LaunchGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| LaunchGuard {
                flag: &self.in_flight,
            })
    }
}

/// Releases the in-flight claim on drop, including when the launch future
/// is cancelled.
pub(crate) struct LaunchGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for LaunchGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Opens, configures and tears down [`Connection`]s.
///
/// Holds no per-connection state; one manager can serve many connections.
#[derive(Clone)]
pub struct ConnectionManager<R> {
    remote: R,
    platform: String,
}

impl<R: RemoteAdapter> ConnectionManager<R> {
    pub fn new(remote: R) -> Self {
        Self {
            remote,
            platform: DEFAULT_PLATFORM.to_string(),
        }
    }

    /// Select the debugger platform for connections opened from now on.
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    /// Open a channel to `endpoint`. No retries.
    pub async fn connect(&self, endpoint: &str) -> Result<Connection, ConnectError> {
        let mut conn = Connection::new(endpoint, &self.platform);
        self.reconnect(&mut conn).await?;
        Ok(conn)
    }

    /// Probe the endpoint of an existing connection again.
    ///
    /// On failure the connection is left `Failed` with the error recorded.
    pub async fn reconnect(&self, conn: &mut Connection) -> Result<(), ConnectError> {
        match self.remote.connect(&conn.endpoint).await {
            Ok(()) => {
                conn.status = ConnectionStatus::Connected;
                conn.last_error = None;
                tracing::info!(endpoint = %conn.endpoint, "connected");
                Ok(())
            }
            Err(e) => {
                let err = connect_error(e);
                tracing::warn!(endpoint = %conn.endpoint, error = %err, "connect failed");
                conn.status = ConnectionStatus::Failed;
                conn.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Establish the binary context for later launches from a local copy of
    /// the target binary.
    pub fn create_target(&self, conn: &mut Connection, binary: impl Into<PathBuf>) {
        let binary = binary.into();
        tracing::debug!(endpoint = %conn.endpoint, binary = %binary.display(), "target created");
        conn.binary = Some(binary);
    }

    /// Record where the target binary lives on the device.
    pub fn set_remote_path(
        &self,
        conn: &mut Connection,
        path: impl Into<String>,
    ) -> Result<(), ConnectError> {
        if conn.binary.is_none() {
            return Err(ConnectError::NoTarget);
        }
        let path = path.into();
        tracing::debug!(endpoint = %conn.endpoint, remote_path = %path, "remote path set");
        conn.remote_path = Some(path);
        Ok(())
    }

    /// Release the channel. Never fails; a second call does nothing.
    pub async fn disconnect(&self, conn: &mut Connection) {
        if conn.status == ConnectionStatus::Disconnected {
            return;
        }
        if let Err(e) = self.remote.disconnect(&conn.endpoint).await {
            tracing::warn!(endpoint = %conn.endpoint, error = %e, "disconnect failed, ignoring");
        }
        conn.status = ConnectionStatus::Disconnected;
        tracing::info!(endpoint = %conn.endpoint, "disconnected");
    }
}

fn connect_error(e: RemoteError) -> ConnectError {
    match e {
        RemoteError::Unreachable(msg) => ConnectError::Unreachable(msg),
        RemoteError::Protocol(msg) | RemoteError::CommandFailed(msg) => {
            ConnectError::Protocol(msg)
        }
    }
}

#[cfg(test)]
#[path = "connection_tests.rs"]
mod tests;
