// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Connection status and connection errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Lifecycle status of a remote connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connected,
    Failed,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionStatus::Disconnected => write!(f, "disconnected"),
            ConnectionStatus::Connected => write!(f, "connected"),
            ConnectionStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Errors from establishing or using a connection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectError {
    /// The remote could not be reached at all.
    #[error("remote unreachable: {0}")]
    Unreachable(String),
    /// The remote answered but the session could not be negotiated.
    #[error("protocol negotiation failed: {0}")]
    Protocol(String),
    /// A remote path was set before any target binary was known.
    #[error("no target binary: create a target before setting its remote path")]
    NoTarget,
    /// A launch is already in flight on this connection.
    #[error("connection busy: a launch is already in flight")]
    Busy,
}
