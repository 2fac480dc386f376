// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake remote adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{LaunchRequest, RemoteAdapter, RemoteError};
use async_trait::async_trait;
use parking_lot::Mutex;
use rl_core::RemoteReport;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;
use tokio::sync::Notify;

/// Recorded remote call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    Connect { endpoint: String },
    Launch { request: LaunchRequest },
    Disconnect { endpoint: String },
}

struct FakeRemoteState {
    calls: Vec<RemoteCall>,
    unreachable: HashSet<String>,
    protocol_errors: HashMap<String, String>,
    reports: VecDeque<RemoteReport>,
    default_report: RemoteReport,
    disconnect_error: Option<String>,
    hold_launches: bool,
}

/// Fake remote adapter for testing
///
/// Launches return queued reports in order, then the default report
/// (a clean exit unless changed).
#[derive(Clone)]
pub struct FakeRemoteAdapter {
    inner: Arc<Mutex<FakeRemoteState>>,
    started: Arc<Notify>,
    gate: Arc<Notify>,
}

impl Default for FakeRemoteAdapter {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeRemoteState {
                calls: Vec::new(),
                unreachable: HashSet::new(),
                protocol_errors: HashMap::new(),
                reports: VecDeque::new(),
                default_report: RemoteReport::exited(0),
                disconnect_error: None,
                hold_launches: false,
            })),
            started: Arc::new(Notify::new()),
            gate: Arc::new(Notify::new()),
        }
    }
}

impl FakeRemoteAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<RemoteCall> {
        self.inner.lock().calls.clone()
    }

    /// Number of recorded launch calls
    pub fn launch_count(&self) -> usize {
        self.inner
            .lock()
            .calls
            .iter()
            .filter(|c| matches!(c, RemoteCall::Launch { .. }))
            .count()
    }

    /// Make `connect` to this endpoint fail as unreachable
    pub fn set_unreachable(&self, endpoint: &str) {
        self.inner.lock().unreachable.insert(endpoint.to_string());
    }

    /// Make `connect` to this endpoint fail with a protocol error
    pub fn set_protocol_error(&self, endpoint: &str, message: &str) {
        self.inner
            .lock()
            .protocol_errors
            .insert(endpoint.to_string(), message.to_string());
    }

    /// Queue a report for the next launch
    pub fn push_report(&self, report: RemoteReport) {
        self.inner.lock().reports.push_back(report);
    }

    /// Report returned once the queue is empty
    pub fn set_default_report(&self, report: RemoteReport) {
        self.inner.lock().default_report = report;
    }

    /// Make `disconnect` fail with a command error
    pub fn fail_disconnect(&self, message: &str) {
        self.inner.lock().disconnect_error = Some(message.to_string());
    }

    /// Block launches until [`release_launch`](Self::release_launch)
    pub fn hold_launches(&self) {
        self.inner.lock().hold_launches = true;
    }

    /// Let one held launch finish
    pub fn release_launch(&self) {
        self.gate.notify_one();
    }

    /// Wait until a launch call has been recorded
    pub async fn launch_started(&self) {
        self.started.notified().await;
    }
}

#[async_trait]
impl RemoteAdapter for FakeRemoteAdapter {
    async fn connect(&self, endpoint: &str) -> Result<(), RemoteError> {
        let mut inner = self.inner.lock();

        inner.calls.push(RemoteCall::Connect {
            endpoint: endpoint.to_string(),
        });

        if inner.unreachable.contains(endpoint) {
            return Err(RemoteError::Unreachable(format!(
                "{endpoint}: connection refused"
            )));
        }
        if let Some(message) = inner.protocol_errors.get(endpoint) {
            return Err(RemoteError::Protocol(message.clone()));
        }

        Ok(())
    }

    async fn launch(&self, request: &LaunchRequest) -> RemoteReport {
        let hold = {
            let mut inner = self.inner.lock();
            inner.calls.push(RemoteCall::Launch {
                request: request.clone(),
            });
            inner.hold_launches
        };

        // notify_one stores a permit, so a waiter that arrives late still wakes
        self.started.notify_one();
        if hold {
            self.gate.notified().await;
        }

        let mut inner = self.inner.lock();
        match inner.reports.pop_front() {
            Some(report) => report,
            None => inner.default_report.clone(),
        }
    }

    async fn disconnect(&self, endpoint: &str) -> Result<(), RemoteError> {
        let mut inner = self.inner.lock();

        inner.calls.push(RemoteCall::Disconnect {
            endpoint: endpoint.to_string(),
        });

        match &inner.disconnect_error {
            Some(message) => Err(RemoteError::CommandFailed(message.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
