// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability

use crate::remote::{LaunchRequest, RemoteAdapter, RemoteError};
use async_trait::async_trait;
use rl_core::RemoteReport;
use tracing::Instrument;

/// Wrapper that adds tracing to any RemoteAdapter
#[derive(Clone)]
pub struct TracedRemote<R> {
    inner: R,
}

impl<R> TracedRemote<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

#[async_trait]
impl<R: RemoteAdapter> RemoteAdapter for TracedRemote<R> {
    async fn connect(&self, endpoint: &str) -> Result<(), RemoteError> {
        async {
            tracing::info!("connecting");
            let start = std::time::Instant::now();
            let result = self.inner.connect(endpoint).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(()) => tracing::info!(elapsed_ms, "connected"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "connect failed"),
            }
            result
        }
        .instrument(tracing::info_span!("remote.connect", endpoint))
        .await
    }

    async fn launch(&self, request: &LaunchRequest) -> RemoteReport {
        async {
            tracing::info!(
                args = request.spec.args().len(),
                env_count = request.spec.env().len(),
                remote_path = request.remote_path.as_deref(),
                "starting"
            );
            let start = std::time::Instant::now();
            let report = self.inner.launch(request).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match report.error() {
                None => tracing::info!(
                    elapsed_ms,
                    state = %report.state(),
                    exit_code = report.exit_code(),
                    "launch finished"
                ),
                Some(error) => tracing::warn!(
                    elapsed_ms,
                    state = %report.state(),
                    error,
                    "launch reported error"
                ),
            }
            report
        }
        .instrument(tracing::info_span!(
            "remote.launch",
            endpoint = request.endpoint.as_str(),
            platform = request.platform.as_str()
        ))
        .await
    }

    async fn disconnect(&self, endpoint: &str) -> Result<(), RemoteError> {
        let result = self.inner.disconnect(endpoint).await;
        tracing::info_span!("remote.disconnect", endpoint).in_scope(|| match &result {
            Ok(()) => tracing::info!("disconnected"),
            Err(e) => tracing::warn!(error = %e, "disconnect failed"),
        });
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
