// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! What a remote adapter observed for one launch, before classification.

use crate::outcome::RemoteState;

/// Raw observations from a launch attempt.
///
/// An exit code is only ever recorded together with `Exited`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemoteReport {
    state: RemoteState,
    exit_code: Option<i32>,
    error: Option<String>,
    thread: Option<String>,
    frames: Vec<String>,
    output: Vec<String>,
}

impl RemoteReport {
    pub fn exited(code: i32) -> Self {
        Self {
            state: RemoteState::Exited,
            exit_code: Some(code),
            ..Self::default()
        }
    }

    /// Stopped with the selected thread's description and call frames,
    /// innermost first.
    pub fn stopped(thread: impl Into<String>, frames: Vec<String>) -> Self {
        Self {
            state: RemoteState::Stopped,
            thread: Some(thread.into()),
            frames,
            ..Self::default()
        }
    }

    pub fn crashed() -> Self {
        Self {
            state: RemoteState::Crashed,
            ..Self::default()
        }
    }

    pub fn unknown() -> Self {
        Self::default()
    }

    /// The launch call itself failed; nothing is known about the process.
    pub fn failed(error: impl Into<String>) -> Self {
        Self::unknown().with_error(error)
    }

    /// Attach the raw error text the remote returned.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Attach the lines the launched process printed.
    pub fn with_output(mut self, output: Vec<String>) -> Self {
        self.output = output;
        self
    }

    pub fn state(&self) -> RemoteState {
        self.state
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    /// Raw error text, verbatim.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn thread(&self) -> Option<&str> {
        self.thread.as_deref()
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
